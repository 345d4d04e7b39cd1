use dioxus::prelude::*;

use crate::components::CardHost;
use crate::context::get_card_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the card configuration context.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_card_config);
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        CardHost {}
    }
}
