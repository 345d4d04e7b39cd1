//! Card configuration context.
//!
//! The configuration is loaded once in `main` and provided to the component
//! tree by [`App`](crate::app::App).
//!
//! ```ignore
//! let config = use_card_config();
//! let radius = config.layout.corner_radius;
//! ```

use dioxus::prelude::*;
use membercard_core::CardConfig;

/// Get the card configuration set from command line args.
pub fn get_card_config() -> CardConfig {
    crate::get_card_config()
}

/// Hook to access the card configuration from context.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}
