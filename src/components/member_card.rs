//! Member Card Component
//!
//! Stateless view of one [`VisualTree`]: a 3D-transformed container with one
//! absolutely positioned element per layer, back to front.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use membercard_core::VisualTree;

use crate::components::card_layers::LayerView;

/// Source of per-instance ids, so SVG gradient ids never collide
static NEXT_CARD_ID: AtomicU64 = AtomicU64::new(0);

/// CSS transform for the card's scale and tilt.
fn transform_css(tree: &VisualTree) -> String {
    let t = &tree.transform;
    format!(
        "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
        t.perspective, t.rotate_x, t.rotate_y, t.scale
    )
}

/// Member Card
///
/// Renders the layers of `tree` and reports pointer-down and mount events
/// to the owner, which feeds them back into the interaction controller.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MemberCard {
///         tree: render(&controller.read().snapshot(), &config),
///         on_press: move |evt| { /* start tracking */ },
///         on_mounted: move |evt| { /* keep element for measuring */ },
///     }
/// }
/// ```
#[component]
pub fn MemberCard(
    /// Resolved visual for the current frame
    tree: VisualTree,
    /// Pointer pressed on the card
    on_press: EventHandler<PointerEvent>,
    /// Card element mounted (used to measure its client rect)
    #[props(default)]
    on_mounted: Option<EventHandler<MountedEvent>>,
) -> Element {
    let card_id = use_hook(|| NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed));
    let transform = transform_css(&tree);
    let height = tree.height;
    let radius = tree.corner_radius;

    rsx! {
        div {
            class: "member-card",
            style: "height: {height}px; border-radius: {radius}px; transform: {transform};",
            onpointerdown: move |evt| on_press.call(evt),
            onmounted: move |evt| {
                if let Some(handler) = &on_mounted {
                    handler.call(evt);
                }
            },

            for (index, layer) in tree.layers.iter().enumerate() {
                LayerView {
                    key: "{index}",
                    layer: layer.clone(),
                    corner_radius: radius,
                    svg_id: format!("member-card-{card_id}-{index}"),
                }
            }
        }
    }
}
