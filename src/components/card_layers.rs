//! Layer views.
//!
//! One element per [`Layer`]. Flat fills and glows are CSS on a `div`;
//! anything with gradient endpoints in card space (tint, glass, shimmer) is
//! an SVG whose gradients use bounding-box units, so the endpoints from the
//! visual tree map across unchanged.

use dioxus::prelude::*;
use membercard_core::render::{ContentLayer, Halo, LinearGradient, RadialGlow};
use membercard_core::Layer;

use crate::theme::colors::{TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

/// CSS `radial-gradient()` for one light-leak glow.
fn radial_glow_css(glow: &RadialGlow) -> String {
    format!(
        "radial-gradient(circle {:.1}px at {:.2}% {:.2}%, {} 0%, transparent 100%)",
        glow.radius,
        glow.center.x * 100.0,
        glow.center.y * 100.0,
        glow.color.fade(glow.opacity).css()
    )
}

/// CSS `box-shadow` list for the outer halos.
fn halo_shadow_css(halos: &[Halo]) -> String {
    halos
        .iter()
        .map(|halo| {
            format!(
                "0 0 {:.1}px {}",
                halo.blur_radius,
                halo.color.fade(halo.opacity).css()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `<linearGradient>` definition in bounding-box units.
#[component]
fn GradientDef(id: String, gradient: LinearGradient) -> Element {
    rsx! {
        linearGradient {
            id: "{id}",
            x1: gradient.start.x,
            y1: gradient.start.y,
            x2: gradient.end.x,
            y2: gradient.end.y,
            for (index, color_stop) in gradient.stops.iter().enumerate() {
                stop {
                    key: "{index}",
                    offset: color_stop.offset,
                    stop_color: color_stop.color.css_rgb(),
                    stop_opacity: color_stop.color.a,
                }
            }
        }
    }
}

/// Text and icon content.
#[component]
fn ContentView(content: ContentLayer) -> Element {
    let stars = "★".repeat(content.star_count as usize);
    let accent = content.accent.css();
    let sparkle = content.sparkle_opacity;

    rsx! {
        div { class: "member-card__layer member-card__content",
            // Header: name, followers, rating
            div { class: "member-card__header",
                div {
                    div {
                        class: "member-card__name",
                        style: "color: {TEXT_PRIMARY};",
                        "{content.holder_name}"
                    }
                    div {
                        class: "member-card__followers",
                        style: "color: {TEXT_SECONDARY};",
                        "{content.follower_label} followers"
                    }
                }
                div {
                    class: "member-card__stars",
                    style: "color: {accent};",
                    "{stars}"
                }
            }

            div { class: "member-card__spacer" }

            // Footer: member id, expiry, tier
            div { class: "member-card__footer",
                div {
                    div {
                        class: "member-card__id",
                        style: "color: {TEXT_PRIMARY};",
                        "{content.masked_member_id}"
                    }
                    span {
                        class: "member-card__label",
                        style: "color: {TEXT_MUTED};",
                        "Expires {content.expiry}"
                    }
                }
                div {
                    class: "member-card__tier",
                    style: "color: {TEXT_PRIMARY};",
                    span { style: "opacity: {sparkle}; color: {accent};", "✦" }
                    span { "{content.tier}" }
                }
            }
        }
    }
}

/// Render one layer of the card.
#[component]
pub fn LayerView(
    layer: Layer,
    corner_radius: f64,
    /// Prefix for SVG element ids, unique per card and layer
    svg_id: String,
) -> Element {
    match layer {
        Layer::LightLeak {
            glows,
            inflate,
            blur,
        } => {
            let background = glows
                .iter()
                .map(radial_glow_css)
                .collect::<Vec<_>>()
                .join(", ");
            rsx! {
                div {
                    class: "member-card__layer",
                    style: "border-radius: {corner_radius}px; background: {background}; transform: scale({inflate}); filter: blur({blur}px);",
                }
            }
        }

        Layer::BaseSurface { fill } => {
            let fill = fill.css();
            rsx! {
                div {
                    class: "member-card__layer",
                    style: "border-radius: {corner_radius}px; background: {fill};",
                }
            }
        }

        Layer::HolographicTint { gradient, opacity } => {
            let fill_id = format!("{svg_id}-tint");
            rsx! {
                svg { class: "member-card__svg", opacity: opacity,
                    defs {
                        GradientDef { id: fill_id.clone(), gradient }
                    }
                    rect {
                        width: "100%",
                        height: "100%",
                        rx: corner_radius,
                        fill: "url(#{fill_id})",
                    }
                }
            }
        }

        Layer::GlassOverlay {
            fill,
            stroke,
            stroke_width,
        } => {
            let fill_id = format!("{svg_id}-fill");
            let stroke_id = format!("{svg_id}-stroke");
            rsx! {
                svg { class: "member-card__svg",
                    defs {
                        GradientDef { id: fill_id.clone(), gradient: fill }
                        GradientDef { id: stroke_id.clone(), gradient: stroke }
                    }
                    rect {
                        width: "100%",
                        height: "100%",
                        rx: corner_radius,
                        fill: "url(#{fill_id})",
                    }
                    rect {
                        width: "100%",
                        height: "100%",
                        rx: corner_radius,
                        fill: "none",
                        stroke: "url(#{stroke_id})",
                        stroke_width: stroke_width,
                    }
                }
            }
        }

        Layer::ShimmerBand { light, band, .. } => {
            let light_id = format!("{svg_id}-light");
            let band_id = format!("{svg_id}-band");
            let mask_id = format!("{svg_id}-mask");
            rsx! {
                svg { class: "member-card__svg",
                    defs {
                        GradientDef { id: light_id.clone(), gradient: light }
                        GradientDef { id: band_id.clone(), gradient: band }
                        mask { id: "{mask_id}",
                            rect {
                                width: "100%",
                                height: "100%",
                                fill: "url(#{band_id})",
                            }
                        }
                    }
                    rect {
                        width: "100%",
                        height: "100%",
                        rx: corner_radius,
                        fill: "url(#{light_id})",
                        mask: "url(#{mask_id})",
                    }
                }
            }
        }

        Layer::Content(content) => rsx! {
            ContentView { content }
        },

        Layer::BorderOverlay {
            color,
            width,
            opacity,
        } => {
            let color = color.fade(opacity).css();
            rsx! {
                div {
                    class: "member-card__layer",
                    style: "border-radius: {corner_radius}px; border: {width}px solid {color};",
                }
            }
        }

        Layer::OuterGlow { halos } => {
            let shadow = halo_shadow_css(&halos);
            rsx! {
                div {
                    class: "member-card__layer",
                    style: "border-radius: {corner_radius}px; box-shadow: {shadow};",
                }
            }
        }
    }
}
