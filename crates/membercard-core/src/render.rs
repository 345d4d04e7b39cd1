//! Pure layer rendering.
//!
//! [`render`] turns one [`CardSnapshot`] plus the static [`CardConfig`]
//! into a [`VisualTree`]: a flat back-to-front list of resolved layers with
//! every color, radius and gradient endpoint computed. Hosts only translate
//! the tree into their own primitives; no animation math happens there.
//!
//! Gradient endpoints and glow centers are in unit space relative to the
//! card's bounding box, and may fall outside `[0, 1]` (the idle shimmer
//! band starts and ends off-card).

use crate::config::{CardConfig, Rgba};
use crate::geometry::{Lerp, UnitPoint};
use crate::interaction::CardSnapshot;

/// Light-leak glows, innermost first: (idle radius, pressed radius, pressed opacity).
const LIGHT_GLOWS: [(f64, f64, f64); 3] = [
    (30.0, 120.0, 0.55),
    (45.0, 180.0, 0.35),
    (60.0, 240.0, 0.25),
];
/// Scale of the light-leak layer relative to the card, so it bleeds past the edges.
const LIGHT_LEAK_INFLATE: f64 = 1.06;
const LIGHT_LEAK_BLUR: f64 = 28.0;

const HOLOGRAPHIC_OPACITY: f64 = 0.08;
const GLASS_STROKE_WIDTH: f64 = 1.5;
const BORDER_WIDTH: f64 = 1.0;
const BORDER_OPACITY: (f64, f64) = (0.12, 0.4);

/// Outer halos: (idle blur, pressed blur, idle opacity, pressed opacity).
const HALOS: [(f64, f64, f64, f64); 3] = [
    (10.0, 24.0, 0.25, 0.6),
    (20.0, 44.0, 0.15, 0.45),
    (4.0, 10.0, 0.05, 0.3),
];

/// Half-extent of the drag-mode shimmer band on both axes.
const DRAG_BAND: f64 = 0.2;
/// Half-extents of the idle shimmer band, before halving the vertical one.
const IDLE_BAND: (f64, f64) = (0.15, 0.25);

/// One color stop of a gradient; `offset` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Linear gradient between two unit-space points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: UnitPoint,
    pub end: UnitPoint,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    fn new(start: UnitPoint, end: UnitPoint, stops: &[(f64, Rgba)]) -> Self {
        Self {
            start,
            end,
            stops: stops
                .iter()
                .map(|&(offset, color)| GradientStop { offset, color })
                .collect(),
        }
    }

    /// Left to right across the card's vertical center.
    fn horizontal(stops: &[(f64, Rgba)]) -> Self {
        Self::new(UnitPoint::new(0.0, 0.5), UnitPoint::new(1.0, 0.5), stops)
    }

    /// Top-left to bottom-right.
    fn diagonal(stops: &[(f64, Rgba)]) -> Self {
        Self::new(UnitPoint::new(0.0, 0.0), UnitPoint::new(1.0, 1.0), stops)
    }
}

/// Soft radial glow, fading from `color` at the center to clear at `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGlow {
    pub center: UnitPoint,
    pub radius: f64,
    pub color: Rgba,
    pub opacity: f64,
}

/// Drop-shadow halo around the whole card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halo {
    pub color: Rgba,
    pub blur_radius: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShimmerMode {
    /// Long diagonal sweep, constant speed, repeating.
    Idle,
    /// Localized highlight following the pointer.
    Drag,
}

/// Text and icon content, resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLayer {
    pub holder_name: String,
    pub follower_label: String,
    pub star_count: u8,
    pub masked_member_id: String,
    pub expiry: String,
    pub tier: String,
    pub sparkle_opacity: f64,
    pub accent: Rgba,
}

/// One visual layer, listed back to front in [`VisualTree::layers`].
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Pointer-centered glows, clipped to the card silhouette, then
    /// inflated and blurred so they bleed around the edges.
    LightLeak {
        glows: [RadialGlow; 3],
        inflate: f64,
        blur: f64,
    },
    /// Translucent dark substrate.
    BaseSurface { fill: Rgba },
    /// Faint static color fade.
    HolographicTint {
        gradient: LinearGradient,
        opacity: f64,
    },
    /// Diagonal sheen with a gradient-stroked edge.
    GlassOverlay {
        fill: LinearGradient,
        stroke: LinearGradient,
        stroke_width: f64,
    },
    /// Light gradient visible only through a narrow moving band.
    ShimmerBand {
        light: LinearGradient,
        band: LinearGradient,
        mode: ShimmerMode,
    },
    Content(ContentLayer),
    BorderOverlay {
        color: Rgba,
        width: f64,
        opacity: f64,
    },
    OuterGlow { halos: [Halo; 3] },
}

impl Layer {
    pub fn name(&self) -> &'static str {
        match self {
            Layer::LightLeak { .. } => "light-leak",
            Layer::BaseSurface { .. } => "base-surface",
            Layer::HolographicTint { .. } => "holographic-tint",
            Layer::GlassOverlay { .. } => "glass-overlay",
            Layer::ShimmerBand { .. } => "shimmer-band",
            Layer::Content(_) => "content",
            Layer::BorderOverlay { .. } => "border-overlay",
            Layer::OuterGlow { .. } => "outer-glow",
        }
    }
}

/// Whole-card 3D transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub scale: f64,
    /// Degrees around the horizontal axis
    pub rotate_x: f64,
    /// Degrees around the vertical axis
    pub rotate_y: f64,
    pub perspective: f64,
}

/// Fully resolved card visual for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualTree {
    pub corner_radius: f64,
    pub height: f64,
    pub transform: CardTransform,
    /// Back to front
    pub layers: Vec<Layer>,
}

impl VisualTree {
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name() == name)
    }
}

/// Endpoints of the shimmer mask band centered on `focal`.
pub fn shimmer_band(focal: UnitPoint, mode: ShimmerMode) -> (UnitPoint, UnitPoint) {
    match mode {
        ShimmerMode::Drag => (
            focal.offset(-DRAG_BAND, -DRAG_BAND),
            focal.offset(DRAG_BAND, DRAG_BAND),
        ),
        ShimmerMode::Idle => {
            let (dx, dy) = (IDLE_BAND.0, IDLE_BAND.1 * 0.5);
            (focal.offset(-dx, -dy), focal.offset(dx, dy))
        }
    }
}

/// Build the visual tree for one frame.
pub fn render(snapshot: &CardSnapshot, config: &CardConfig) -> VisualTree {
    let motion = &snapshot.motion;
    let palette = &config.palette;
    let layout = &config.layout;
    let clear = palette.white.with_alpha(0.0);

    let glow_colors = [palette.yellow, palette.orange, palette.white];
    let glows = [0, 1, 2].map(|i| {
        let (idle_radius, pressed_radius, pressed_opacity) = LIGHT_GLOWS[i];
        let level = motion.light_levels[i];
        RadialGlow {
            center: motion.light_center,
            radius: idle_radius.lerp(pressed_radius, level),
            color: glow_colors[i],
            opacity: 0.0_f64.lerp(pressed_opacity, level),
        }
    });

    let mode = if snapshot.state.dragging {
        ShimmerMode::Drag
    } else {
        ShimmerMode::Idle
    };
    let (band_start, band_end) = shimmer_band(motion.shimmer_focal, mode);

    let halo_colors = [palette.cyan, palette.blue, palette.white];
    let halos = [0, 1, 2].map(|i| {
        let (idle_blur, pressed_blur, idle_opacity, pressed_opacity) = HALOS[i];
        Halo {
            color: halo_colors[i],
            blur_radius: idle_blur.lerp(pressed_blur, motion.press_level),
            opacity: idle_opacity.lerp(pressed_opacity, motion.press_level),
        }
    });

    let content = &config.content;
    let layers = vec![
        Layer::LightLeak {
            glows,
            inflate: LIGHT_LEAK_INFLATE,
            blur: LIGHT_LEAK_BLUR,
        },
        Layer::BaseSurface {
            fill: palette.surface,
        },
        Layer::HolographicTint {
            gradient: LinearGradient::horizontal(&[
                (0.0, palette.cyan),
                (0.5, palette.blue),
                (1.0, palette.orange),
            ]),
            opacity: HOLOGRAPHIC_OPACITY,
        },
        Layer::GlassOverlay {
            fill: LinearGradient::diagonal(&[
                (0.0, palette.white.with_alpha(0.14)),
                (1.0, palette.white.with_alpha(0.02)),
            ]),
            stroke: LinearGradient::diagonal(&[
                (0.0, palette.white.with_alpha(0.55)),
                (1.0, palette.white.with_alpha(0.08)),
            ]),
            stroke_width: GLASS_STROKE_WIDTH,
        },
        Layer::ShimmerBand {
            light: LinearGradient::horizontal(&[
                (0.0, palette.white.with_alpha(0.35)),
                (1.0, clear),
            ]),
            band: LinearGradient::new(
                band_start,
                band_end,
                &[(0.0, clear), (0.5, palette.white), (1.0, clear)],
            ),
            mode,
        },
        Layer::Content(ContentLayer {
            holder_name: content.holder_name.clone(),
            follower_label: content.follower_label(),
            star_count: content.star_count,
            masked_member_id: content.masked_member_id(),
            expiry: content.expiry.clone(),
            tier: content.tier.clone(),
            sparkle_opacity: motion.sparkle_opacity,
            accent: palette.yellow,
        }),
        Layer::BorderOverlay {
            color: palette.white,
            width: BORDER_WIDTH,
            opacity: BORDER_OPACITY.0.lerp(BORDER_OPACITY.1, motion.press_level),
        },
        Layer::OuterGlow { halos },
    ];

    VisualTree {
        corner_radius: layout.corner_radius,
        height: layout.card_height,
        transform: CardTransform {
            scale: motion.scale,
            rotate_x: motion.tilt.x,
            rotate_y: motion.tilt.y,
            perspective: layout.perspective,
        },
        layers,
    }
}
