//! Easing curves.
//!
//! The named curves are `keyframe`'s CSS timing functions, so a tween
//! sampled here lines up with a CSS transition of the same name.

use keyframe::ease;
use keyframe::functions::{EaseIn, EaseInOut, EaseOut, Linear};

/// Timing curve applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    ///
    /// Both endpoints are exact, so a finished tween lands on its target.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => ease(Linear, 0.0, 1.0, t),
            Easing::EaseIn => ease(EaseIn, 0.0, 1.0, t),
            Easing::EaseOut => ease(EaseOut, 0.0, 1.0, t),
            Easing::EaseInOut => ease(EaseInOut, 0.0, 1.0, t),
        }
    }

    /// CSS keyword for this curve.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}
