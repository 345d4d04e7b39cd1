//! Geometry primitives shared by interaction and rendering.
//!
//! Positions on the card are expressed in unit space: `(0, 0)` is the
//! top-left corner of the card's bounding box and `(1, 1)` the bottom-right.

use serde::{Deserialize, Serialize};

/// Linear interpolation between two values of the same type.
///
/// Implemented for everything a [`crate::Tween`] can animate.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// A point in unit space (or raw pixels, before normalization).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const CENTER: UnitPoint = UnitPoint { x: 0.5, y: 0.5 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset both axes.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Lerp for UnitPoint {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

/// Rendered size of the card in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Card rotation in degrees.
///
/// `x` rotates around the horizontal screen axis, `y` around the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Tilt for a normalized pointer position.
    ///
    /// Pointer right of center turns the card around the vertical axis by a
    /// positive angle; pointer above center pushes the top edge away.
    pub fn from_pointer(pointer: UnitPoint, max_degrees: f64) -> Self {
        Self {
            x: -((pointer.y - 0.5) / 0.5) * max_degrees,
            y: ((pointer.x - 0.5) / 0.5) * max_degrees,
        }
    }
}

impl Lerp for Tilt {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

/// Normalize a pixel location into unit space, clamped to `[0, 1]`.
///
/// Returns `None` for degenerate bounds or non-finite locations so callers
/// keep their last valid sample instead of dividing by zero.
pub fn normalize_pointer(location: UnitPoint, bounds: Size) -> Option<UnitPoint> {
    if bounds.is_degenerate() || !location.x.is_finite() || !location.y.is_finite() {
        return None;
    }

    Some(UnitPoint::new(
        (location.x / bounds.width).clamp(0.0, 1.0),
        (location.y / bounds.height).clamp(0.0, 1.0),
    ))
}
