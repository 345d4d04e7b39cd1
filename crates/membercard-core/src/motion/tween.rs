//! From-current-to-target animation of a single value.

use std::time::Duration;

use super::Easing;
use crate::geometry::Lerp;

/// Duration and curve of one animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub const fn ease_out(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis), Easing::EaseOut)
    }

    pub const fn ease_in_out(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis), Easing::EaseInOut)
    }

    pub const fn linear(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis), Easing::Linear)
    }

    /// Eased progress after `elapsed`, in `[0, 1]`.
    ///
    /// A zero duration finishes immediately.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.apply(t)
    }
}

/// A value animating toward a target.
///
/// Retargeting mid-flight starts the new animation from the value sampled at
/// that instant, so the output never jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    started_at: Duration,
    spec: AnimationSpec,
}

impl<T: Lerp + PartialEq> Tween<T> {
    /// A tween at rest on `value`.
    pub fn new(value: T, spec: AnimationSpec) -> Self {
        Self {
            from: value,
            to: value,
            started_at: Duration::ZERO,
            spec,
        }
    }

    /// Animate toward `target`, starting from the value at `now`.
    ///
    /// Retargeting to the current target leaves the running animation alone.
    pub fn retarget(&mut self, now: Duration, target: T) {
        if target == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = target;
        self.started_at = now;
    }

    /// Jump to `value` with no animation.
    pub fn snap_to(&mut self, value: T) {
        self.from = value;
        self.to = value;
    }

    /// Interpolated value at `now`.
    pub fn sample(&self, now: Duration) -> T {
        let elapsed = now.saturating_sub(self.started_at);
        self.from.lerp(self.to, self.spec.progress(elapsed))
    }

    /// True once the animation has reached its target.
    #[cfg(test)]
    pub fn is_settled(&self, now: Duration) -> bool {
        self.from == self.to || now.saturating_sub(self.started_at) >= self.spec.duration
    }
}
