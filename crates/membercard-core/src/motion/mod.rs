//! Motion primitives.
//!
//! Every animated property of the card goes through the same small set of
//! building blocks:
//!
//! - [`Tween`]: animate a value from wherever it currently is to a target,
//!   over an [`AnimationSpec`] (duration + [`Easing`])
//! - [`PeriodicDriver`]: an endless sweep between two values, either
//!   restarting or reversing at the end of each period
//! - [`DelayTimer`]: a cancellable single-shot timer
//! - [`Clock`]: the time source; [`ManualClock`] lets tests step time
//!
//! All of them take `now` as a [`Duration`] since the clock's origin, so
//! nothing here reads wall-clock time on its own.
//!
//! [`Duration`]: std::time::Duration

mod clock;
mod driver;
mod easing;
mod timer;
mod tween;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use driver::{PeriodicDriver, Repeat};
pub use easing::Easing;
pub use timer::{DelayTimer, TimerHandle};
pub use tween::{AnimationSpec, Tween};
