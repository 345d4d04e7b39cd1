//! Member Card Core Library
//!
//! Platform-independent logic behind the animated glass member card.
//!
//! ## Overview
//!
//! The card is a stack of translucent layers (light leak, glass substrate,
//! holographic tint, shimmer band, content, border, outer glow) that react
//! to a pointer held on the card. This crate owns everything that is not
//! pixels:
//!
//! - **Interaction**: pointer samples in, tilt/press/shimmer state out
//! - **Motion**: tweens, easing curves, periodic drivers and a cancellable
//!   delay timer, all driven by an injectable [`Clock`]
//! - **Render**: a pure `render(snapshot, config) -> VisualTree` that hosts
//!   translate into their own widget tree
//!
//! ## Quick Start
//!
//! ```ignore
//! use membercard_core::{
//!     render, CardConfig, InteractionController, ManualClock, NoopFeedback, Size, UnitPoint,
//! };
//!
//! let config = CardConfig::default();
//! let clock = ManualClock::new();
//! let mut controller = InteractionController::new(&config, clock.clone(), NoopFeedback);
//!
//! controller.on_pointer_change(UnitPoint::new(10.0, 20.0), Size::new(340.0, 224.0));
//! clock.advance_ms(16);
//! controller.tick();
//!
//! let tree = render(&controller.snapshot(), &config);
//! ```

pub mod config;
pub mod error;
pub mod feedback;
pub mod geometry;
pub mod interaction;
pub mod motion;
pub mod render;

// Re-exports
pub use config::{CardConfig, CardContent, CardLayout, Palette, Rgba};
pub use error::{CardError, Result};
pub use feedback::{Feedback, FeedbackLevel, NoopFeedback, RecordingFeedback, TracingFeedback};
pub use geometry::{normalize_pointer, Lerp, Size, Tilt, UnitPoint};
pub use interaction::{
    CardSnapshot, GlowIntensity, InteractionController, InteractionPhase, InteractionState,
    MotionFrame, PointerSample,
};
pub use motion::{
    AnimationSpec, Clock, DelayTimer, Easing, ManualClock, MonotonicClock, PeriodicDriver, Repeat,
    TimerHandle, Tween,
};
pub use render::{render, CardTransform, Layer, VisualTree};
