//! Pointer-driven interaction state machine.
//!
//! ## States
//!
//! ```text
//!              pointer down / move (medium pulse on entry)
//!   +------+ -----------------------------------------> +---------+
//!   | Idle |                                           | Pressed | <-+ move
//!   +------+ <----------------------------------------- +---------+ --+
//!              pointer up (light pulse, tilt reset,
//!              shimmer restart scheduled after 300ms)
//! ```
//!
//! While idle a shimmer band sweeps across the card forever. A press stops
//! the sweep and the band follows the pointer instead. Releasing schedules
//! the sweep to restart from its first frame after a short delay; a press
//! arriving before the delay elapses cancels that restart, so at most one
//! shimmer driver is ever running.

use std::time::Duration;

use crate::config::CardConfig;
use crate::feedback::{Feedback, FeedbackLevel};
use crate::geometry::{normalize_pointer, Lerp, Size, Tilt, UnitPoint};
use crate::motion::{AnimationSpec, Clock, DelayTimer, PeriodicDriver, Repeat, Tween};

/// First phase of the idle shimmer sweep (band fully off the leading edge).
pub const SHIMMER_START: f64 = -1.5;
/// Last phase of the idle shimmer sweep (band fully off the trailing edge).
pub const SHIMMER_END: f64 = 1.8;
/// One idle sweep from start to end, constant speed.
pub const SHIMMER_SWEEP: AnimationSpec = AnimationSpec::linear(2000);
/// Delay between release and the idle sweep restarting.
pub const SHIMMER_RESTART_DELAY: Duration = Duration::from_millis(300);

/// Sparkle icon opacity range and half-cycle.
pub const SPARKLE_MIN: f64 = 0.7;
pub const SPARKLE_MAX: f64 = 1.0;
pub const SPARKLE_PULSE: AnimationSpec = AnimationSpec::ease_in_out(1000);

const TILT_MOTION: AnimationSpec = AnimationSpec::ease_out(300);
const SCALE_MOTION: AnimationSpec = AnimationSpec::ease_out(300);
const PRESS_MOTION: AnimationSpec = AnimationSpec::ease_out(300);
const LIGHT_CENTER_MOTION: AnimationSpec = AnimationSpec::ease_in_out(300);
const LIGHT_LEVEL_MOTION: [AnimationSpec; 3] = [
    AnimationSpec::ease_out(300),
    AnimationSpec::ease_out(350),
    AnimationSpec::ease_out(400),
];
const DRAG_FOCAL_MOTION: AnimationSpec = AnimationSpec::ease_out(2000);

/// Last known pointer position, normalized to the card's bounding box.
pub type PointerSample = UnitPoint;

/// Coarse interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    Pressed,
}

/// Two-level outer glow strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlowIntensity {
    Low,
    High,
}

/// Transient interaction state, owned by one mounted card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    pub pressed: bool,
    pub dragging: bool,
    pub pointer: PointerSample,
    /// Target tilt in degrees, within `[-max_tilt, max_tilt]` on each axis
    pub tilt: Tilt,
    /// Idle shimmer phase, cycling over `[SHIMMER_START, SHIMMER_END]`
    pub shimmer_phase: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            pressed: false,
            dragging: false,
            pointer: UnitPoint::CENTER,
            tilt: Tilt::NEUTRAL,
            shimmer_phase: SHIMMER_START,
        }
    }
}

impl InteractionState {
    pub fn phase(&self) -> InteractionPhase {
        if self.pressed {
            InteractionPhase::Pressed
        } else {
            InteractionPhase::Idle
        }
    }

    /// Center of the light leak. Only meaningful while pressed.
    pub fn light_focal(&self) -> Option<UnitPoint> {
        self.pressed.then_some(self.pointer)
    }

    /// Where the shimmer band is centered: the pointer while dragging,
    /// otherwise the point on the idle sweep for the current phase.
    pub fn shimmer_focal(&self) -> UnitPoint {
        if self.dragging {
            self.pointer
        } else {
            point_from_phase(self.shimmer_phase)
        }
    }

    pub fn glow_intensity(&self) -> GlowIntensity {
        if self.pressed {
            GlowIntensity::High
        } else {
            GlowIntensity::Low
        }
    }
}

/// Point on the idle sweep's diagonal for a shimmer phase.
///
/// The sweep runs twice as far horizontally as vertically.
pub fn point_from_phase(phase: f64) -> UnitPoint {
    UnitPoint::new(phase, phase * 0.5)
}

/// Animated values sampled at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub tilt: Tilt,
    pub scale: f64,
    pub light_center: UnitPoint,
    /// Press level of each light-leak glow, `0.0` idle to `1.0` pressed
    pub light_levels: [f64; 3],
    /// Press level shared by the border, outer glow and sparkle, `0.0..=1.0`
    pub press_level: f64,
    pub shimmer_focal: UnitPoint,
    pub sparkle_opacity: f64,
}

/// Everything [`crate::render`] needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSnapshot {
    pub state: InteractionState,
    pub motion: MotionFrame,
}

struct Motion {
    tilt: Tween<Tilt>,
    scale: Tween<f64>,
    press: Tween<f64>,
    light_center: Tween<UnitPoint>,
    light_levels: [Tween<f64>; 3],
    drag_focal: Tween<UnitPoint>,
}

impl Motion {
    fn new() -> Self {
        Self {
            tilt: Tween::new(Tilt::NEUTRAL, TILT_MOTION),
            scale: Tween::new(1.0, SCALE_MOTION),
            press: Tween::new(0.0, PRESS_MOTION),
            light_center: Tween::new(UnitPoint::CENTER, LIGHT_CENTER_MOTION),
            light_levels: LIGHT_LEVEL_MOTION.map(|spec| Tween::new(0.0, spec)),
            drag_focal: Tween::new(UnitPoint::CENTER, DRAG_FOCAL_MOTION),
        }
    }

    fn set_glow(&mut self, now: Duration, glow: GlowIntensity, pressed_scale: f64) {
        let (level, scale) = match glow {
            GlowIntensity::High => (1.0, pressed_scale),
            GlowIntensity::Low => (0.0, 1.0),
        };
        self.scale.retarget(now, scale);
        self.press.retarget(now, level);
        for tween in &mut self.light_levels {
            tween.retarget(now, level);
        }
    }
}

/// Owns a card's interaction state and animations.
///
/// Time comes from the injected [`Clock`] and pulses go to the injected
/// [`Feedback`], so the whole state machine runs headless in tests.
pub struct InteractionController {
    clock: Box<dyn Clock>,
    feedback: Box<dyn Feedback>,
    max_tilt: f64,
    pressed_scale: f64,
    state: InteractionState,
    motion: Motion,
    shimmer: PeriodicDriver,
    sparkle: PeriodicDriver,
    restart: DelayTimer,
    torn_down: bool,
}

impl InteractionController {
    /// Mount a controller: idle, centered, shimmer and sparkle running.
    pub fn new(
        config: &CardConfig,
        clock: impl Clock + 'static,
        feedback: impl Feedback + 'static,
    ) -> Self {
        let now = clock.now();
        let mut shimmer =
            PeriodicDriver::new(SHIMMER_START, SHIMMER_END, SHIMMER_SWEEP, Repeat::Restart);
        shimmer.start(now);
        let mut sparkle =
            PeriodicDriver::new(SPARKLE_MIN, SPARKLE_MAX, SPARKLE_PULSE, Repeat::Reverse);
        sparkle.start(now);

        Self {
            clock: Box::new(clock),
            feedback: Box::new(feedback),
            max_tilt: config.layout.max_tilt_degrees,
            pressed_scale: config.layout.pressed_scale,
            state: InteractionState::default(),
            motion: Motion::new(),
            shimmer,
            sparkle,
            restart: DelayTimer::new(),
            torn_down: false,
        }
    }

    /// Current state, with the shimmer phase as of the last [`tick`].
    ///
    /// [`tick`]: InteractionController::tick
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn phase(&self) -> InteractionPhase {
        self.state.phase()
    }

    pub fn is_shimmer_running(&self) -> bool {
        self.shimmer.is_running()
    }

    pub fn is_restart_pending(&self) -> bool {
        self.restart.is_pending()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Pointer pressed or moved at `location` (pixels, relative to the
    /// card's top-left corner) on a card of size `bounds`.
    ///
    /// Returns `false` and leaves the state untouched when `bounds` has no
    /// area or `location` is not finite.
    pub fn on_pointer_change(&mut self, location: UnitPoint, bounds: Size) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(pointer) = normalize_pointer(location, bounds) else {
            tracing::trace!(?location, ?bounds, "Ignoring pointer sample on degenerate bounds");
            return false;
        };

        let now = self.clock.now();
        let entering = !self.state.pressed;

        if let Some(handle) = self.restart.cancel_pending() {
            tracing::debug!(?handle, "Cancelled pending shimmer restart");
        }

        if entering {
            // The band glides from wherever the sweep left it to the pointer.
            let phase = self.shimmer.sample(now).unwrap_or(self.state.shimmer_phase);
            self.state.shimmer_phase = phase;
            self.motion.drag_focal.snap_to(point_from_phase(phase));
        }
        self.shimmer.stop();

        self.state.pointer = pointer;
        self.state.pressed = true;
        self.state.dragging = true;
        self.state.tilt = Tilt::from_pointer(pointer, self.max_tilt);

        self.motion.tilt.retarget(now, self.state.tilt);
        if let Some(focal) = self.state.light_focal() {
            self.motion.light_center.retarget(now, focal);
        }
        self.motion.drag_focal.retarget(now, self.state.shimmer_focal());
        self.motion
            .set_glow(now, self.state.glow_intensity(), self.pressed_scale);

        if entering {
            tracing::debug!(x = pointer.x, y = pointer.y, "Card pressed");
            self.feedback.pulse(FeedbackLevel::Medium);
        }
        true
    }

    /// Pointer lifted. Returns `false` if the card was not pressed.
    pub fn on_pointer_release(&mut self) -> bool {
        if self.torn_down || !self.state.pressed {
            return false;
        }

        let now = self.clock.now();
        self.state.pressed = false;
        self.state.dragging = false;
        self.state.tilt = Tilt::NEUTRAL;
        self.state.shimmer_phase = SHIMMER_START;

        self.motion.tilt.retarget(now, Tilt::NEUTRAL);
        self.motion
            .set_glow(now, self.state.glow_intensity(), self.pressed_scale);

        let handle = self.restart.start(now, SHIMMER_RESTART_DELAY);
        tracing::debug!(?handle, "Card released, shimmer restart scheduled");
        self.feedback.pulse(FeedbackLevel::Light);
        true
    }

    /// Advance time-driven state: fire a due shimmer restart and refresh
    /// the shimmer phase. Returns `true` when the idle sweep restarted.
    pub fn tick(&mut self) -> bool {
        if self.torn_down {
            return false;
        }

        let now = self.clock.now();
        let mut restarted = false;
        if let Some(handle) = self.restart.poll(now) {
            if !self.state.dragging {
                self.shimmer.start(now);
                restarted = true;
                tracing::debug!(?handle, "Idle shimmer restarted");
            }
        }

        if let Some(phase) = self.shimmer.sample(now) {
            self.state.shimmer_phase = phase;
        }
        restarted
    }

    /// Sample state and animations at the current time.
    pub fn snapshot(&self) -> CardSnapshot {
        let now = self.clock.now();
        let mut state = self.state;
        if let Some(phase) = self.shimmer.sample(now) {
            state.shimmer_phase = phase;
        }

        let press_level = self.motion.press.sample(now);
        let pulse = self.sparkle.sample(now).unwrap_or(SPARKLE_MAX);
        // The drag focal eases toward the pointer; the idle focal is exact.
        let shimmer_focal = if state.dragging {
            self.motion.drag_focal.sample(now)
        } else {
            state.shimmer_focal()
        };

        CardSnapshot {
            state,
            motion: MotionFrame {
                tilt: self.motion.tilt.sample(now),
                scale: self.motion.scale.sample(now),
                light_center: self.motion.light_center.sample(now),
                light_levels: [0, 1, 2].map(|i| self.motion.light_levels[i].sample(now)),
                press_level,
                shimmer_focal,
                sparkle_opacity: pulse.lerp(SPARKLE_MAX, press_level),
            },
        }
    }

    /// Stop every periodic driver and pending timer. Further input and
    /// ticks are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.shimmer.stop();
        self.sparkle.stop();
        self.restart.cancel_pending();
        self.torn_down = true;
        tracing::debug!("Interaction controller torn down");
    }
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("state", &self.state)
            .field("shimmer_running", &self.shimmer.is_running())
            .field("restart_pending", &self.restart.is_pending())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::RecordingFeedback;
    use crate::motion::ManualClock;

    const BOUNDS: Size = Size::new(340.0, 224.0);

    fn controller() -> (InteractionController, ManualClock, RecordingFeedback) {
        let clock = ManualClock::new();
        let feedback = RecordingFeedback::new();
        let controller =
            InteractionController::new(&CardConfig::default(), clock.clone(), feedback.clone());
        (controller, clock, feedback)
    }

    #[test]
    fn test_mount_defaults() {
        let (controller, _clock, feedback) = controller();
        let state = controller.state();

        assert!(!state.pressed);
        assert!(!state.dragging);
        assert_eq!(state.pointer, UnitPoint::CENTER);
        assert_eq!(state.tilt, Tilt::NEUTRAL);
        assert_eq!(state.shimmer_phase, SHIMMER_START);
        assert!(controller.is_shimmer_running());
        assert!(feedback.pulses().is_empty());
    }

    #[test]
    fn test_derived_parameters() {
        let mut state = InteractionState::default();
        assert_eq!(state.light_focal(), None);
        assert_eq!(state.glow_intensity(), GlowIntensity::Low);
        assert_eq!(state.shimmer_focal(), UnitPoint::new(-1.5, -0.75));

        state.pressed = true;
        state.dragging = true;
        state.pointer = UnitPoint::new(0.2, 0.9);
        assert_eq!(state.light_focal(), Some(UnitPoint::new(0.2, 0.9)));
        assert_eq!(state.glow_intensity(), GlowIntensity::High);
        assert_eq!(state.shimmer_focal(), UnitPoint::new(0.2, 0.9));
        assert_eq!(state.phase(), InteractionPhase::Pressed);
    }

    #[test]
    fn test_press_stops_sweep() {
        let (mut controller, clock, _feedback) = controller();
        clock.advance_ms(500);
        controller.tick();
        assert!(controller.state().shimmer_phase > SHIMMER_START);

        controller.on_pointer_change(UnitPoint::new(170.0, 112.0), BOUNDS);
        assert!(!controller.is_shimmer_running());

        let frozen = controller.state().shimmer_phase;
        clock.advance_ms(500);
        controller.tick();
        assert_eq!(controller.state().shimmer_phase, frozen);
    }

    #[test]
    fn test_release_when_idle_is_ignored() {
        let (mut controller, _clock, feedback) = controller();
        assert!(!controller.on_pointer_release());
        assert!(feedback.pulses().is_empty());
        assert!(!controller.is_restart_pending());
    }

    #[test]
    fn test_motion_settles_on_targets() {
        let (mut controller, clock, _feedback) = controller();
        controller.on_pointer_change(UnitPoint::new(340.0, 0.0), BOUNDS);
        clock.advance_ms(2500);

        let motion = controller.snapshot().motion;
        assert_eq!(motion.tilt, Tilt::new(15.0, 15.0));
        assert!((motion.scale - 1.05).abs() < 1e-9);
        assert_eq!(motion.press_level, 1.0);
        assert_eq!(motion.light_levels, [1.0, 1.0, 1.0]);
        assert_eq!(motion.light_center, UnitPoint::new(1.0, 0.0));
        assert_eq!(motion.shimmer_focal, UnitPoint::new(1.0, 0.0));
        assert!((motion.sparkle_opacity - SPARKLE_MAX).abs() < 1e-9);
    }

    #[test]
    fn test_tilt_animates_back_through_ease_out() {
        let (mut controller, clock, _feedback) = controller();
        controller.on_pointer_change(UnitPoint::new(0.0, 0.0), BOUNDS);
        clock.advance_ms(1000);
        controller.on_pointer_release();

        // Target resets at once, the rendered tilt eases back
        assert_eq!(controller.state().tilt, Tilt::NEUTRAL);
        clock.advance_ms(150);
        let halfway = controller.snapshot().motion.tilt;
        assert!(halfway.x > 0.0 && halfway.x < 15.0);
        assert!(halfway.y < 0.0 && halfway.y > -15.0);

        clock.advance_ms(150);
        assert_eq!(controller.snapshot().motion.tilt, Tilt::NEUTRAL);
    }

    #[test]
    fn test_light_levels_stagger() {
        let (mut controller, clock, _feedback) = controller();
        controller.on_pointer_change(UnitPoint::new(170.0, 112.0), BOUNDS);
        clock.advance_ms(300);

        let levels = controller.snapshot().motion.light_levels;
        assert_eq!(levels[0], 1.0);
        assert!(levels[1] < 1.0);
        assert!(levels[2] < levels[1]);
    }

    #[test]
    fn test_sparkle_pulses_while_idle() {
        let (controller, clock, _feedback) = controller();
        let start = controller.snapshot().motion.sparkle_opacity;
        assert!((start - SPARKLE_MIN).abs() < 1e-9);

        clock.advance_ms(1000);
        let peak = controller.snapshot().motion.sparkle_opacity;
        assert!((peak - SPARKLE_MAX).abs() < 1e-9);

        clock.advance_ms(1000);
        let trough = controller.snapshot().motion.sparkle_opacity;
        assert!((trough - SPARKLE_MIN).abs() < 1e-9);
    }

    #[test]
    fn test_teardown_stops_everything() {
        let (mut controller, clock, feedback) = controller();
        controller.on_pointer_change(UnitPoint::new(10.0, 10.0), BOUNDS);
        controller.on_pointer_release();
        assert!(controller.is_restart_pending());

        controller.teardown();
        assert!(controller.is_torn_down());
        assert!(!controller.is_shimmer_running());
        assert!(!controller.is_restart_pending());

        clock.advance_ms(1000);
        assert!(!controller.tick());
        assert!(!controller.is_shimmer_running());
        assert!(!controller.on_pointer_change(UnitPoint::new(10.0, 10.0), BOUNDS));
        assert_eq!(feedback.pulses().len(), 2);
    }
}
