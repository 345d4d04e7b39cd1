//! Endless periodic animation.

use std::time::Duration;

use super::AnimationSpec;

/// What happens at the end of each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Jump back to `from` and sweep again.
    Restart,
    /// Sweep back to `from`, then forward again.
    Reverse,
}

/// Drives a value between `from` and `to` forever once started.
///
/// The driver holds no timer of its own: it remembers when it was started
/// and derives the value from `now` on every sample. Stopping it is just
/// forgetting the start time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicDriver {
    from: f64,
    to: f64,
    period: AnimationSpec,
    repeat: Repeat,
    started_at: Option<Duration>,
}

impl PeriodicDriver {
    /// Create a stopped driver.
    pub fn new(from: f64, to: f64, period: AnimationSpec, repeat: Repeat) -> Self {
        Self {
            from,
            to,
            period,
            repeat,
            started_at: None,
        }
    }

    /// (Re)start the sweep at `from`.
    pub fn start(&mut self, now: Duration) {
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Value at `now`, or `None` while stopped.
    pub fn sample(&self, now: Duration) -> Option<f64> {
        let started_at = self.started_at?;
        let period = self.period.duration.as_secs_f64();
        if period <= 0.0 {
            return Some(self.to);
        }

        let cycles = now.saturating_sub(started_at).as_secs_f64() / period;
        let t = match self.repeat {
            // Each period closes on `to`; the next opens on `from`.
            Repeat::Restart if cycles > 0.0 && cycles.fract() == 0.0 => 1.0,
            Repeat::Restart => cycles.fract(),
            Repeat::Reverse => {
                let t = cycles % 2.0;
                if t <= 1.0 {
                    t
                } else {
                    2.0 - t
                }
            }
        };

        let eased = self.period.easing.apply(t);
        Some(self.from * (1.0 - eased) + self.to * eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_stopped_driver_has_no_value() {
        let driver = PeriodicDriver::new(-1.5, 1.8, AnimationSpec::linear(2000), Repeat::Restart);
        assert!(!driver.is_running());
        assert_eq!(driver.sample(ms(500)), None);
    }

    #[test]
    fn test_restart_sweep() {
        let mut driver =
            PeriodicDriver::new(-1.5, 1.8, AnimationSpec::linear(2000), Repeat::Restart);
        driver.start(ms(1000));

        assert_eq!(driver.sample(ms(1000)), Some(-1.5));
        let mid = driver.sample(ms(2000)).unwrap();
        assert!((mid - 0.15).abs() < 1e-9);
        let near_end = driver.sample(ms(2999)).unwrap();
        assert!(near_end > 1.79);
        // The period closes exactly on the end value, then wraps
        assert_eq!(driver.sample(ms(3000)), Some(1.8));
        let wrapped = driver.sample(ms(3001)).unwrap();
        assert!(wrapped < -1.49);
        assert_eq!(driver.sample(ms(5000)), Some(1.8));
    }

    #[test]
    fn test_reverse_sweep() {
        let mut driver =
            PeriodicDriver::new(0.7, 1.0, AnimationSpec::linear(1000), Repeat::Reverse);
        driver.start(ms(0));

        assert!((driver.sample(ms(0)).unwrap() - 0.7).abs() < 1e-9);
        assert!((driver.sample(ms(1000)).unwrap() - 1.0).abs() < 1e-9);
        assert!((driver.sample(ms(1500)).unwrap() - 0.85).abs() < 1e-9);
        assert!((driver.sample(ms(2000)).unwrap() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_stop_and_restart() {
        let mut driver =
            PeriodicDriver::new(0.0, 1.0, AnimationSpec::linear(100), Repeat::Restart);
        driver.start(ms(0));
        driver.stop();
        assert_eq!(driver.sample(ms(50)), None);

        driver.start(ms(200));
        assert_eq!(driver.sample(ms(200)), Some(0.0));
    }
}
