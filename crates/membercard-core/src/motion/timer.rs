//! Cancellable single-shot timer.

use std::time::Duration;

/// Identifies one scheduled firing of a [`DelayTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    handle: TimerHandle,
    deadline: Duration,
}

/// A single-shot timer polled against a clock.
///
/// At most one firing is pending at a time. Starting the timer again
/// supersedes the previous firing, and a handle that was cancelled or
/// superseded never fires.
#[derive(Debug, Clone, Default)]
pub struct DelayTimer {
    next_id: u64,
    pending: Option<Pending>,
}

impl DelayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a firing `delay` after `now`, replacing any pending one.
    pub fn start(&mut self, now: Duration, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            handle,
            deadline: now + delay,
        });
        handle
    }

    /// Cancel `handle` if it is still pending. Returns whether it was.
    #[cfg(test)]
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending {
            Some(pending) if pending.handle == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel whatever is pending.
    pub fn cancel_pending(&mut self) -> Option<TimerHandle> {
        self.pending.take().map(|p| p.handle)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(test)]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.deadline)
    }

    /// Fire the pending handle if its deadline has passed.
    ///
    /// A handle is returned at most once.
    pub fn poll(&mut self, now: Duration) -> Option<TimerHandle> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.handle)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_fires_once_after_deadline() {
        let mut timer = DelayTimer::new();
        let handle = timer.start(ms(100), ms(300));

        assert_eq!(timer.poll(ms(399)), None);
        assert_eq!(timer.poll(ms(400)), Some(handle));
        assert_eq!(timer.poll(ms(401)), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut timer = DelayTimer::new();
        let handle = timer.start(ms(0), ms(300));

        assert!(timer.cancel(handle));
        assert!(!timer.cancel(handle));
        assert_eq!(timer.poll(ms(1000)), None);
    }

    #[test]
    fn test_restart_supersedes_previous() {
        let mut timer = DelayTimer::new();
        let first = timer.start(ms(0), ms(300));
        let second = timer.start(ms(200), ms(300));
        assert_ne!(first, second);

        // The first deadline passes without firing
        assert_eq!(timer.poll(ms(300)), None);
        assert!(!timer.cancel(first));
        assert_eq!(timer.poll(ms(500)), Some(second));
    }

    #[test]
    fn test_cancel_pending() {
        let mut timer = DelayTimer::new();
        assert_eq!(timer.cancel_pending(), None);

        let handle = timer.start(ms(0), ms(10));
        assert_eq!(timer.deadline(), Some(ms(10)));
        assert_eq!(timer.cancel_pending(), Some(handle));
        assert_eq!(timer.deadline(), None);
    }
}
