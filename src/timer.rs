//! Cancellable one-shot deadline driven by the app clock.
//!
//! Nothing runs in the background: the owner calls [`Timer::take_due`] on
//! every tick and reacts when the deadline has passed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// A timer that is not armed
    pub fn idle() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) to fire `after` from `from`
    pub fn arm(&mut self, from: Instant, after: Duration) {
        self.deadline = Some(from + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Time left before firing, zero once due
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Disarm and return the deadline if it has passed
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_never_fires() {
        let mut timer = Timer::idle();
        assert_eq!(timer.remaining(Instant::now()), None);
        let later = Instant::now() + Duration::from_secs(60);
        assert_eq!(timer.take_due(later), None);
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::idle();
        timer.arm(t0, Duration::from_millis(1500));

        assert_eq!(timer.take_due(t0 + Duration::from_millis(1499)), None);
        assert_eq!(
            timer.take_due(t0 + Duration::from_millis(1500)),
            Some(t0 + Duration::from_millis(1500))
        );
        assert_eq!(timer.take_due(t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_cancel_disarms() {
        let t0 = Instant::now();
        let mut timer = Timer::idle();
        timer.arm(t0, Duration::from_secs(1));
        timer.cancel();
        assert_eq!(timer.take_due(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::idle();
        timer.arm(t0, Duration::from_secs(1));
        timer.arm(t0 + Duration::from_millis(900), Duration::from_secs(1));
        assert_eq!(timer.take_due(t0 + Duration::from_millis(1200)), None);
        assert!(timer.take_due(t0 + Duration::from_millis(1900)).is_some());
    }

    #[test]
    fn test_remaining_saturates() {
        let t0 = Instant::now();
        let mut timer = Timer::idle();
        assert_eq!(timer.remaining(t0), None);
        timer.arm(t0, Duration::from_secs(3));
        let second = Duration::from_secs(1);
        assert_eq!(timer.remaining(t0 + second), Some(2 * second));
        assert_eq!(timer.remaining(t0 + 4 * second), Some(Duration::ZERO));
    }
}
