//! Turn countdown driven by the caller's clock.

use serde::{Deserialize, Serialize};

/// Seconds left on the active turn.
///
/// The timer never reads a clock itself; the host advances it with `tick`.
///
/// ```
/// use tile_tactics::coordinator::TurnTimer;
///
/// let mut timer = TurnTimer::new(30.0);
/// assert!(!timer.tick(29.5));
/// assert!(timer.tick(0.5));
/// assert_eq!(timer.remaining(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnTimer {
    duration: f64,
    remaining: f64,
}

impl TurnTimer {
    /// A full timer.
    ///
    /// Panics if `duration` is not positive.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        assert!(duration > 0.0, "Turn duration must be positive");
        Self {
            duration,
            remaining: duration,
        }
    }

    /// Advance by `delta` seconds. Returns `true` once the timer has run out.
    ///
    /// Negative or NaN deltas are ignored.
    pub fn tick(&mut self, delta: f64) -> bool {
        if delta > 0.0 {
            self.remaining = (self.remaining - delta).max(0.0);
        }
        self.is_expired()
    }

    /// Refill to the full duration.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
    }

    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_and_reset() {
        let mut timer = TurnTimer::new(10.0);
        assert!(!timer.tick(4.0));
        assert_eq!(timer.remaining(), 6.0);

        assert!(timer.tick(100.0));
        assert_eq!(timer.remaining(), 0.0);

        timer.reset();
        assert_eq!(timer.remaining(), 10.0);
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_bad_deltas_are_ignored() {
        let mut timer = TurnTimer::new(5.0);
        assert!(!timer.tick(-3.0));
        assert!(!timer.tick(f64::NAN));
        assert_eq!(timer.remaining(), 5.0);
    }

    #[test]
    #[should_panic(expected = "Turn duration must be positive")]
    fn test_zero_duration() {
        let _ = TurnTimer::new(0.0);
    }
}
