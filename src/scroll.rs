//! Mouse wheel handling for the picker.
//!
//! Terminals report the wheel as a stream of single-notch events. Isolated
//! notches step the picker one row; a burst of notches in the same direction
//! within the debounce window turns into a fling, so spinning the wheel fast
//! coasts across several rows instead of crawling.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut wheel = WheelAccumulator::default();
//!
//! // In event loop:
//! match wheel.accumulate(1) {
//!     WheelMotion::Step(rows) => picker.step(rows),
//!     WheelMotion::Fling(velocity) => picker.fling(velocity),
//! }
//! ```

use std::time::{Duration, Instant};

/// What a wheel notch should do to the picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelMotion {
    /// Move by whole rows
    Step(isize),
    /// Coast with this velocity in rows per second
    Fling(f32),
}

/// Groups wheel notches into bursts.
#[derive(Debug, Clone)]
pub struct WheelAccumulator {
    /// Signed notch count of the current burst
    accumulated_delta: i32,
    /// Time of last wheel event
    last_event: Option<Instant>,
    /// Burst window in milliseconds
    debounce_ms: u64,
    /// Notches in one burst before it becomes a fling
    threshold: i32,
    /// Fling velocity contributed per notch (rows/s)
    velocity_per_notch: f32,
}

impl Default for WheelAccumulator {
    fn default() -> Self {
        Self::new(60, 3, 4.0)
    }
}

impl WheelAccumulator {
    pub fn new(debounce_ms: u64, threshold: i32, velocity_per_notch: f32) -> Self {
        Self {
            accumulated_delta: 0,
            last_event: None,
            debounce_ms,
            threshold,
            velocity_per_notch,
        }
    }

    pub fn accumulate(&mut self, delta: i32) -> WheelMotion {
        self.accumulate_at(delta, Instant::now())
    }

    /// Account for a notch received at `now`.
    pub fn accumulate_at(&mut self, delta: i32, now: Instant) -> WheelMotion {
        let continues_burst = self.last_event.is_some_and(|last| {
            now.saturating_duration_since(last) <= Duration::from_millis(self.debounce_ms)
        }) && self.accumulated_delta.signum() == delta.signum();

        if continues_burst {
            self.accumulated_delta += delta;
        } else {
            self.accumulated_delta = delta;
        }
        self.last_event = Some(now);

        if self.accumulated_delta.abs() >= self.threshold {
            WheelMotion::Fling(self.accumulated_delta as f32 * self.velocity_per_notch)
        } else {
            WheelMotion::Step(delta as isize)
        }
    }

    pub fn reset(&mut self) {
        self.accumulated_delta = 0;
        self.last_event = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_notches_step() {
        let mut wheel = WheelAccumulator::new(50, 3, 4.0);
        let start = Instant::now();

        assert_eq!(wheel.accumulate_at(1, start), WheelMotion::Step(1));
        assert_eq!(
            wheel.accumulate_at(1, start + Duration::from_millis(200)),
            WheelMotion::Step(1)
        );
        assert_eq!(
            wheel.accumulate_at(-1, start + Duration::from_millis(400)),
            WheelMotion::Step(-1)
        );
    }

    #[test]
    fn test_burst_becomes_fling() {
        let mut wheel = WheelAccumulator::new(50, 3, 4.0);
        let start = Instant::now();

        assert_eq!(wheel.accumulate_at(1, start), WheelMotion::Step(1));
        assert_eq!(
            wheel.accumulate_at(1, start + Duration::from_millis(10)),
            WheelMotion::Step(1)
        );
        assert_eq!(
            wheel.accumulate_at(1, start + Duration::from_millis(20)),
            WheelMotion::Fling(12.0)
        );
    }

    #[test]
    fn test_direction_change_restarts_burst() {
        let mut wheel = WheelAccumulator::new(50, 2, 4.0);
        let start = Instant::now();

        wheel.accumulate_at(1, start);
        assert_eq!(
            wheel.accumulate_at(-1, start + Duration::from_millis(5)),
            WheelMotion::Step(-1)
        );
        assert_eq!(
            wheel.accumulate_at(-1, start + Duration::from_millis(10)),
            WheelMotion::Fling(-8.0)
        );
    }

    #[test]
    fn test_reset_forgets_burst() {
        let mut wheel = WheelAccumulator::new(50, 2, 4.0);
        let start = Instant::now();

        wheel.accumulate_at(1, start);
        wheel.reset();
        assert_eq!(
            wheel.accumulate_at(1, start + Duration::from_millis(5)),
            WheelMotion::Step(1)
        );
    }
}
