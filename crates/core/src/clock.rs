//! Gravity clock: fixed-step tick accumulation.
//!
//! The simulation samples an external monotonic time once per frame and
//! drains whole ticks from it, so gravity keeps pace even when a frame
//! stalls. Over elapsed time T the clock yields exactly
//! floor(T / interval) ticks; a sample landing exactly on a tick
//! boundary fires that tick.

use std::time::Duration;

use blockfall_types::GRAVITY_TICK_MS;

/// Accumulates elapsed time against a fixed tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    accumulated: Duration,
    interval: Duration,
}

impl GravityClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            accumulated: Duration::ZERO,
            interval,
        }
    }

    /// Consume one tick if one is due at `now`.
    ///
    /// Call in a loop to catch up after a long frame; each true return
    /// advances the accumulator by exactly one interval.
    pub fn consume_tick(&mut self, now: Duration) -> bool {
        if self.accumulated + self.interval <= now {
            self.accumulated += self.interval;
            true
        } else {
            false
        }
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(GRAVITY_TICK_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tick_before_interval() {
        let mut clock = GravityClock::new(Duration::from_millis(500));
        assert!(!clock.consume_tick(Duration::from_millis(499)));
        assert_eq!(clock.accumulated(), Duration::ZERO);
    }

    #[test]
    fn test_tick_on_exact_boundary() {
        let mut clock = GravityClock::new(Duration::from_millis(500));
        assert!(clock.consume_tick(Duration::from_millis(500)));
        assert!(!clock.consume_tick(Duration::from_millis(500)));
        assert_eq!(clock.accumulated(), Duration::from_millis(500));
    }

    #[test]
    fn test_catch_up_drains_whole_ticks() {
        let mut clock = GravityClock::new(Duration::from_millis(500));
        let now = Duration::from_millis(1750);

        let mut ticks = 0;
        while clock.consume_tick(now) {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert_eq!(clock.accumulated(), Duration::from_millis(1500));
    }

    #[test]
    fn test_accumulator_tracks_exact_multiples() {
        let interval = Duration::from_millis(500);
        let mut clock = GravityClock::new(interval);

        for n in 1..=8u32 {
            let now = interval * n;
            let mut ticks = 0;
            while clock.consume_tick(now) {
                ticks += 1;
            }
            assert_eq!(ticks, 1);
            assert_eq!(clock.accumulated(), interval * n);
        }
    }
}
