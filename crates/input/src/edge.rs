//! Press edge detection for terminal environments.
//!
//! The core consumes each action exactly once per physical press. Many
//! terminals repeat Press events while a key is held and some never emit
//! a Release at all, so held keys are tracked with a timeout: a press is
//! an edge only if the key is not currently considered held.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

// Without release events, a short timeout keeps a single tap from
// registering as a sustained hold.
const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 150;

/// Maximum simultaneously tracked keys.
const HELD_CAP: usize = 8;

/// Filters repeated Press events down to one edge per physical press.
#[derive(Debug, Clone)]
pub struct EdgeFilter {
    held: ArrayVec<(KeyCode, Instant), HELD_CAP>,
    release_timeout: Duration,
}

impl EdgeFilter {
    pub fn new() -> Self {
        Self::with_release_timeout(Duration::from_millis(DEFAULT_RELEASE_TIMEOUT_MS))
    }

    pub fn with_release_timeout(release_timeout: Duration) -> Self {
        Self {
            held: ArrayVec::new(),
            release_timeout,
        }
    }

    /// Record a Press event. Returns true iff this is a fresh edge.
    pub fn press(&mut self, code: KeyCode) -> bool {
        let now = Instant::now();
        let timeout = self.release_timeout;
        self.held
            .retain(|&mut (_, since)| now.duration_since(since) < timeout);

        if let Some(entry) = self.held.iter_mut().find(|(held, _)| *held == code) {
            // Still held: refresh the hold and swallow the repeat.
            entry.1 = now;
            return false;
        }

        if self.held.is_full() {
            self.held.remove(0);
        }
        self.held.push((code, now));
        true
    }

    /// Record a Release event so the next press of `code` is an edge again.
    pub fn release(&mut self, code: KeyCode) {
        self.held.retain(|&mut (held, _)| held != code);
    }
}

impl Default for EdgeFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_is_edge() {
        let mut filter = EdgeFilter::new();
        assert!(filter.press(KeyCode::Left));
    }

    #[test]
    fn test_repeat_press_is_swallowed() {
        let mut filter = EdgeFilter::new();
        assert!(filter.press(KeyCode::Left));
        assert!(!filter.press(KeyCode::Left));
        assert!(!filter.press(KeyCode::Left));
    }

    #[test]
    fn test_release_rearms_edge() {
        let mut filter = EdgeFilter::new();
        assert!(filter.press(KeyCode::Left));
        filter.release(KeyCode::Left);
        assert!(filter.press(KeyCode::Left));
    }

    #[test]
    fn test_distinct_keys_are_independent_edges() {
        let mut filter = EdgeFilter::new();
        assert!(filter.press(KeyCode::Left));
        assert!(filter.press(KeyCode::Right));
        assert!(!filter.press(KeyCode::Left));
    }

    #[test]
    fn test_timeout_rearms_edge() {
        let mut filter = EdgeFilter::with_release_timeout(Duration::ZERO);
        assert!(filter.press(KeyCode::Down));
        // Zero timeout expires the hold immediately.
        assert!(filter.press(KeyCode::Down));
    }
}
