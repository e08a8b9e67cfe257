//! Time sources for the toast registry.
//!
//! The registry never reads the system clock directly; it asks a [`Clock`].
//! Production code uses [`SystemClock`], tests drive a [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source
pub trait Clock {
    fn now(&self) -> Instant;

    /// Wall-clock time as Unix milliseconds
    fn timestamp_millis(&self) -> i64;
}

/// Reads `Instant::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn timestamp_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same offset, so a test can keep one handle and give
/// another to the registry.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    origin_millis: i64,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            origin_millis: chrono::Utc::now().timestamp_millis(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Convenience for `advance(Duration::from_millis(ms))`
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Time elapsed since the clock was created
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }

    fn timestamp_millis(&self) -> i64 {
        let offset = i64::try_from(self.offset.get().as_millis()).unwrap_or(i64::MAX);
        self.origin_millis.saturating_add(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::new();
        let start = clock.now();
        assert_eq!(clock.now(), start);

        clock.advance_ms(250);
        assert_eq!(clock.now() - start, Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let start = clock.now();

        handle.advance(Duration::from_secs(2));
        assert_eq!(clock.now() - start, Duration::from_secs(2));
    }

    #[test]
    fn manual_clock_wall_time_follows_offset() {
        let clock = ManualClock::new();
        let start = clock.timestamp_millis();

        clock.advance_ms(1500);
        assert_eq!(clock.timestamp_millis() - start, 1500);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
