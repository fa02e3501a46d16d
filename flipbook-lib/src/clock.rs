use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Monotonic time source injected into the engine.
///
/// Timestamps are durations since an arbitrary per-clock origin; only
/// differences between readings are meaningful.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

/// Wall-clock backed [`Clock`] measuring from its own creation.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven [`Clock`] for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    time: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, time: Duration) {
        *self.time.lock().unwrap() = time;
    }

    pub fn advance(&self, delta: Duration) {
        let mut time = self.time.lock().unwrap();
        *time += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.time.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        std::thread::sleep(Duration::from_millis(2));
        assert!(clock.now() > first);
    }

    #[test]
    fn manual_clock_is_settable() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(150));
        assert_eq!(clock.now(), Duration::from_millis(150));
        clock.set(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(1));
    }
}
