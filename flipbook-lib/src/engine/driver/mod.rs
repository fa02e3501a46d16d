//! Drivers decide *when* the engine ticks; animation semantics live in the
//! ticker. Each run gets one driver thread, and every sink call happens on
//! that thread.

mod busy_poll;
mod timer;

use std::thread;

use crate::config::DriverMode;

use super::run::Ticker;

pub(super) fn spawn(ticker: Ticker) {
    match ticker.config.driver_mode {
        DriverMode::Timer => {
            thread::spawn(move || timer::run(ticker));
        }
        DriverMode::BusyPoll => {
            thread::spawn(move || busy_poll::run(ticker));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use crate::config::{AnimationConfig, DriverMode};
    use crate::engine::AnimationEngine;
    use crate::test_support::{CountingAudio, RecordingDisplay};

    fn run_to_completion(driver_mode: DriverMode) -> Vec<u32> {
        let display = Arc::new(RecordingDisplay::default());
        let engine = AnimationEngine::new(
            AnimationConfig::new(4, 2, 200.0).with_driver_mode(driver_mode),
            display.clone(),
            Arc::new(CountingAudio::default()),
        );
        let completions = Arc::new(AtomicU32::new(0));
        let counter = completions.clone();

        engine
            .start(Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while engine.is_running() {
            assert!(Instant::now() < deadline, "run did not complete in time");
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(completions.load(Ordering::SeqCst), 1);
        assert_eq!(engine.current_loop(), 1);
        display.frames()
    }

    #[test]
    fn timer_driver_completes_short_run() {
        let frames = run_to_completion(DriverMode::Timer);
        assert!(!frames.is_empty());
        assert!(frames.iter().all(|&f| f < 4));
    }

    #[test]
    fn busy_poll_driver_completes_short_run() {
        let frames = run_to_completion(DriverMode::BusyPoll);
        assert!(!frames.is_empty());
        assert!(frames.iter().all(|&f| f < 4));
    }

    fn cancel_mid_run(driver_mode: DriverMode) {
        let engine = AnimationEngine::new(
            // Slow enough that the run is still in flight when we cancel.
            AnimationConfig::new(10, 100, 5.0).with_driver_mode(driver_mode),
            Arc::new(RecordingDisplay::default()),
            Arc::new(CountingAudio::default()),
        );
        let completions = Arc::new(AtomicU32::new(0));
        let counter = completions.clone();

        engine
            .start(Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })))
            .unwrap();
        std::thread::sleep(Duration::from_millis(50));
        engine.cancel();

        assert_eq!(completions.load(Ordering::SeqCst), 1);
        assert!(!engine.is_running());
    }

    #[test]
    fn timer_driver_honors_cancel() {
        cancel_mid_run(DriverMode::Timer);
    }

    #[test]
    fn busy_poll_driver_honors_cancel() {
        cancel_mid_run(DriverMode::BusyPoll);
    }
}
