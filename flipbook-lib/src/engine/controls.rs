//! Run lifecycle operations for `AnimationEngine`.
//!
//! Methods here coordinate run-state transitions with the driver thread and
//! expose user-facing control primitives (start/cancel, progress inspection).

use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use log::{info, warn};

use super::{driver, AnimationEngine, CompletionCallback};
use crate::error::AnimationError;

impl AnimationEngine {
    /// Begin a new run, superseding any run still in flight.
    ///
    /// Fails with [`AnimationError::InvalidConfiguration`] before any side
    /// effect when the configuration is not runnable. A prior run's driver
    /// observes the bumped generation id and stops silently; its completion
    /// callback is discarded unfired.
    pub fn start(&self, completion: Option<CompletionCallback>) -> Result<(), AnimationError> {
        self.config.validate()?;

        let run_id = self.shared.run_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.cancelled.store(false, Ordering::SeqCst);
        {
            let mut state = self.shared.state.lock().unwrap();
            state.start_time = self.clock.now();
            state.current_loop = 0;
            state.completion = completion;
        }
        self.shared.run_active.store(true, Ordering::SeqCst);

        if let Err(err) = self.audio.play() {
            warn!("audio sink failed to start: {}", err);
        }

        info!(
            "starting animation run {}: {} frames x {} loops at {} fps",
            run_id, self.config.frame_count, self.config.loop_count, self.config.frames_per_second
        );

        driver::spawn(self.ticker(run_id));
        Ok(())
    }

    /// Cancel the current run. Idempotent and callable from any thread.
    ///
    /// Stops the audio sink and fires the completion callback if it has not
    /// already fired. Calling with no run active, twice, or after natural
    /// completion is a no-op beyond the (already consumed) callback slot.
    pub fn cancel(&self) {
        self.shared.cancelled.store(true, Ordering::SeqCst);

        if let Err(err) = self.audio.stop() {
            warn!("audio sink failed to stop: {}", err);
        }

        let callback = {
            let mut state = self.shared.state.lock().unwrap();
            self.shared.run_active.store(false, Ordering::SeqCst);
            state.completion.take()
        };

        if let Some(callback) = callback {
            info!("animation run cancelled");
            callback();
        }
    }

    /// Return true while a run is in flight.
    pub fn is_running(&self) -> bool {
        self.shared.run_active.load(Ordering::SeqCst)
    }

    /// Index of the loop pass the current run is in.
    pub fn current_loop(&self) -> u32 {
        self.shared.state.lock().unwrap().current_loop
    }

    /// Block the calling thread until the current run finishes.
    pub fn wait_until_finished(&self) {
        loop {
            if !self.is_running() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }
}
