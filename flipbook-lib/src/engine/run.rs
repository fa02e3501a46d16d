//! Frame-math core shared by both drivers.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use log::warn;

use crate::clock::Clock;
use crate::config::AnimationConfig;
use crate::sink::DisplaySink;

use super::RunShared;

/// Per-run tick context handed to the driver thread.
///
/// All `RunState` mutation happens through the ticker on the driver thread;
/// the engine handle only flips atomics and swaps the completion slot.
pub(super) struct Ticker {
    pub(super) config: AnimationConfig,
    pub(super) shared: Arc<RunShared>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) display: Arc<dyn DisplaySink>,
    pub(super) run_id: u64,
}

impl Ticker {
    /// Advance the animation by recomputing the frame index from elapsed
    /// time. Returns `false` when the driver must stop ticking.
    ///
    /// Deriving the index from the clock rather than incrementing a counter
    /// makes the run self-correcting: late or missed ticks land on whatever
    /// frame the wall clock says is current.
    pub(super) fn tick(&self) -> bool {
        if self.is_stale() {
            return false;
        }
        if self.shared.cancelled.load(Ordering::SeqCst) {
            return false;
        }

        let frame_count = u64::from(self.config.frame_count);
        let (frames_passed, frame, last_loop) = {
            let state = self.shared.state.lock().unwrap();
            let elapsed = self.clock.now().saturating_sub(state.start_time);
            let frames_passed =
                (elapsed.as_secs_f64() * self.config.frames_per_second).floor() as u64;
            let frame = (frames_passed % frame_count) as u32;
            let last_loop = state.current_loop + 1 >= self.config.loop_count;
            (frames_passed, frame, last_loop)
        };

        if let Err(err) = self.display.set_frame(frame) {
            warn!("display sink rejected frame {}: {}", frame, err);
        }

        if frames_passed >= frame_count {
            // A full pass has elapsed.
            if last_loop {
                return false;
            }
            let mut state = self.shared.state.lock().unwrap();
            // The lock was released across the set_frame call; a restart may
            // have superseded this run in the meantime, and the boundary
            // mutation must not touch the new run's state.
            if self.is_stale() {
                return false;
            }
            state.current_loop += 1;
            state.start_time = self.clock.now();
            #[cfg(feature = "debug")]
            log::info!("run {}: entering loop pass {}", self.run_id, state.current_loop);
        }

        true
    }

    /// Fire the stored completion callback, at most once per run.
    ///
    /// Called by the driver after the first `false` tick. The generation
    /// check happens under the state lock so a stale driver can never consume
    /// a superseding run's callback.
    pub(super) fn finish_run(&self) {
        let callback = {
            let mut state = self.shared.state.lock().unwrap();
            if self.is_stale() {
                return;
            }
            state.completion.take()
        };

        // Invoke outside the lock; the callback may call back into the
        // engine (e.g. start a new run).
        if let Some(callback) = callback {
            callback();
        }

        let _state = self.shared.state.lock().unwrap();
        if !self.is_stale() {
            self.shared.run_active.store(false, Ordering::SeqCst);
        }
    }

    pub(super) fn is_stale(&self) -> bool {
        self.shared.run_id.load(Ordering::SeqCst) != self.run_id
    }

    pub(super) fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::SeqCst)
    }
}
