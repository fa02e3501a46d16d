//! The animation engine: timing state, loop counters, and run control.
//!
//! One engine instance persists across many runs. Each `start` creates a
//! fresh run with its own generation id; whichever driver is configured calls
//! back into the frame-math core until the run completes or is cancelled.

mod controls;
mod driver;
mod run;

use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::clock::{Clock, MonotonicClock};
use crate::config::AnimationConfig;
use crate::sink::{AudioSink, DisplaySink};

use run::Ticker;

/// One-shot callback invoked exactly once per run, on natural completion or
/// cancellation.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Mutable state of the current run. Reset on every `start`.
struct RunState {
    /// Epoch for the current loop pass, in the injected clock's timeline.
    start_time: Duration,
    current_loop: u32,
    completion: Option<CompletionCallback>,
}

/// Run state shared between the engine handle and the active driver thread.
struct RunShared {
    cancelled: AtomicBool,
    /// Generation counter: a driver that captured an older id stops silently.
    run_id: AtomicU64,
    run_active: AtomicBool,
    state: Mutex<RunState>,
}

/// Stateful scheduler that owns timing state and loop counters for one
/// animation at a time.
pub struct AnimationEngine {
    config: AnimationConfig,
    clock: Arc<dyn Clock>,
    display: Arc<dyn DisplaySink>,
    audio: Arc<dyn AudioSink>,
    shared: Arc<RunShared>,
}

impl AnimationEngine {
    /// Create an engine on the wall clock.
    pub fn new(
        config: AnimationConfig,
        display: Arc<dyn DisplaySink>,
        audio: Arc<dyn AudioSink>,
    ) -> Self {
        Self::with_clock(config, Arc::new(MonotonicClock::new()), display, audio)
    }

    /// Create an engine on an injected clock.
    pub fn with_clock(
        config: AnimationConfig,
        clock: Arc<dyn Clock>,
        display: Arc<dyn DisplaySink>,
        audio: Arc<dyn AudioSink>,
    ) -> Self {
        Self {
            config,
            clock,
            display,
            audio,
            shared: Arc::new(RunShared {
                cancelled: AtomicBool::new(false),
                run_id: AtomicU64::new(0),
                run_active: AtomicBool::new(false),
                state: Mutex::new(RunState {
                    start_time: Duration::ZERO,
                    current_loop: 0,
                    completion: None,
                }),
            }),
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    fn ticker(&self, run_id: u64) -> Ticker {
        Ticker {
            config: self.config,
            shared: self.shared.clone(),
            clock: self.clock.clone(),
            display: self.display.clone(),
            run_id,
        }
    }
}
