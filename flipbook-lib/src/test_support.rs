//! Recording sinks shared by the engine test modules.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::sink::{AudioSink, DisplaySink, SinkError};

/// Display sink that records every frame index pushed to it.
#[derive(Debug, Default)]
pub(crate) struct RecordingDisplay {
    frames: Mutex<Vec<u32>>,
}

impl RecordingDisplay {
    pub(crate) fn frames(&self) -> Vec<u32> {
        self.frames.lock().unwrap().clone()
    }
}

impl DisplaySink for RecordingDisplay {
    fn set_frame(&self, frame: u32) -> Result<(), SinkError> {
        self.frames.lock().unwrap().push(frame);
        Ok(())
    }
}

/// Audio sink that counts play/stop calls.
#[derive(Debug, Default)]
pub(crate) struct CountingAudio {
    plays: AtomicU32,
    stops: AtomicU32,
}

impl CountingAudio {
    pub(crate) fn plays(&self) -> u32 {
        self.plays.load(Ordering::SeqCst)
    }

    pub(crate) fn stops(&self) -> u32 {
        self.stops.load(Ordering::SeqCst)
    }
}

impl AudioSink for CountingAudio {
    fn play(&self) -> Result<(), SinkError> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), SinkError> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
