//! Output collaborators consumed by the animation engine.
//!
//! Sinks are black-box side effects: the engine pushes frame indices to a
//! [`DisplaySink`] and starts/stops an [`AudioSink`], but a sink failure never
//! aborts a run.

mod rodio_audio;

use std::fmt::{Display, Formatter};

pub use rodio_audio::RodioAudioSink;

/// Error type for display and audio sink operations.
#[derive(Debug)]
pub enum SinkError {
    Io(std::io::Error),
    Decode(String),
    Output(String),
}

impl Display for SinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Decode(err) => write!(f, "decode error: {}", err),
            Self::Output(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for SinkError {}

impl From<std::io::Error> for SinkError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Consumer of computed frame indices.
pub trait DisplaySink: Send + Sync {
    /// Show the given frame. `frame` is 0-based and always lies in
    /// `[0, frame_count - 1]`.
    fn set_frame(&self, frame: u32) -> Result<(), SinkError>;
}

/// Audio playback collaborator, started once per run and stopped on cancel.
pub trait AudioSink: Send + Sync {
    fn play(&self) -> Result<(), SinkError>;
    fn stop(&self) -> Result<(), SinkError>;
}

/// Display sink that discards every frame, for headless runs.
#[derive(Debug, Default)]
pub struct NullDisplaySink;

impl DisplaySink for NullDisplaySink {
    fn set_frame(&self, _frame: u32) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Audio sink for silent runs.
#[derive(Debug, Default)]
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn play(&self) -> Result<(), SinkError> {
        Ok(())
    }

    fn stop(&self) -> Result<(), SinkError> {
        Ok(())
    }
}
