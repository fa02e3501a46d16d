//! # Flipbook Library
//!
//! This library drives timed, loopable frame-sequence animations in sync with
//! audio playback. It converts monotonic elapsed time into a discrete frame
//! index at a configured rate, pushes that index to a display sink, and
//! signals completion exactly once per run, whether the run ends naturally or
//! is cancelled.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod sink;

#[cfg(test)]
mod test_support;
