use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Selects the mechanism that decides when the engine ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverMode {
    /// Recurring interval thread, firing once per frame.
    Timer,
    /// Cooperative poll loop with sub-millisecond yields.
    BusyPoll,
}

/// Immutable per-animation settings, fixed at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Number of frames in one pass. Frame indices are 0-based.
    pub frame_count: u32,
    /// Number of full passes before the run completes.
    pub loop_count: u32,
    /// Target frame rate.
    pub frames_per_second: f64,
    pub driver_mode: DriverMode,
}

impl AnimationConfig {
    pub fn new(frame_count: u32, loop_count: u32, frames_per_second: f64) -> Self {
        Self {
            frame_count,
            loop_count,
            frames_per_second,
            driver_mode: DriverMode::Timer,
        }
    }

    pub fn with_driver_mode(mut self, driver_mode: DriverMode) -> Self {
        self.driver_mode = driver_mode;
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, AnimationError> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            AnimationError::InvalidConfiguration(format!(
                "could not read {}: {}",
                path.display(),
                err
            ))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|err| {
            AnimationError::InvalidConfiguration(format!(
                "could not parse {}: {}",
                path.display(),
                err
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all settings describe a runnable animation.
    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.frame_count == 0 {
            return Err(AnimationError::InvalidConfiguration(
                "frame_count must be positive".to_string(),
            ));
        }
        if self.loop_count == 0 {
            return Err(AnimationError::InvalidConfiguration(
                "loop_count must be positive".to_string(),
            ));
        }
        if !(self.frames_per_second > 0.0) || !self.frames_per_second.is_finite() {
            return Err(AnimationError::InvalidConfiguration(
                "frames_per_second must be positive and finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Duration of a single frame at the configured rate.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.frames_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let config = AnimationConfig::new(4, 2, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_frame_count_rejected() {
        let config = AnimationConfig::new(0, 1, 10.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_loop_count_rejected() {
        let config = AnimationConfig::new(4, 0, 10.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_rate_rejected() {
        assert!(AnimationConfig::new(4, 1, 0.0).validate().is_err());
        assert!(AnimationConfig::new(4, 1, -24.0).validate().is_err());
        assert!(AnimationConfig::new(4, 1, f64::NAN).validate().is_err());
    }

    #[test]
    fn parses_json_config() {
        let config: AnimationConfig = serde_json::from_str(
            r#"{
                "frame_count": 12,
                "loop_count": 3,
                "frames_per_second": 24.0,
                "driver_mode": "busy-poll"
            }"#,
        )
        .unwrap();
        assert_eq!(config.frame_count, 12);
        assert_eq!(config.driver_mode, DriverMode::BusyPoll);
    }

    #[test]
    fn frame_interval_matches_rate() {
        let config = AnimationConfig::new(4, 1, 10.0);
        assert_eq!(config.frame_interval(), std::time::Duration::from_millis(100));
    }
}
