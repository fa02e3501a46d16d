use std::fmt::{Display, Formatter};

/// Error type for animation setup and control.
#[derive(Debug)]
pub enum AnimationError {
    InvalidConfiguration(String),
}

impl Display for AnimationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for AnimationError {}
