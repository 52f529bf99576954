//! Error types for the clock crate.
//!
//! Each fallible surface has its own small error; [`ClockError`] wraps them for
//! entry points that can fail in more than one way (mounting, the string mode
//! setter, the JavaScript widget).

/// Returned when a pick mode other than `hour` or `minute` is requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Mode must be 'hour' or 'minute'.")]
pub struct InvalidModeError {
    /// The rejected input, kept for logging.
    pub value: String,
}

/// Returned when building or parsing a [`crate::time::Time`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("hour out of range (0-23): {0}")]
    Hour(u32),
    #[error("minute out of range (0-59): {0}")]
    Minute(u32),
    #[error("second out of range (0-59): {0}")]
    Second(u32),
    /// The string is not `HH:MM` or `HH:MM:SS`.
    #[error("invalid time string: {0:?}")]
    Format(String),
}

/// Returned by [`crate::config::ClockConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse clock config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid clock config: {0}")]
    Invalid(String),
}

/// A DOM collaborator call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dom operation failed: {0}")]
pub struct DomError(pub String);

/// Umbrella error for operations that can fail in more than one way.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error(transparent)]
    InvalidMode(#[from] InvalidModeError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dom(#[from] DomError),
}
