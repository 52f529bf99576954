//! Clock configuration, parsed from JSON supplied by the embedding page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::DEFAULT_INNER_RING_RATIO;
use crate::css::ClassNames;
use crate::error::ConfigError;

pub const DEFAULT_CLASS_PREFIX: &str = "mh";
pub const DEFAULT_PICKED_EVENT: &str = "picked";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Prefix for every structural class and data attribute.
    pub class_prefix: String,
    /// Inner hour ring radius as a fraction of the dial radius, in `(0, 1)`.
    pub inner_ring_ratio: f64,
    /// Name of the bubbling event dispatched when a minute pick completes.
    pub picked_event: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_owned(),
            inner_ring_ratio: DEFAULT_INNER_RING_RATIO,
            picked_event: DEFAULT_PICKED_EVENT.to_owned(),
        }
    }
}

impl ClockConfig {
    /// Parse and validate a JSON object. Absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// [`ConfigError::Invalid`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !valid_prefix(&self.class_prefix) {
            return Err(ConfigError::Invalid(format!(
                "class_prefix must be non-empty ASCII alphanumerics, '-' or '_': {:?}",
                self.class_prefix
            )));
        }
        if !(self.inner_ring_ratio > 0.0 && self.inner_ring_ratio < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "inner_ring_ratio must be in (0, 1): {}",
                self.inner_ring_ratio
            )));
        }
        if self.picked_event.trim().is_empty() {
            return Err(ConfigError::Invalid("picked_event must not be empty".into()));
        }
        Ok(())
    }

    /// Class names derived from [`Self::class_prefix`].
    #[must_use]
    pub fn class_names(&self) -> ClassNames {
        ClassNames::with_prefix(&self.class_prefix)
    }
}

/// Parse a `log` level name such as `debug` or `WARN`.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] for anything but `error`, `warn`, `info`,
/// `debug` or `trace`.
pub fn log_level(name: &str) -> Result<log::Level, ConfigError> {
    name.trim().parse::<log::Level>().map_err(|err| ConfigError::Invalid(format!("{err}: {name:?}")))
}

fn valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
