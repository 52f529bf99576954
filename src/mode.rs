//! Hour/minute pick mode.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidModeError;

/// Which unit the clock is currently picking.
///
/// The mode decides which dial is active, how pointer angles snap, and which
/// field of the time the hand shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Picking the hour on the two-ring 24-hour dial.
    #[default]
    Hour,
    /// Picking the minute on the 60-minute dial.
    Minute,
}

impl Mode {
    /// String form used in the DOM and the JavaScript surface.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }

    /// The mode a completed pick in this mode advances to.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Hour => Self::Minute,
            Self::Minute => Self::Hour,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Self::Hour),
            "minute" => Ok(Self::Minute),
            other => Err(InvalidModeError { value: other.to_owned() }),
        }
    }
}
