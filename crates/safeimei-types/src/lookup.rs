//! Public IMEI lookup results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a looked-up IMEI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    /// The device is on the stolen list
    Stolen,
    /// No report exists for the device
    Safe,
}

impl LookupStatus {
    /// Heading of the rendered result block
    pub const fn title(self) -> &'static str {
        match self {
            Self::Stolen => "Warning!",
            Self::Safe => "All Clear!",
        }
    }

    /// Default message for this classification
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Stolen => "This device has been reported stolen. Do not buy!",
            Self::Safe => "This device has not been reported stolen. Safe to buy!",
        }
    }
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stolen => write!(f, "stolen"),
            Self::Safe => write!(f, "safe"),
        }
    }
}

/// Answer returned by the lookup boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Classification
    pub status: LookupStatus,
    /// Text shown beneath the heading
    pub message: String,
}

impl LookupResult {
    /// Result carrying the default message for `status`
    pub fn from_status(status: LookupStatus) -> Self {
        Self {
            status,
            message: status.default_message().to_string(),
        }
    }

    /// Heading of the rendered result block
    pub const fn title(&self) -> &'static str {
        self.status.title()
    }
}
