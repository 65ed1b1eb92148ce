use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log message, ordered from most verbose (`Trace`) to least
/// verbose (`Fatal`).
///
/// The discriminant is the filtering rank: a message is emitted when its
/// rank is at least the configured threshold's rank.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

/// A severity name that did not match any of the six levels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized severity level: {0:?}")]
pub struct ParseSeverityError(pub String);

/// A numeric rank outside the legal `0..=5` domain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("severity rank {0} is outside the legal range 0..=5")]
pub struct RankOutOfRange(pub u8);

impl Severity {
    /// All levels in ascending rank order.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Filtering rank, `0` (Trace) through `5` (Fatal).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Canonical upper-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Label prefixed to every emitted line for this severity.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Trace => "Trace - ",
            Severity::Debug => "Debug - ",
            Severity::Info => "Info - ",
            Severity::Warn => "Warn! ",
            Severity::Error => "Error!! ",
            Severity::Fatal => "Fatal!!! ",
        }
    }

    /// Whether console output for this severity goes to the error stream.
    ///
    /// WARN and above are routed to stderr; everything else to stdout.
    pub fn uses_error_stream(self) -> bool {
        self >= Severity::Warn
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Case-insensitive parse of the six level names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = RankOutOfRange;

    /// Inverse of [`Severity::rank`]. This is the validation boundary for
    /// externally supplied numeric levels.
    fn try_from(rank: u8) -> Result<Self, RankOutOfRange> {
        match rank {
            0 => Ok(Severity::Trace),
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Warn),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Fatal),
            other => Err(RankOutOfRange(other)),
        }
    }
}
