use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Destination for emitted lines.
///
/// Transitions only happen through `LogRouter::configure_mode`; there is no
/// third state, and dispatch-time fallbacks are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkMode {
    Console,
    File,
}

/// A mode name that matched neither `CONSOLE` nor `FILE`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized sink mode: {0:?}")]
pub struct ParseSinkModeError(pub String);

impl SinkMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SinkMode::Console => "CONSOLE",
            SinkMode::File => "FILE",
        }
    }
}

impl fmt::Display for SinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkMode {
    type Err = ParseSinkModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CONSOLE" => Ok(SinkMode::Console),
            "FILE" => Ok(SinkMode::File),
            _ => Err(ParseSinkModeError(s.to_string())),
        }
    }
}
