use super::LogRouter;
use crate::domain::{RouterError, Severity, SinkMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Router error: {0}")]
    Router(#[from] RouterError),
}

/// Declarative router configuration, loadable from TOML.
///
/// ```toml
/// level = "info"
/// mode = "file"
/// file = "/var/log/app.log"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Minimum severity allowed to emit.
    pub level: Severity,
    /// Active sink.
    pub mode: SinkMode,
    /// Append target, required when `mode` is `file`.
    pub file: Option<PathBuf>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            level: Severity::Trace,
            mode: SinkMode::Console,
            file: None,
        }
    }
}

impl RouterConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == SinkMode::File {
            let usable = self
                .file
                .as_ref()
                .is_some_and(|path| !path.as_os_str().is_empty());
            if !usable {
                return Err(ConfigError::InvalidConfig(
                    "FILE mode requires a non-empty `file` path".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Builds a router in the configured state.
    pub fn build(self) -> Result<LogRouter, ConfigError> {
        self.validate()?;
        let mut router = LogRouter::new();
        router.configure_threshold(self.level);
        if self.mode == SinkMode::File {
            router.configure_mode(SinkMode::File, self.file.as_deref())?;
        }
        Ok(router)
    }
}
