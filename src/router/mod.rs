//! The log router: threshold filtering and sink dispatch.

pub mod config;

pub use config::{ConfigError, RouterConfig};

use crate::domain::{RouterError, Severity, SinkMode};
use crate::sink::{ActiveSink, ConsoleSink, FileStream};
use chrono::Local;
use std::io::Write;
use std::path::Path;

/// Human-readable, seconds precision. Prefixed to every emitted line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Routes log messages to the console or an append-only file, filtered by a
/// severity threshold.
///
/// A router is an explicitly constructed, caller-owned instance; its setters
/// are the only mutation path. It is not internally synchronized — share one
/// across threads through the [`crate::global`] module or an external lock.
///
/// Lines appear in the sink in exactly the order [`LogRouter::emit`] was
/// called.
pub struct LogRouter {
    threshold: Severity,
    console: ConsoleSink,
    sink: ActiveSink,
}

impl LogRouter {
    /// A router with the most permissive threshold (TRACE) writing to the
    /// console.
    pub fn new() -> Self {
        Self::with_console(ConsoleSink::new())
    }

    /// A router whose console streams are the given writers. Useful for
    /// embedding and for capturing output in tests.
    pub fn with_console_writers(
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self::with_console(ConsoleSink::with_writers(out, err))
    }

    fn with_console(console: ConsoleSink) -> Self {
        Self {
            threshold: Severity::Trace,
            console,
            sink: ActiveSink::Console,
        }
    }

    /// Current sink mode.
    pub fn mode(&self) -> SinkMode {
        self.sink.mode()
    }

    /// Current threshold.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Path of the active file target, if the router is in FILE mode.
    pub fn file_target(&self) -> Option<&Path> {
        match &self.sink {
            ActiveSink::Console => None,
            ActiveSink::File(stream) => Some(stream.path()),
        }
    }

    /// Switches the sink mode, returning the resulting mode.
    ///
    /// Entering FILE mode requires a non-empty `target` and opens its append
    /// stream immediately; the previously open stream (switch-away or
    /// retarget) is closed when it is replaced. Switching to CONSOLE clears
    /// the file target.
    pub fn configure_mode(
        &mut self,
        mode: SinkMode,
        target: Option<&Path>,
    ) -> Result<SinkMode, RouterError> {
        match mode {
            SinkMode::Console => {
                self.sink = ActiveSink::Console;
            }
            SinkMode::File => {
                let target = target
                    .filter(|path| !path.as_os_str().is_empty())
                    .ok_or(RouterError::MissingFileTarget)?;
                let stream = FileStream::open(target)?;
                self.sink = ActiveSink::File(stream);
            }
        }
        Ok(self.mode())
    }

    /// Sets the threshold, returning the resulting level. Idempotent.
    pub fn configure_threshold(&mut self, level: Severity) -> Severity {
        self.threshold = level;
        self.threshold
    }

    /// Emits `message` at `severity` if it passes the threshold.
    ///
    /// Returns `Ok(true)` when a line was written, `Ok(false)` when the
    /// message was filtered out. File-sink I/O failures propagate.
    pub fn emit(&mut self, severity: Severity, message: &str) -> Result<bool, RouterError> {
        if severity.rank() < self.threshold.rank() {
            return Ok(false);
        }
        self.write(severity, message)?;
        Ok(true)
    }

    /// Switches the sink mode from an externally supplied name.
    ///
    /// An unrecognized name falls back to CONSOLE and announces the fallback
    /// through the router at WARN. A recognized `"file"` still requires a
    /// target.
    pub fn configure_mode_str(
        &mut self,
        mode: &str,
        target: Option<&Path>,
    ) -> Result<SinkMode, RouterError> {
        match mode.parse::<SinkMode>() {
            Ok(mode) => self.configure_mode(mode, target),
            Err(_) => {
                self.sink = ActiveSink::Console;
                self.emit(
                    Severity::Warn,
                    "sink mode is neither CONSOLE nor FILE - defaulting to CONSOLE",
                )?;
                Ok(SinkMode::Console)
            }
        }
    }

    /// Sets the threshold from an externally supplied name.
    ///
    /// An unrecognized name resolves to TRACE and announces the fallback
    /// through the router at WARN.
    pub fn configure_threshold_str(&mut self, level: &str) -> Result<Severity, RouterError> {
        match level.parse::<Severity>() {
            Ok(level) => Ok(self.configure_threshold(level)),
            Err(_) => {
                self.threshold = Severity::Trace;
                self.emit(
                    Severity::Warn,
                    "threshold is not a recognized severity - defaulting to TRACE",
                )?;
                Ok(Severity::Trace)
            }
        }
    }

    /// Emits with an externally supplied severity name.
    ///
    /// An unrecognized name is coerced to TRACE: the message is written
    /// regardless of the threshold, followed by a WARN noting the coercion.
    pub fn emit_str(&mut self, severity: &str, message: &str) -> Result<bool, RouterError> {
        match severity.parse::<Severity>() {
            Ok(severity) => self.emit(severity, message),
            Err(_) => {
                self.write(Severity::Trace, message)?;
                self.write(
                    Severity::Warn,
                    "invalid severity passed to emit - message logged at TRACE",
                )?;
                Ok(true)
            }
        }
    }

    /// Unfiltered write path: formats the line and dispatches to the active
    /// sink. Console lines are decorated; file lines are plain text.
    fn write(&mut self, severity: Severity, message: &str) -> Result<(), RouterError> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let body = format!("{}{}", severity.label(), message);
        match &mut self.sink {
            ActiveSink::Console => self.console.write_line(severity, &timestamp, &body),
            ActiveSink::File(stream) => stream.append_line(&format!("{timestamp} {body}")),
        }
    }
}

impl Default for LogRouter {
    fn default() -> Self {
        Self::new()
    }
}
