use crate::domain::{RouterError, Severity};
use crate::style;
use std::io::{self, Write};

/// Console sink with a primary and an error stream.
///
/// Defaults to the process stdout/stderr; both writers are injectable so
/// embedders and tests can capture output. Lines are decorated by severity
/// before being written.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
        }
    }

    pub fn with_writers(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self { out, err }
    }

    /// Writes one decorated line, routed by severity: WARN and above go to
    /// the error stream, everything else to the primary stream.
    pub(crate) fn write_line(
        &mut self,
        severity: Severity,
        timestamp: &str,
        body: &str,
    ) -> Result<(), RouterError> {
        let decorated = style::decorate(severity, body);
        let stream: &mut dyn Write = if severity.uses_error_stream() {
            &mut self.err
        } else {
            &mut self.out
        };
        writeln!(stream, "{timestamp} {decorated}")?;
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}
