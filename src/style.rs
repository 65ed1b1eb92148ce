//! Severity-keyed console styling.
//!
//! Styling applies to console presentation only; the file sink always
//! receives plain text.

use crate::domain::Severity;
use console::Style;

/// Visual treatment for a severity: bold-on-red for FATAL down to plain
/// white for TRACE.
pub fn style_for(severity: Severity) -> Style {
    match severity {
        Severity::Trace => Style::new().white(),
        Severity::Debug => Style::new().green(),
        Severity::Info => Style::new().blue(),
        Severity::Warn => Style::new().yellow().bold(),
        Severity::Error => Style::new().red().bold(),
        Severity::Fatal => Style::new().on_red().bold(),
    }
}

/// Applies the severity's style to `text` for console output.
///
/// Styles are attributed to the stream the line actually targets, so TTY
/// detection (and `NO_COLOR` handling) follows stderr for WARN and above.
pub fn decorate(severity: Severity, text: &str) -> String {
    let style = if severity.uses_error_stream() {
        style_for(severity).for_stderr()
    } else {
        style_for(severity)
    };
    style.apply_to(text).to_string()
}
