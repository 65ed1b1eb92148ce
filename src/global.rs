//! Opt-in process-wide router.
//!
//! The primary API is a caller-owned [`LogRouter`]; this module wraps one
//! instance in a mutex for programs that want a single shared logger. The
//! lock guards threshold, sink mode, file target, and the open stream as one
//! atomic unit, so configuration and emission never interleave partially.

use crate::domain::{RouterError, Severity, SinkMode};
use crate::router::LogRouter;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::OnceLock;

static ROUTER: OnceLock<Mutex<LogRouter>> = OnceLock::new();

fn router() -> &'static Mutex<LogRouter> {
    ROUTER.get_or_init(|| Mutex::new(LogRouter::new()))
}

/// Runs `f` with exclusive access to the shared router.
pub fn with_router<T>(f: impl FnOnce(&mut LogRouter) -> T) -> T {
    f(&mut router().lock())
}

/// Sets the shared router's threshold, returning the resulting level.
pub fn set_threshold(level: Severity) -> Severity {
    with_router(|r| r.configure_threshold(level))
}

/// Switches the shared router's sink mode, returning the resulting mode.
pub fn set_mode(mode: SinkMode, target: Option<&Path>) -> Result<SinkMode, RouterError> {
    with_router(|r| r.configure_mode(mode, target))
}

/// Emits through the shared router.
pub fn emit(severity: Severity, message: &str) -> Result<bool, RouterError> {
    with_router(|r| r.emit(severity, message))
}

/// Emits through the shared router with an externally supplied severity name.
pub fn emit_str(severity: &str, message: &str) -> Result<bool, RouterError> {
    with_router(|r| r.emit_str(severity, message))
}

/// Restores the shared router to its initial state (TRACE, console).
///
/// Closes any open file stream. Intended for test isolation.
pub fn reset() {
    with_router(|r| *r = LogRouter::new());
}
