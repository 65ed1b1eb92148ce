// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Error conditions documented on the operations that matter
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::module_name_repetitions  // e.g. RouterConfig in router module
)]

//! A leveled log router: six ordered severities, a configurable threshold,
//! and dispatch to either a styled console sink (stdout/stderr split by
//! severity) or an append-only file sink with an owned long-lived stream.

pub mod domain;
pub mod global;
pub mod router;
pub mod sink;
pub mod style;

// Re-export main types for easy access
pub use domain::{RouterError, Severity, SinkMode};
pub use router::{ConfigError, LogRouter, RouterConfig};
pub use sink::ConsoleSink;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
