use thiserror::Error;

/// Top-level error type for router operations.
///
/// I/O failures on the file sink always propagate to the caller; they are
/// never swallowed internally.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("FILE mode requires a non-empty log file path")]
    MissingFileTarget,

    #[error("log sink I/O error: {0}")]
    Io(#[from] std::io::Error),
}
