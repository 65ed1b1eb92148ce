//! The two line sinks and the ownership-based active-sink state.

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::FileStream;

use crate::domain::SinkMode;

/// Which sink currently receives emitted lines.
///
/// FILE mode always carries its open stream, so a FILE state with no target
/// is unrepresentable, and replacing the variant closes the previous stream.
#[derive(Debug)]
pub(crate) enum ActiveSink {
    Console,
    File(FileStream),
}

impl ActiveSink {
    pub(crate) fn mode(&self) -> SinkMode {
        match self {
            ActiveSink::Console => SinkMode::Console,
            ActiveSink::File(_) => SinkMode::File,
        }
    }
}
