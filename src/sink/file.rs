use crate::domain::RouterError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Long-lived append stream bound to one file target.
///
/// The handle is opened when FILE mode is entered and closed when the value
/// is dropped (leaving FILE mode or retargeting). Appends are synchronous,
/// one line per write, so the file is readable immediately after a write
/// returns.
#[derive(Debug)]
pub struct FileStream {
    path: PathBuf,
    file: File,
}

impl FileStream {
    /// Opens `path` for appending, creating it if missing. The parent
    /// directory must already exist.
    pub fn open(path: &Path) -> Result<Self, RouterError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a trailing newline. I/O failures propagate.
    pub(crate) fn append_line(&mut self, line: &str) -> Result<(), RouterError> {
        writeln!(self.file, "{line}")?;
        Ok(())
    }
}
