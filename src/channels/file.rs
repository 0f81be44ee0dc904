//! File channel implementation

use crate::core::{Channel, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends records to a file opened once, at construction.
pub struct FileChannel {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileChannel {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `LoggerError::ChannelOpen` if the file cannot be opened.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open `path` in append mode, creating the file if it does not exist.
pub(crate) fn open_append(path: &Path) -> Result<File> {
    if path.as_os_str().is_empty() {
        return Err(LoggerError::config("file channel", "path is empty"));
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::channel_open(path.display().to_string(), e))
}

impl Channel for FileChannel {
    fn stream(&mut self) -> Result<&mut dyn Write> {
        Ok(&mut self.writer)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| {
            LoggerError::io_operation("flushing log file", self.path.display().to_string(), e)
        })
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileChannel {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = Channel::flush(self);
    }
}
