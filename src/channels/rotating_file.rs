//! File channel that survives external log rotation
//!
//! Tools like logrotate move or delete the active log file and expect the
//! writer to start a new one. Before handing out its stream, this channel
//! checks that its path still exists and reopens it when it does not.
//! Whatever was buffered for the old file goes to the old file.

use super::file::open_append;
use crate::core::{Channel, LoggerError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-mode file channel that reopens its path when it disappears.
///
/// If the reopen fails the channel is closed: `stream()` returns
/// `LoggerError::ChannelClosed`, the record is dropped, and the next access
/// tries to open the path again.
///
/// # Examples
///
/// ```no_run
/// use logxx::channels::RotatingFileChannel;
/// use logxx::prelude::*;
///
/// let channel = RotatingFileChannel::new("/var/log/app.log").unwrap();
/// let logger = Logger::builder().channel(channel).build();
/// logger.write(LogLevel::Info).append("survives logrotate");
/// ```
pub struct RotatingFileChannel {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    reopen_count: u64,
}

impl RotatingFileChannel {
    /// # Errors
    ///
    /// Returns `LoggerError::ChannelOpen` if the file cannot be opened.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            reopen_count: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of times the file was reopened after disappearing.
    pub fn reopen_count(&self) -> u64 {
        self.reopen_count
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn reopen(&mut self) {
        if let Some(mut old) = self.writer.take() {
            if let Err(e) = old.flush() {
                eprintln!(
                    "[LOGGER WARNING] Failed to flush rotated file {}: {}",
                    self.path.display(),
                    e
                );
            }
        }

        match open_append(&self.path) {
            Ok(file) => {
                self.writer = Some(BufWriter::new(file));
                self.reopen_count += 1;
            }
            Err(e) => eprintln!("[LOGGER ERROR] {}", e),
        }
    }
}

impl Channel for RotatingFileChannel {
    fn stream(&mut self) -> Result<&mut dyn Write> {
        if self.writer.is_none() || !self.path.exists() {
            self.reopen();
        }

        match self.writer.as_mut() {
            Some(writer) => Ok(writer),
            None => Err(LoggerError::channel_closed(self.path.display().to_string())),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush().map_err(|e| {
                LoggerError::io_operation(
                    "flushing rotating log file",
                    self.path.display().to_string(),
                    e,
                )
            }),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "rotating_file"
    }
}

impl Drop for RotatingFileChannel {
    fn drop(&mut self) {
        let _ = Channel::flush(self);
    }
}
