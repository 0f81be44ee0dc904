//! In-memory channel implementation

use crate::core::{Channel, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Captured {
    bytes: Vec<u8>,
    writes: usize,
    flushes: usize,
}

/// Keeps everything written to it in memory.
///
/// Clones share the same buffer, so a caller can hand one clone to a logger
/// and inspect the output through another.
///
/// # Examples
///
/// ```
/// use logxx::channels::MemoryChannel;
/// use logxx::prelude::*;
///
/// let memory = MemoryChannel::new();
/// let logger = Logger::builder().channel(memory.clone()).build();
/// logger.write(LogLevel::Info).append("captured");
///
/// assert_eq!(memory.write_count(), 1);
/// assert!(memory.contents().ends_with("captured\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryChannel {
    captured: Arc<Mutex<Captured>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.captured.lock().bytes).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.captured.lock().bytes.clone()
    }

    /// Number of writes that reached the channel.
    pub fn write_count(&self) -> usize {
        self.captured.lock().writes
    }

    pub fn flush_count(&self) -> usize {
        self.captured.lock().flushes
    }

    pub fn clear(&self) {
        let mut captured = self.captured.lock();
        captured.bytes.clear();
        captured.writes = 0;
        captured.flushes = 0;
    }
}

impl Write for MemoryChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut captured = self.captured.lock();
        captured.bytes.extend_from_slice(buf);
        captured.writes += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Channel for MemoryChannel {
    fn stream(&mut self) -> Result<&mut dyn Write> {
        Ok(self)
    }

    fn flush(&mut self) -> Result<()> {
        self.captured.lock().flushes += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
