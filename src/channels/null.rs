//! Null channel implementation

use crate::core::{Channel, Result};
use std::io::{self, Write};

/// Accepts every write and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullChannel;

impl Write for NullChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Channel for NullChannel {
    fn stream(&mut self) -> Result<&mut dyn Write> {
        Ok(self)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
