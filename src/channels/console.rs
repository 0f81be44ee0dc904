//! Console channel implementation

use crate::core::{Channel, Result};
use std::io::{self, Stderr, Write};

/// Writes records to the process's standard error.
///
/// This is the channel a logger creates for itself when it is used without
/// one.
#[derive(Debug)]
pub struct ConsoleChannel {
    stderr: Stderr,
}

impl ConsoleChannel {
    pub fn new() -> Self {
        Self {
            stderr: io::stderr(),
        }
    }
}

impl Default for ConsoleChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl Channel for ConsoleChannel {
    fn stream(&mut self) -> Result<&mut dyn Write> {
        Ok(&mut self.stderr)
    }

    fn flush(&mut self) -> Result<()> {
        self.stderr.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
