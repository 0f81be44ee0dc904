//! Channel trait for log output destinations

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// A writable destination for formatted records.
///
/// Channels know nothing about severities; filtering happens before a record
/// ever reaches them. Both methods must be safe to call at any time after
/// construction, including `flush` on a channel that was never written to.
pub trait Channel: Send {
    /// Stream the next record is written to.
    fn stream(&mut self) -> Result<&mut dyn Write>;

    /// Push pending bytes to the underlying destination.
    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str;
}

/// Shared, reference-counted channel.
///
/// Several loggers may hold the same handle (a named logger inherits the
/// root's handle when it is created). The channel itself is dropped, and
/// therefore flushed, when the last handle goes away.
#[derive(Clone)]
pub struct ChannelHandle {
    inner: Arc<Mutex<Box<dyn Channel>>>,
}

impl ChannelHandle {
    pub fn new<C: Channel + 'static>(channel: C) -> Self {
        Self::from_boxed(Box::new(channel))
    }

    pub fn from_boxed(channel: Box<dyn Channel>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(channel)),
        }
    }

    /// Write one complete record while holding the channel lock, so records
    /// from concurrent writers never interleave.
    pub fn write_record(&self, record: &[u8]) -> Result<()> {
        let mut channel = self.inner.lock();
        channel.stream()?.write_all(record)?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.lock().flush()
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }

    /// Whether two handles refer to the same channel.
    pub fn ptr_eq(&self, other: &ChannelHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of handles currently sharing this channel.
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl fmt::Debug for ChannelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelHandle")
            .field("holders", &self.holders())
            .finish_non_exhaustive()
    }
}

impl<C: Channel + 'static> From<C> for ChannelHandle {
    fn from(channel: C) -> Self {
        ChannelHandle::new(channel)
    }
}
