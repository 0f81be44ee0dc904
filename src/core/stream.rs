//! Write handle returned by `Logger::write`
//!
//! A `LogStream` collects the envelope and the caller's payload and commits
//! them to the channel as one record when it is dropped (or explicitly
//! committed). A discarding stream accepts appends and drops them on the
//! floor without formatting anything.

use super::channel::ChannelHandle;
use super::error::{LoggerError, Result};
use super::metrics::LoggerMetrics;
use parking_lot::RwLockReadGuard;
use std::fmt::{self, Display};
use std::io;
use std::ops::Shl;

enum Target<'a> {
    /// The logger's own channel; the read guard keeps the channel from being
    /// replaced until this record is committed.
    Slot(RwLockReadGuard<'a, Option<ChannelHandle>>),
    Redirect(ChannelHandle),
    Discard,
}

/// Handle used to append a payload after the envelope.
///
/// # Examples
///
/// ```
/// use logxx::channels::MemoryChannel;
/// use logxx::prelude::*;
///
/// let memory = MemoryChannel::new();
/// let logger = Logger::builder().channel(memory.clone()).build();
///
/// let _ = logger.write(LogLevel::Error) << "disk " << 93 << "% full";
/// assert!(memory.contents().ends_with("disk 93% full\n"));
/// ```
pub struct LogStream<'a> {
    target: Target<'a>,
    buffer: Vec<u8>,
    metrics: Option<&'a LoggerMetrics>,
}

impl<'a> LogStream<'a> {
    pub(crate) fn to_slot(
        guard: RwLockReadGuard<'a, Option<ChannelHandle>>,
        envelope: String,
        metrics: &'a LoggerMetrics,
    ) -> Self {
        Self {
            target: Target::Slot(guard),
            buffer: envelope.into_bytes(),
            metrics: Some(metrics),
        }
    }

    pub(crate) fn to_channel(
        channel: ChannelHandle,
        envelope: String,
        metrics: &'a LoggerMetrics,
    ) -> Self {
        Self {
            target: Target::Redirect(channel),
            buffer: envelope.into_bytes(),
            metrics: Some(metrics),
        }
    }

    /// The discard sink: everything appended is dropped.
    pub fn discard() -> LogStream<'static> {
        LogStream {
            target: Target::Discard,
            buffer: Vec::new(),
            metrics: None,
        }
    }

    pub fn is_discard(&self) -> bool {
        matches!(self.target, Target::Discard)
    }

    /// Bytes buffered so far, envelope included. Empty for discarding streams.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Append a displayable value.
    pub fn append<T: Display>(mut self, value: T) -> Self {
        if !self.is_discard() {
            let _ = fmt::Write::write_fmt(&mut self, format_args!("{}", value));
        }
        self
    }

    /// Commit the record now and report the outcome to the caller instead of
    /// stderr.
    pub fn commit(mut self) -> Result<()> {
        self.commit_record()
    }

    fn commit_record(&mut self) -> Result<()> {
        let target = std::mem::replace(&mut self.target, Target::Discard);
        let channel = match &target {
            Target::Slot(guard) => match guard.as_ref() {
                Some(channel) => channel,
                None => return Err(LoggerError::channel_closed("unassigned")),
            },
            Target::Redirect(channel) => channel,
            Target::Discard => return Ok(()),
        };

        if self.buffer.last() != Some(&b'\n') {
            self.buffer.push(b'\n');
        }

        let result = channel.write_record(&self.buffer);
        if let Some(metrics) = self.metrics {
            match result {
                Ok(()) => metrics.record_written(),
                Err(_) => metrics.record_failed_write(),
            };
        }
        self.buffer.clear();
        result
    }
}

impl Drop for LogStream<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.commit_record() {
            eprintln!("[LOGGER ERROR] Failed to write record: {}", e);
        }
    }
}

impl fmt::Write for LogStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if !self.is_discard() {
            self.buffer.extend_from_slice(s.as_bytes());
        }
        Ok(())
    }
}

impl io::Write for LogStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.is_discard() {
            self.buffer.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a, T: Display> Shl<T> for LogStream<'a> {
    type Output = LogStream<'a>;

    fn shl(self, rhs: T) -> Self::Output {
        self.append(rhs)
    }
}

impl fmt::Debug for LogStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStream")
            .field("discard", &self.is_discard())
            .field("pending", &String::from_utf8_lossy(&self.buffer))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::MemoryChannel;
    use std::fmt::Write as _;

    #[test]
    fn test_discard_drops_everything() {
        let mut stream = LogStream::discard();
        write!(stream, "ignored {}", 1).unwrap();
        let stream = stream << "more";
        assert!(stream.is_discard());
        assert!(stream.pending().is_empty());
        assert!(stream.commit().is_ok());
    }

    #[test]
    fn test_redirect_commits_one_record() {
        let memory = MemoryChannel::new();
        let metrics = LoggerMetrics::new();
        let stream = LogStream::to_channel(
            ChannelHandle::new(memory.clone()),
            "env: ".to_string(),
            &metrics,
        );

        let stream = stream << "a" << 1 << 'b';
        assert_eq!(stream.pending(), b"env: a1b");
        drop(stream);

        assert_eq!(memory.contents(), "env: a1b\n");
        assert_eq!(memory.write_count(), 1);
        assert_eq!(metrics.written_count(), 1);
    }

    #[test]
    fn test_existing_newline_kept() {
        let memory = MemoryChannel::new();
        let metrics = LoggerMetrics::new();
        let mut stream =
            LogStream::to_channel(ChannelHandle::new(memory.clone()), String::new(), &metrics);
        writeln!(stream, "line").unwrap();
        stream.commit().unwrap();

        assert_eq!(memory.contents(), "line\n");
    }

    #[test]
    fn test_io_write() {
        use std::io::Write as _;

        let memory = MemoryChannel::new();
        let metrics = LoggerMetrics::new();
        let mut stream =
            LogStream::to_channel(ChannelHandle::new(memory.clone()), String::new(), &metrics);
        stream.write_all(b"bytes").unwrap();
        drop(stream);

        assert_eq!(memory.contents(), "bytes\n");
    }

    #[test]
    fn test_io_write_split_utf8() {
        use std::io::Write as _;

        let memory = MemoryChannel::new();
        let metrics = LoggerMetrics::new();
        let mut stream =
            LogStream::to_channel(ChannelHandle::new(memory.clone()), "env: ".to_string(), &metrics);
        stream.write_all(&[0xC3]).unwrap();
        stream.write_all(&[0xA9]).unwrap();
        drop(stream);

        assert_eq!(memory.contents(), "env: \u{e9}\n");
    }

    #[test]
    fn test_io_write_keeps_raw_bytes() {
        use std::io::Write as _;

        let memory = MemoryChannel::new();
        let metrics = LoggerMetrics::new();
        let mut stream =
            LogStream::to_channel(ChannelHandle::new(memory.clone()), String::new(), &metrics);
        stream.write_all(&[0xff, 0x00]).unwrap();
        drop(stream);

        assert_eq!(memory.bytes(), vec![0xff, 0x00, b'\n']);
    }
}
