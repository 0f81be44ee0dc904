//! Main logger implementation
//!
//! A `Logger` composes three policies: a [`Format`] that renders the record
//! envelope, a [`Filter`] that decides whether (and where) a record is
//! written, and a default [`Channel`] type that is instantiated lazily when
//! the logger is first used without an explicit channel.

use super::{
    channel::{Channel, ChannelHandle},
    dump,
    error::Result,
    filter::{Filter, Route, StdFilter},
    format::{Format, StdFormat},
    log_level::{LogLevel, DEFAULT_THRESHOLD},
    metrics::LoggerMetrics,
    stream::LogStream,
};
use crate::channels::ConsoleChannel;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt::{self, Write as _};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU8, Ordering};

pub struct Logger<F = StdFormat, L = StdFilter, D = ConsoleChannel> {
    name: String,
    threshold: AtomicU8,
    channel: RwLock<Option<ChannelHandle>>,
    format: F,
    filter: L,
    /// Counters for written, discarded and failed records
    metrics: LoggerMetrics,
    default_channel: PhantomData<fn() -> D>,
}

impl Logger {
    /// Root logger with the default policies and threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policies("", DEFAULT_THRESHOLD, StdFormat::default(), StdFilter)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl<F, L, D> Logger<F, L, D>
where
    F: Format,
    L: Filter,
    D: Channel + Default + 'static,
{
    #[must_use]
    pub fn with_policies(name: impl Into<String>, threshold: LogLevel, format: F, filter: L) -> Self {
        Self {
            name: name.into(),
            threshold: AtomicU8::new(threshold.as_u8()),
            channel: RwLock::new(None),
            format,
            filter,
            metrics: LoggerMetrics::new(),
            default_channel: PhantomData,
        }
    }

    /// Logger name; the root logger has the empty name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    #[inline]
    pub fn threshold(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Takes effect on the next `write`; records already being written are
    /// not affected.
    pub fn set_threshold(&self, level: LogLevel) {
        self.threshold.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Whether a record at `level` would be written at all.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.filter.permits(level, self.threshold(), &self.name)
    }

    /// Like [`enabled`](Self::enabled), but a rejected record is counted as
    /// discarded. The logging macros use this to skip building the payload
    /// of filtered records.
    #[inline]
    pub fn admit(&self, level: LogLevel) -> bool {
        let enabled = self.enabled(level);
        if !enabled {
            self.metrics.record_discarded();
        }
        enabled
    }

    /// Start a record at `level`.
    ///
    /// When the filter lets the record through, the returned stream already
    /// holds the envelope and commits envelope and payload as one record when
    /// dropped. Otherwise the stream discards everything and no channel I/O
    /// happens.
    pub fn write(&self, level: LogLevel) -> LogStream<'_> {
        let slot = self.acquire_channel();

        match self.filter.route(level, self.threshold(), &self.name) {
            Route::Channel => {
                let envelope = self.format.envelope(level, &self.name);
                LogStream::to_slot(slot, envelope, &self.metrics)
            }
            Route::Redirect(target) => {
                drop(slot);
                let envelope = self.format.envelope(level, &self.name);
                LogStream::to_channel(target, envelope, &self.metrics)
            }
            Route::Discard => {
                drop(slot);
                self.metrics.record_discarded();
                LogStream::discard()
            }
        }
    }

    /// Replace the channel. The current channel, if any, is flushed first.
    ///
    /// Waits for records in flight on this logger to be committed, so
    /// calling this while holding a `LogStream` of the same logger on the
    /// same thread deadlocks.
    pub fn set_channel(&self, channel: impl Into<ChannelHandle>) {
        let mut slot = self.channel.write();
        if let Some(current) = slot.as_ref() {
            if let Err(e) = current.flush() {
                self.metrics.record_failed_write();
                eprintln!(
                    "[LOGGER ERROR] Failed to flush channel of logger '{}' before replacement: {}",
                    self.name, e
                );
            }
            self.metrics.record_channel_replacement();
        }
        *slot = Some(channel.into());
    }

    /// Current channel, creating the default one if none is assigned yet.
    pub fn channel(&self) -> ChannelHandle {
        if let Some(channel) = self.channel.read_recursive().as_ref() {
            return channel.clone();
        }
        self.channel
            .write()
            .get_or_insert_with(|| ChannelHandle::new(D::default()))
            .clone()
    }

    /// Current channel without creating a default one.
    pub fn current_channel(&self) -> Option<ChannelHandle> {
        self.channel.read_recursive().clone()
    }

    pub fn has_channel(&self) -> bool {
        self.channel.read_recursive().is_some()
    }

    pub fn flush(&self) -> Result<()> {
        match self.channel.read_recursive().as_ref() {
            Some(channel) => channel.flush(),
            None => Ok(()),
        }
    }

    /// Hex dump of `bytes` at debug severity. Does nothing when debug
    /// records are filtered out.
    pub fn dump(&self, bytes: &[u8]) {
        if !self.admit(LogLevel::Debug) {
            return;
        }
        let mut stream = self.write(LogLevel::Debug);
        let mut text = String::with_capacity(32 + bytes.len() * 3);
        dump::render(bytes, &mut text);
        let _ = stream.write_str(&text);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn format(&self) -> &F {
        &self.format
    }

    pub fn filter(&self) -> &L {
        &self.filter
    }

    /// One-time copy of the root's channel reference and threshold into a
    /// logger that nobody else can see yet.
    pub(crate) fn inherit_from(&self, root: &Logger<F, L, D>) {
        *self.channel.write() = root.current_channel();
        self.set_threshold(root.threshold());
    }

    fn acquire_channel(&self) -> RwLockReadGuard<'_, Option<ChannelHandle>> {
        let slot = self.channel.read_recursive();
        if slot.is_some() {
            return slot;
        }
        drop(slot);

        let mut slot = self.channel.write();
        slot.get_or_insert_with(|| ChannelHandle::new(D::default()));
        RwLockWriteGuard::downgrade(slot)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, L, D> fmt::Debug for Logger<F, L, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field(
                "threshold",
                &LogLevel::from_u8(self.threshold.load(Ordering::Relaxed)),
            )
            .field("has_channel", &self.channel.read_recursive().is_some())
            .finish_non_exhaustive()
    }
}

impl<F, L, D> Drop for Logger<F, L, D> {
    fn drop(&mut self) {
        if let Some(channel) = self.channel.get_mut().as_ref() {
            if let Err(e) = channel.flush() {
                eprintln!(
                    "[LOGGER ERROR] Failed to flush channel of logger '{}': {}",
                    self.name, e
                );
            }
        }
    }
}

/// Builder for creating loggers with custom policies
///
/// # Examples
///
/// ```
/// use logxx::channels::MemoryChannel;
/// use logxx::prelude::*;
///
/// let memory = MemoryChannel::new();
/// let logger = Logger::builder()
///     .name("net")
///     .threshold(LogLevel::Warning)
///     .channel(memory.clone())
///     .format(StdFormat::new().with_level_names())
///     .build();
///
/// logger.write(LogLevel::Trace).append("hidden");
/// logger.write(LogLevel::Error).append("visible");
///
/// assert_eq!(memory.write_count(), 1);
/// assert!(memory.contents().contains("<error>: visible"));
/// ```
pub struct LoggerBuilder<F = StdFormat, L = StdFilter, D = ConsoleChannel> {
    name: String,
    threshold: LogLevel,
    channel: Option<ChannelHandle>,
    format: F,
    filter: L,
    default_channel: PhantomData<fn() -> D>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            threshold: DEFAULT_THRESHOLD,
            channel: None,
            format: StdFormat::default(),
            filter: StdFilter,
            default_channel: PhantomData,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, L, D> LoggerBuilder<F, L, D>
where
    F: Format,
    L: Filter,
    D: Channel + Default + 'static,
{
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    /// Assign a channel up front instead of creating the default one lazily.
    #[must_use]
    pub fn channel(mut self, channel: impl Into<ChannelHandle>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    #[must_use]
    pub fn format<F2: Format>(self, format: F2) -> LoggerBuilder<F2, L, D> {
        LoggerBuilder {
            name: self.name,
            threshold: self.threshold,
            channel: self.channel,
            format,
            filter: self.filter,
            default_channel: PhantomData,
        }
    }

    #[must_use]
    pub fn filter<L2: Filter>(self, filter: L2) -> LoggerBuilder<F, L2, D> {
        LoggerBuilder {
            name: self.name,
            threshold: self.threshold,
            channel: self.channel,
            format: self.format,
            filter,
            default_channel: PhantomData,
        }
    }

    /// Channel type created when the logger is used without one.
    #[must_use]
    pub fn default_channel<D2: Channel + Default + 'static>(self) -> LoggerBuilder<F, L, D2> {
        LoggerBuilder {
            name: self.name,
            threshold: self.threshold,
            channel: self.channel,
            format: self.format,
            filter: self.filter,
            default_channel: PhantomData,
        }
    }

    #[must_use]
    pub fn build(self) -> Logger<F, L, D> {
        let logger = Logger::with_policies(self.name, self.threshold, self.format, self.filter);
        if let Some(channel) = self.channel {
            *logger.channel.write() = Some(channel);
        }
        logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::{MemoryChannel, NullChannel};
    use crate::core::filter::EscalatingFilter;
    use crate::core::timestamp::TimestampFormat;
    use std::sync::Arc;
    use std::thread;

    fn memory_logger(threshold: LogLevel) -> (Logger, MemoryChannel) {
        let memory = MemoryChannel::new();
        let logger = Logger::builder()
            .name("test")
            .threshold(threshold)
            .channel(memory.clone())
            .build();
        (logger, memory)
    }

    #[test]
    fn test_builder_basic() {
        let logger = Logger::builder().build();
        assert!(logger.is_root());
        assert_eq!(logger.threshold(), DEFAULT_THRESHOLD);
        assert!(!logger.has_channel());
    }

    #[test]
    fn test_visible_write_reaches_channel() {
        let (logger, memory) = memory_logger(LogLevel::Warning);

        logger.write(LogLevel::Error).append("connection reset");

        let contents = memory.contents();
        assert!(contents.contains("<1>: connection reset"));
        assert!(contents.ends_with('\n'));
        assert_eq!(logger.metrics().written_count(), 1);
    }

    #[test]
    fn test_filtered_write_touches_nothing() {
        let (logger, memory) = memory_logger(LogLevel::Warning);

        let stream = logger.write(LogLevel::Trace);
        assert!(stream.is_discard());
        stream.append("never seen");

        assert_eq!(memory.write_count(), 0);
        assert!(memory.contents().is_empty());
        assert_eq!(logger.metrics().discarded_count(), 1);
    }

    #[test]
    fn test_threshold_change_applies_to_next_write() {
        let (logger, memory) = memory_logger(LogLevel::Error);

        logger.write(LogLevel::Info).append("dropped");
        logger.set_threshold(LogLevel::Info);
        logger.write(LogLevel::Info).append("kept");

        assert_eq!(memory.write_count(), 1);
        assert!(memory.contents().contains("kept"));
        assert_eq!(logger.threshold(), LogLevel::Info);
    }

    #[test]
    fn test_lazy_default_channel() {
        let logger: Logger<StdFormat, StdFilter, NullChannel> = Logger::builder()
            .default_channel::<NullChannel>()
            .build();
        assert!(!logger.has_channel());

        logger.write(LogLevel::Fatal).append("into the void");

        assert!(logger.has_channel());
        assert_eq!(logger.channel().name(), "null");
    }

    #[test]
    fn test_channel_creates_default_without_write() {
        let logger: Logger<StdFormat, StdFilter, NullChannel> = Logger::builder()
            .default_channel::<NullChannel>()
            .build();
        assert!(logger.current_channel().is_none());

        let channel = logger.channel();
        assert_eq!(channel.name(), "null");
        assert!(logger.has_channel());
        assert!(channel.ptr_eq(&logger.channel()));
        assert_eq!(logger.metrics().written_count(), 0);
    }

    #[test]
    fn test_admit_counts_filtered_records() {
        let (logger, _memory) = memory_logger(LogLevel::Warning);

        assert!(logger.admit(LogLevel::Error));
        assert!(!logger.admit(LogLevel::Debug));
        assert_eq!(logger.metrics().discarded_count(), 1);
    }

    #[test]
    fn test_set_channel_flushes_previous() {
        let (logger, first) = memory_logger(LogLevel::Trace);
        let second = MemoryChannel::new();

        logger.write(LogLevel::Info).append("one");
        logger.set_channel(second.clone());
        logger.write(LogLevel::Info).append("two");

        assert_eq!(first.flush_count(), 1);
        assert!(first.contents().contains("one"));
        assert!(!first.contents().contains("two"));
        assert!(second.contents().contains("two"));
        assert_eq!(logger.metrics().channel_replacement_count(), 1);
    }

    #[test]
    fn test_drop_flushes_channel() {
        let (logger, memory) = memory_logger(LogLevel::Trace);
        drop(logger);
        assert_eq!(memory.flush_count(), 1);
    }

    #[test]
    fn test_dump_respects_debug_threshold() {
        let (logger, memory) = memory_logger(LogLevel::Info);
        logger.dump(&[1, 2, 3]);
        assert_eq!(memory.write_count(), 0);
        assert_eq!(logger.metrics().discarded_count(), 1);

        logger.set_threshold(LogLevel::Debug);
        logger.dump(&[0xde, 0xad, 0xbe, 0xef]);

        let contents = memory.contents();
        assert!(contents.contains("<4>: DUMP ["));
        assert!(contents.contains("(4)]:\nde ad be ef\n"));
    }

    #[test]
    fn test_escalating_filter_redirects() {
        let main = MemoryChannel::new();
        let alerts = MemoryChannel::new();
        let logger = Logger::builder()
            .threshold(LogLevel::Info)
            .channel(main.clone())
            .filter(EscalatingFilter::new(
                LogLevel::Error,
                ChannelHandle::new(alerts.clone()),
            ))
            .format(StdFormat::new().with_timestamp_format(TimestampFormat::Unix))
            .build();

        logger.write(LogLevel::Fatal).append("down");
        logger.write(LogLevel::Info).append("up");
        logger.write(LogLevel::Debug).append("noise");

        assert_eq!(alerts.write_count(), 1);
        assert!(alerts.contents().contains("<0>: down"));
        assert_eq!(main.write_count(), 1);
        assert!(main.contents().contains("<3>: up"));
    }

    #[test]
    fn test_concurrent_writes_are_line_atomic() {
        let memory = MemoryChannel::new();
        let logger = Arc::new(
            Logger::builder()
                .threshold(LogLevel::Trace)
                .channel(memory.clone())
                .build(),
        );

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for i in 0..100 {
                        let _ = logger.write(LogLevel::Info) << "thread " << t << " message " << i;
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = memory.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 800);
        for line in lines {
            assert_eq!(line.matches("<3>: ").count(), 1, "interleaved: {line}");
            assert_eq!(line.matches("thread ").count(), 1, "interleaved: {line}");
        }
    }

    #[test]
    fn test_concurrent_channel_replacement() {
        let logger = Arc::new(
            Logger::builder()
                .threshold(LogLevel::Trace)
                .channel(MemoryChannel::new())
                .build(),
        );
        let channels: Vec<MemoryChannel> = (0..4).map(|_| MemoryChannel::new()).collect();

        let writer = {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..500 {
                    logger.write(LogLevel::Debug).append(i);
                }
            })
        };
        for channel in &channels {
            logger.set_channel(channel.clone());
        }
        writer.join().unwrap();

        // Every record landed somewhere, and each one completely
        assert_eq!(logger.metrics().written_count(), 500);
        assert_eq!(logger.metrics().failed_write_count(), 0);
    }
}
