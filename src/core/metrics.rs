//! Logger metrics for observability
//!
//! Counters describing what happened on a logger's write path.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for a single logger
///
/// # Example
///
/// ```
/// use logxx::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_discarded();
///
/// assert_eq!(metrics.written_count(), 1);
/// assert_eq!(metrics.discarded_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Records committed to a channel
    written: AtomicU64,

    /// Records rejected by the filter
    discarded: AtomicU64,

    /// Records or flushes that failed at the channel
    failed_writes: AtomicU64,

    /// Number of times the channel was replaced
    channel_replacements: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
            channel_replacements: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn discarded_count(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_write_count(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn channel_replacement_count(&self) -> u64 {
        self.channel_replacements.load(Ordering::Relaxed)
    }

    /// Record a committed record, returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_discarded(&self) -> u64 {
        self.discarded.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_write(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_channel_replacement(&self) -> u64 {
        self.channel_replacements.fetch_add(1, Ordering::Relaxed)
    }

    /// Fraction of attempted records that were discarded (0.0 - 1.0)
    pub fn discard_rate(&self) -> f64 {
        let discarded = self.discarded_count();
        let total = discarded + self.written_count() + self.failed_write_count();
        if total == 0 {
            0.0
        } else {
            discarded as f64 / total as f64
        }
    }

    pub fn reset(&self) {
        self.written.store(0, Ordering::Relaxed);
        self.discarded.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
        self.channel_replacements.store(0, Ordering::Relaxed);
    }
}
