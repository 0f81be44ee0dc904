//! Severity filtering policies

use super::channel::ChannelHandle;
use super::log_level::LogLevel;

/// Where a record goes once the filter has looked at it.
#[derive(Debug, Clone)]
pub enum Route {
    /// Write to the logger's own channel.
    Channel,
    /// Write to a different channel instead.
    Redirect(ChannelHandle),
    /// Drop the record without touching any channel.
    Discard,
}

impl Route {
    pub fn is_discard(&self) -> bool {
        matches!(self, Route::Discard)
    }
}

/// Decides whether, and where, a record is written.
///
/// Implementations must be cheap: `route` runs on every write, including
/// the ones that end up discarded.
pub trait Filter: Send + Sync {
    fn route(&self, level: LogLevel, threshold: LogLevel, logger: &str) -> Route;

    /// Whether a record would be written anywhere at all.
    fn permits(&self, level: LogLevel, threshold: LogLevel, logger: &str) -> bool {
        !self.route(level, threshold, logger).is_discard()
    }
}

/// Visible when `level <= threshold`, discarded otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilter;

impl Filter for StdFilter {
    #[inline]
    fn route(&self, level: LogLevel, threshold: LogLevel, _logger: &str) -> Route {
        if level.is_visible_at(threshold) {
            Route::Channel
        } else {
            Route::Discard
        }
    }

    #[inline]
    fn permits(&self, level: LogLevel, threshold: LogLevel, _logger: &str) -> bool {
        level.is_visible_at(threshold)
    }
}

/// Sends visible records at or above an urgency to a separate channel.
///
/// # Examples
///
/// ```
/// use logxx::channels::MemoryChannel;
/// use logxx::core::{ChannelHandle, EscalatingFilter, Filter, LogLevel, Route};
///
/// let alerts = MemoryChannel::new();
/// let filter = EscalatingFilter::new(LogLevel::Error, ChannelHandle::new(alerts));
///
/// assert!(matches!(filter.route(LogLevel::Fatal, LogLevel::Info, ""), Route::Redirect(_)));
/// assert!(matches!(filter.route(LogLevel::Info, LogLevel::Info, ""), Route::Channel));
/// assert!(matches!(filter.route(LogLevel::Debug, LogLevel::Info, ""), Route::Discard));
/// ```
#[derive(Debug, Clone)]
pub struct EscalatingFilter {
    escalate_at: LogLevel,
    target: ChannelHandle,
}

impl EscalatingFilter {
    pub fn new(escalate_at: LogLevel, target: ChannelHandle) -> Self {
        Self {
            escalate_at,
            target,
        }
    }

    pub fn target(&self) -> &ChannelHandle {
        &self.target
    }
}

impl Filter for EscalatingFilter {
    fn route(&self, level: LogLevel, threshold: LogLevel, _logger: &str) -> Route {
        if !level.is_visible_at(threshold) {
            Route::Discard
        } else if level <= self.escalate_at {
            Route::Redirect(self.target.clone())
        } else {
            Route::Channel
        }
    }

    fn permits(&self, level: LogLevel, threshold: LogLevel, _logger: &str) -> bool {
        level.is_visible_at(threshold)
    }
}
