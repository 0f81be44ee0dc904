//! Core logger types and traits

pub mod channel;
pub mod dump;
pub mod error;
pub mod filter;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod stream;
pub mod timestamp;

pub use channel::{Channel, ChannelHandle};
pub use error::{LoggerError, Result};
pub use filter::{EscalatingFilter, Filter, Route, StdFilter};
#[cfg(feature = "console")]
pub use format::ColorFormat;
pub use format::{Format, LevelStyle, StdFormat};
pub use log_level::{LogLevel, DEFAULT_THRESHOLD};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use registry::{Registry, ROOT};
pub use stream::LogStream;
pub use timestamp::TimestampFormat;
