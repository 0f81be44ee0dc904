//! # logxx
//!
//! A lightweight, embeddable logging facility built from named loggers and
//! three interchangeable policies.
//!
//! ## Features
//!
//! - **Policy composition**: format, filter and default channel are type
//!   parameters of [`Logger`], so custom policies cost no dynamic dispatch
//! - **Named loggers**: a [`Registry`] hands out one shared logger per name;
//!   new loggers copy the root logger's channel and threshold
//! - **Cheap filtering**: a filtered record costs a severity comparison and
//!   writes nothing; the macros skip building the payload entirely
//! - **Thread safe**: records are committed to a channel one whole line at a
//!   time, and channels can be swapped while other threads are logging
//!
//! ## Example
//!
//! ```
//! use logxx::channels::MemoryChannel;
//! use logxx::prelude::*;
//! use logxx::{error, trace};
//!
//! let memory = MemoryChannel::new();
//! let registry = Registry::with_threshold(LogLevel::Warning).with_root_channel(memory.clone());
//!
//! let net = registry.get("net");
//! error!(net, "connection to {} lost", "db-1");
//! trace!(net, "never formatted");
//!
//! assert_eq!(memory.write_count(), 1);
//! assert!(memory.contents().ends_with("connection to db-1 lost\n"));
//! ```

pub mod channels;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::channels::{ConsoleChannel, NullChannel};
    #[cfg(feature = "file")]
    pub use crate::channels::{FileChannel, RotatingFileChannel};
    pub use crate::core::{
        Channel, ChannelHandle, EscalatingFilter, Filter, Format, LogLevel, LogStream, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, Registry, Result, Route, StdFilter, StdFormat,
        TimestampFormat, DEFAULT_THRESHOLD,
    };
}

pub use channels::{ConsoleChannel, MemoryChannel, NullChannel};
#[cfg(feature = "file")]
pub use channels::{FileChannel, RotatingFileChannel};
pub use core::{
    Channel, ChannelHandle, EscalatingFilter, Filter, Format, LevelStyle, LogLevel, LogStream,
    Logger, LoggerBuilder, LoggerError, LoggerMetrics, Registry, Result, Route, StdFilter,
    StdFormat, TimestampFormat, DEFAULT_THRESHOLD, ROOT,
};
#[cfg(feature = "console")]
pub use core::ColorFormat;
