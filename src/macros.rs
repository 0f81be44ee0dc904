//! Logging macros with guard-before-evaluate semantics.
//!
//! Every macro checks the logger's threshold first and only then formats
//! the payload, so arguments with side effects are not evaluated for
//! filtered records. The logger expression may be a `Logger`, a reference
//! to one, or the `Arc<Logger>` returned by `Registry::get`; it is evaluated
//! exactly once.
//!
//! # Examples
//!
//! ```
//! use logxx::channels::MemoryChannel;
//! use logxx::prelude::*;
//! use logxx::{debug, info};
//!
//! let memory = MemoryChannel::new();
//! let registry = Registry::with_threshold(LogLevel::Info).with_root_channel(memory.clone());
//!
//! let port = 8080;
//! info!(registry.get("http"), "listening on port {}", port);
//!
//! let mut evaluated = false;
//! debug!(registry.get("http"), "{}", { evaluated = true; "expensive" });
//! assert!(!evaluated);
//! ```

/// Write a record at `level` to `logger` if the level is enabled.
///
/// # Examples
///
/// ```
/// # use logxx::prelude::*;
/// # let logger = Logger::builder().channel(NullChannel).build();
/// use logxx::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let __logger = &$logger;
        let __level: $crate::LogLevel = $level;
        if __logger.admit(__level) {
            let mut __stream = __logger.write(__level);
            let _ = ::std::fmt::Write::write_fmt(&mut __stream, format_args!($($arg)+));
        }
    }};
}

/// Like [`log!`], but only when `condition` holds. The condition is checked
/// before the threshold.
///
/// # Examples
///
/// ```
/// # use logxx::prelude::*;
/// # let logger = Logger::builder().channel(NullChannel).build();
/// use logxx::log_if;
/// let retries = 3;
/// log_if!(retries > 2, logger, LogLevel::Warning, "retried {} times", retries);
/// ```
#[macro_export]
macro_rules! log_if {
    ($cond:expr, $logger:expr, $level:expr, $($arg:tt)+) => {
        if $cond {
            $crate::log!($logger, $level, $($arg)+)
        }
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logxx::prelude::*;
/// # let logger = Logger::builder().channel(NullChannel).build();
/// use logxx::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Does not abort the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Hex dump a byte slice at debug level.
///
/// # Examples
///
/// ```
/// # use logxx::prelude::*;
/// # let logger = Logger::builder().channel(NullChannel).build();
/// use logxx::dump;
/// let packet = [0x45u8, 0x00, 0x00, 0x54];
/// dump!(logger, &packet);
/// ```
#[macro_export]
macro_rules! dump {
    ($logger:expr, $bytes:expr) => {{
        let __logger = &$logger;
        if __logger.admit($crate::LogLevel::Debug) {
            __logger.dump($bytes);
        }
    }};
}
