//! Envelope formatting policies
//!
//! A format policy renders the metadata prefix (the envelope) of a record.
//! The caller's payload is appended right after it by the write handle.

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use std::fmt::Write;

/// Renders the envelope for a record about to be written.
pub trait Format: Send + Sync {
    /// Append the envelope for a `level` record of logger `logger` to `out`.
    fn format(&self, level: LogLevel, logger: &str, out: &mut String);

    fn envelope(&self, level: LogLevel, logger: &str) -> String {
        let mut out = String::with_capacity(48);
        self.format(level, logger, &mut out);
        out
    }
}

/// How the severity token between the angle brackets is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelStyle {
    /// Numeric value, `<1>` for `error`.
    #[default]
    Numeric,
    /// Lowercase name, `<error>`.
    Name,
}

/// Default envelope: `<UTC timestamp> [<pid>] <<severity>>: `.
///
/// # Examples
///
/// ```
/// use logxx::core::{Format, LogLevel, StdFormat, TimestampFormat};
///
/// let format = StdFormat::new().with_timestamp_format(TimestampFormat::Unix);
/// let envelope = format.envelope(LogLevel::Error, "net");
/// assert!(envelope.ends_with("] <1>: "));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StdFormat {
    timestamp_format: TimestampFormat,
    level_style: LevelStyle,
}

impl StdFormat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_level_names(mut self) -> Self {
        self.level_style = LevelStyle::Name;
        self
    }

    pub fn level_style(&self) -> LevelStyle {
        self.level_style
    }
}

impl Format for StdFormat {
    fn format(&self, level: LogLevel, _logger: &str, out: &mut String) {
        let _ = write!(
            out,
            "{} [{}] ",
            self.timestamp_format.now(),
            std::process::id()
        );
        let _ = match self.level_style {
            LevelStyle::Numeric => write!(out, "<{}>: ", level.as_u8()),
            LevelStyle::Name => write!(out, "<{}>: ", level),
        };
    }
}

/// Envelope with the severity name colored for terminals.
#[cfg(feature = "console")]
#[derive(Debug, Clone, Default)]
pub struct ColorFormat {
    timestamp_format: TimestampFormat,
}

#[cfg(feature = "console")]
impl ColorFormat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

#[cfg(feature = "console")]
impl Format for ColorFormat {
    fn format(&self, level: LogLevel, _logger: &str, out: &mut String) {
        use colored::Colorize;

        let _ = write!(
            out,
            "{} [{}] <{}>: ",
            self.timestamp_format.now(),
            std::process::id(),
            level.to_str().color(level.color_code())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split `"<ts> [<pid>] <<sev>>: "` into its three fields.
    fn fields(envelope: &str) -> (&str, &str, &str) {
        let open = envelope.find(" [").expect("pid bracket");
        let close = envelope.find("] <").expect("severity bracket");
        let sev_end = envelope.rfind(">: ").expect("severity terminator");
        (
            &envelope[..open],
            &envelope[open + 2..close],
            &envelope[close + 3..sev_end],
        )
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = StdFormat::new().envelope(LogLevel::Warning, "net");
        let (timestamp, pid, severity) = fields(&envelope);

        assert_eq!(timestamp.len(), "2025-Jan-08 10:30:45".len());
        assert_eq!(pid, std::process::id().to_string());
        assert_eq!(severity, "2");
        assert!(envelope.ends_with(">: "));
    }

    #[test]
    fn test_level_names() {
        let format = StdFormat::new()
            .with_timestamp_format(TimestampFormat::Unix)
            .with_level_names();
        let envelope = format.envelope(LogLevel::Trace, "");
        let (timestamp, _, severity) = fields(&envelope);

        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(severity, "trace");
        assert_eq!(format.level_style(), LevelStyle::Name);
    }

    #[test]
    fn test_format_appends() {
        let mut out = String::from(">>");
        StdFormat::new().format(LogLevel::Info, "db", &mut out);
        assert!(out.starts_with(">>"));
        assert!(out.ends_with("<3>: "));
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_color_format_contains_name() {
        colored::control::set_override(false);
        let envelope = ColorFormat::new().envelope(LogLevel::Error, "net");
        assert!(envelope.ends_with("<error>: "));
    }
}
