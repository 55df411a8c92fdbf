//! Log entry structure and line rendering

use super::module_id::ModuleId;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};
use std::fmt::{self, Write};

/// Source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller of a `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One log call that passed the module filter.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: Severity,
    pub module: ModuleId,
    pub location: Location,
    pub timestamp: DateTime<Local>,
    pub message: String,
    /// OS error reason appended to `SysErr` lines.
    pub os_reason: Option<String>,
}

impl LogEntry {
    pub fn new(
        severity: Severity,
        module: ModuleId,
        location: Location,
        args: fmt::Arguments<'_>,
    ) -> Self {
        Self {
            severity,
            module,
            location,
            timestamp: Local::now(),
            message: fmt::format(args),
            os_reason: None,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_os_reason(mut self, reason: impl Into<String>) -> Self {
        self.os_reason = Some(reason.into());
        self
    }

    /// Renders `"\n[<tag>] <timestamp> <file>:<line><message><os reason>"`.
    ///
    /// The buffer grows as needed; the message is never truncated.
    pub fn render(&self, timestamp_format: &TimestampFormat) -> String {
        let reason_len = self.os_reason.as_ref().map_or(0, String::len);
        let mut line =
            String::with_capacity(48 + self.location.file.len() + self.message.len() + reason_len);

        // Writing to a String cannot fail.
        let _ = write!(
            line,
            "\n[{:>3}] {} {}",
            self.severity.tag(),
            timestamp_format.format(&self.timestamp),
            self.location
        );
        line.push_str(&self.message);
        if let Some(ref reason) = self.os_reason {
            line.push_str(reason);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_entry(severity: Severity) -> LogEntry {
        LogEntry::new(
            severity,
            ModuleId::MEM_POOL,
            Location::new("pool.rs", 42),
            format_args!(" pool {} exhausted", 7),
        )
        .with_timestamp(Local.with_ymd_and_hms(2024, 10, 19, 14, 3, 7).unwrap())
    }

    #[test]
    fn test_render_layout() {
        let line = fixed_entry(Severity::Warn).render(&TimestampFormat::Classic);
        assert_eq!(line, "\n[war] Oct:19 14:03:07:000000 pool.rs:42 pool 7 exhausted");
    }

    #[test]
    fn test_render_appends_os_reason() {
        let line = fixed_entry(Severity::SysErr)
            .with_os_reason("No such file or directory")
            .render(&TimestampFormat::Classic);
        assert!(line.starts_with("\n[sys] "));
        assert!(line.ends_with(" pool 7 exhaustedNo such file or directory"));
    }

    #[test]
    fn test_render_long_message_is_not_truncated() {
        let long = "x".repeat(4096);
        let entry = LogEntry::new(
            Severity::Info,
            ModuleId::PMON,
            Location::new("a.rs", 1),
            format_args!("{}", long),
        );
        let line = entry.render(&TimestampFormat::Classic);
        assert!(line.ends_with(&long));
    }

    #[test]
    fn test_caller_location() {
        let here = Location::caller();
        assert!(here.file.ends_with("log_entry.rs"));
        assert!(here.line > 0);
    }
}
