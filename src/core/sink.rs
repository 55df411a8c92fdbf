//! Sink trait for log output destinations

use super::error::Result;

/// System log priority of a written line.
///
/// Values follow the POSIX `LOG_*` severity constants so they can be handed to
/// `syslog(3)` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum SyslogPriority {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl SyslogPriority {
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SyslogPriority::Emergency => "emerg",
            SyslogPriority::Alert => "alert",
            SyslogPriority::Critical => "crit",
            SyslogPriority::Error => "err",
            SyslogPriority::Warning => "warning",
            SyslogPriority::Notice => "notice",
            SyslogPriority::Info => "info",
            SyslogPriority::Debug => "debug",
        }
    }
}

/// An output destination for rendered log lines.
///
/// The logger owns two sinks, one for the console and one for the system log,
/// and decides which of them receives each line.
pub trait Sink: Send {
    /// Write one fully rendered line.
    fn write(&mut self, priority: SyslogPriority, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str;

    /// Register the identity prefixed to every entry. Sinks without an
    /// identity concept ignore it.
    fn set_identity(&mut self, _identity: &str) -> Result<()> {
        Ok(())
    }
}
