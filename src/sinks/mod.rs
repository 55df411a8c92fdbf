//! Sink implementations

pub mod console;
pub mod memory;
pub mod syslog;

pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use syslog::SyslogFacility;
#[cfg(unix)]
pub use syslog::SyslogSink;

pub use crate::core::Sink;

/// System log sink used when none is configured.
#[cfg(unix)]
pub(crate) fn default_syslog_sink(facility: SyslogFacility) -> Box<dyn Sink> {
    Box::new(SyslogSink::new(facility))
}

/// No system log on this platform; lines routed there are captured in memory.
#[cfg(not(unix))]
pub(crate) fn default_syslog_sink(_facility: SyslogFacility) -> Box<dyn Sink> {
    Box::new(MemorySink::named("syslog"))
}
