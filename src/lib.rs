//! # Rust Module Logger
//!
//! Leveled logging filtered by a per-module enable bitmap, written to the
//! standard error stream or the system log.
//!
//! ## Features
//!
//! - **Module filtering**: every subsystem owns a bit; disabled calls cost one
//!   atomic load and are never formatted
//! - **Two sinks**: console and syslog, selected by an output mode
//! - **Terminating severities**: `panic` aborts, `fatal` exits, both typed `-> !`
//! - **Invariants**: `invariant!` logs the failed condition and aborts
//!
//! ## Line format
//!
//! ```text
//! \n[war] Oct:19 14:03:07:000412 src/pool.rs:88 pool 3 below low water mark
//! ```
//!
//! ## Example
//!
//! ```
//! use rust_module_logger::prelude::*;
//! use rust_module_logger::{info, warn};
//!
//! let capture = MemorySink::new();
//! let logger = Logger::builder()
//!     .enable(ModuleId::MEM_POOL)
//!     .output(OutputMode::CONSOLE)
//!     .console_sink(capture.clone())
//!     .build()?;
//!
//! warn!(logger, ModuleId::SOCK_LIB, " dropped: module disabled");
//! info!(logger, ModuleId::MEM_POOL, " {} blocks free", 12);
//!
//! assert_eq!(capture.len(), 1);
//! assert!(capture.lines()[0].starts_with("\n[inf] "));
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub use crate::core::global;

pub mod prelude {
    pub use crate::core::{
        Location, LogEntry, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        ModuleId, OutputMode, Result, Severity, Sink, SyslogPriority, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink, SyslogFacility};
    #[cfg(unix)]
    pub use crate::sinks::SyslogSink;
}

pub use crate::core::{
    format_timestamp, format_timestamp_at, Location, LogEntry, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, ModuleId, OsError, OutputMode, Result, Severity, Sink,
    SyslogPriority, TimestampFormat, FATAL_EXIT_CODE,
};
pub use sinks::{ConsoleSink, MemorySink, SyslogFacility};
