//! Core logger types and traits

pub mod config;
pub mod error;
pub mod global;
pub mod log_entry;
pub mod logger;
pub mod metrics;
pub mod module_id;
pub mod os_error;
pub mod output_mode;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_entry::{LogEntry, Location};
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use module_id::ModuleId;
pub use os_error::OsError;
pub use output_mode::OutputMode;
pub use severity::Severity;
pub use sink::{Sink, SyslogPriority};
pub use timestamp::{format_timestamp, format_timestamp_at, TimestampFormat};
