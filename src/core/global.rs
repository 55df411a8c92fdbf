//! Process-wide logger
//!
//! One [`Logger`] can be installed at startup and reached from anywhere
//! afterwards. If nothing is installed, the first [`logger`] call installs a
//! default one (every module enabled, console output), after which [`init`]
//! fails.
//!
//! ```no_run
//! use rust_module_logger::{global, info, LoggerConfig, Logger, ModuleId};
//!
//! let config = LoggerConfig::from_env().unwrap();
//! global::init(Logger::from_config(&config).unwrap()).unwrap();
//!
//! info!(global::logger(), ModuleId::PMON, "monitor up");
//! ```

use super::config::LoggerConfig;
use super::error::{LoggerError, Result};
use super::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide logger.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Install a logger configured from the `MODLOG_*` environment variables.
pub fn init_from_env() -> Result<()> {
    let config = LoggerConfig::from_env()?;
    init(Logger::from_config(&config)?)
}

pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// The process-wide logger.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Register the syslog identity of the process-wide logger.
pub fn init_log_identity(signature: &str) -> Result<()> {
    logger().init_log_identity(signature)
}
