//! Logger configuration
//!
//! Settings can come from code, from `MODLOG_*` environment variables or from
//! a JSON document:
//!
//! ```json
//! { "enable": "mem_pool,sock_lib", "output": "syslog", "identity": "poold" }
//! ```

use super::error::{LoggerError, Result};
use super::module_id::ModuleId;
use super::output_mode::OutputMode;
use super::timestamp::TimestampFormat;
use crate::sinks::SyslogFacility;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub const ENV_ENABLE: &str = "MODLOG_ENABLE";
pub const ENV_OUTPUT: &str = "MODLOG_OUTPUT";
pub const ENV_IDENT: &str = "MODLOG_IDENT";
pub const ENV_FACILITY: &str = "MODLOG_FACILITY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Enable bitmap; a call is emitted when it shares a bit with this.
    pub enable: ModuleId,
    pub output: OutputMode,
    /// Syslog identity. `None` leaves the platform default in place.
    pub identity: Option<String>,
    pub facility: SyslogFacility,
    pub timestamp: TimestampFormat,
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enable: ModuleId::WILDCARD,
            output: OutputMode::CONSOLE,
            identity: None,
            facility: SyslogFacility::Daemon,
            timestamp: TimestampFormat::Classic,
            colors: false,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by any `MODLOG_*` variables that are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_ENABLE) {
            config.enable = parse_setting(ENV_ENABLE, &value)?;
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            config.output = parse_setting(ENV_OUTPUT, &value)?;
        }
        if let Some(value) = lookup(ENV_IDENT) {
            config.identity = Some(value);
        }
        if let Some(value) = lookup(ENV_FACILITY) {
            config.facility = parse_setting(ENV_FACILITY, &value)?;
        }
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn parse_setting<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(|message| LoggerError::config(key, message))
}
