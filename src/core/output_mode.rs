//! Output mode flags
//!
//! Selects which sink receives ordinary (non-terminating) lines. Processes
//! running as daemons are expected to clear the console bit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OutputMode(u8);

impl OutputMode {
    pub const NONE: OutputMode = OutputMode(0);
    pub const CONSOLE: OutputMode = OutputMode(1 << 1);
    pub const SYSLOG: OutputMode = OutputMode(1 << 2);
    pub const BOTH: OutputMode = OutputMode(Self::CONSOLE.0 | Self::SYSLOG.0);

    const MASK: u8 = Self::BOTH.0;

    /// Unknown bits are discarded.
    pub const fn from_bits(bits: u8) -> OutputMode {
        OutputMode(bits & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn console(self) -> bool {
        self.0 & Self::CONSOLE.0 != 0
    }

    pub const fn syslog(self) -> bool {
        self.0 & Self::SYSLOG.0 != 0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::CONSOLE
    }
}

impl BitOr for OutputMode {
    type Output = OutputMode;

    fn bitor(self, rhs: OutputMode) -> OutputMode {
        OutputMode(self.0 | rhs.0)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (self.console(), self.syslog()) {
            (true, true) => "console|syslog",
            (true, false) => "console",
            (false, true) => "syslog",
            (false, false) => "none",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mode = OutputMode::NONE;
        for token in s.split([',', '|', '+']).map(str::trim) {
            mode = mode
                | match token.to_ascii_lowercase().as_str() {
                    "console" | "stderr" => OutputMode::CONSOLE,
                    "syslog" => OutputMode::SYSLOG,
                    "both" => OutputMode::BOTH,
                    "none" => OutputMode::NONE,
                    _ => return Err(format!("Invalid output mode: '{}'", s)),
                };
        }
        Ok(mode)
    }
}

impl TryFrom<String> for OutputMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutputMode> for String {
    fn from(mode: OutputMode) -> String {
        mode.to_string()
    }
}
