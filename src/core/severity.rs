//! Severity definitions

use super::sink::SyslogPriority;
use std::fmt;
use std::str::FromStr;

/// Severity of a log call.
///
/// Ordered by ascending code: `Panic` is the most severe. `Panic` and `Fatal`
/// terminate the process after the line has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Panic = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    /// Error caused by a failed system call; the OS error reason is appended.
    SysErr = 5,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Panic,
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::SysErr,
    ];

    /// Fixed three character tag written between brackets on every line.
    pub const fn tag(&self) -> &'static str {
        match self {
            Severity::Panic => "pan",
            Severity::Fatal => "fat",
            Severity::Error => "err",
            Severity::Warn => "war",
            Severity::Info => "inf",
            Severity::SysErr => "sys",
        }
    }

    pub const fn to_str(&self) -> &'static str {
        match self {
            Severity::Panic => "PANIC",
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::SysErr => "SYSERR",
        }
    }

    pub const fn code(&self) -> u8 {
        *self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Severity::Panic),
            1 => Some(Severity::Fatal),
            2 => Some(Severity::Error),
            3 => Some(Severity::Warn),
            4 => Some(Severity::Info),
            5 => Some(Severity::SysErr),
            _ => None,
        }
    }

    /// Whether a call at this severity ends the process.
    pub const fn is_terminating(&self) -> bool {
        matches!(self, Severity::Panic | Severity::Fatal)
    }

    /// System log priority used when a line of this severity reaches syslog.
    pub const fn priority(&self) -> SyslogPriority {
        match self {
            Severity::Panic => SyslogPriority::Emergency,
            Severity::Fatal => SyslogPriority::Critical,
            Severity::Error | Severity::SysErr => SyslogPriority::Error,
            Severity::Warn => SyslogPriority::Warning,
            Severity::Info => SyslogPriority::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PANIC" | "PAN" => Ok(Severity::Panic),
            "FATAL" | "FAT" => Ok(Severity::Fatal),
            "ERROR" | "ERR" => Ok(Severity::Error),
            "WARN" | "WARNING" | "WAR" => Ok(Severity::Warn),
            "INFO" | "INF" => Ok(Severity::Info),
            "SYSERR" | "SYSERROR" | "SYS" => Ok(Severity::SysErr),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_ascend() {
        for (idx, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(severity.code() as usize, idx);
            assert_eq!(Severity::from_code(idx as u8), Some(*severity));
        }
        assert_eq!(Severity::from_code(6), None);
        assert!(Severity::Panic < Severity::Info);
    }

    #[test]
    fn test_tags() {
        let tags: Vec<_> = Severity::ALL.iter().map(|s| s.tag()).collect();
        assert_eq!(tags, ["pan", "fat", "err", "war", "inf", "sys"]);
        assert!(tags.iter().all(|t| t.len() == 3));
    }

    #[test]
    fn test_priority_mapping() {
        assert_eq!(Severity::Info.priority(), SyslogPriority::Info);
        assert_eq!(Severity::Warn.priority(), SyslogPriority::Warning);
        assert_eq!(Severity::Error.priority(), SyslogPriority::Error);
        assert_eq!(Severity::SysErr.priority(), SyslogPriority::Error);
        assert_eq!(Severity::Fatal.priority(), SyslogPriority::Critical);
        assert_eq!(Severity::Panic.priority(), SyslogPriority::Emergency);
    }

    #[test]
    fn test_terminating() {
        assert!(Severity::Panic.is_terminating());
        assert!(Severity::Fatal.is_terminating());
        assert!(!Severity::Error.is_terminating());
        assert!(!Severity::SysErr.is_terminating());
    }

    #[test]
    fn test_parse() {
        assert_eq!("war".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("syserr".parse::<Severity>(), Ok(Severity::SysErr));
        assert_eq!(" PANIC ".parse::<Severity>(), Ok(Severity::Panic));
        assert!("debug".parse::<Severity>().is_err());
    }
}
