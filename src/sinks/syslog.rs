//! Syslog sink
//!
//! Routes lines to syslog(3) through `libc`. The identity registered with
//! `openlog` is process wide, so every `SyslogSink` shares one identity slot.

use crate::core::{LoggerError, Result, Sink, SyslogPriority};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(unix)]
use parking_lot::Mutex;
#[cfg(unix)]
use std::ffi::CString;

/// Syslog facilities, named as in `syslog.conf(5)`.
///
/// The enum is portable so configuration can name a facility on any
/// platform; the numeric `LOG_*` value comes from `libc` on unix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SyslogFacility {
    Kern,
    User,
    Mail,
    Daemon,
    Auth,
    Syslog,
    Lpr,
    News,
    Uucp,
    Cron,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
}

impl SyslogFacility {
    const NAMES: [(&'static str, SyslogFacility); 18] = [
        ("kern", SyslogFacility::Kern),
        ("user", SyslogFacility::User),
        ("mail", SyslogFacility::Mail),
        ("daemon", SyslogFacility::Daemon),
        ("auth", SyslogFacility::Auth),
        ("syslog", SyslogFacility::Syslog),
        ("lpr", SyslogFacility::Lpr),
        ("news", SyslogFacility::News),
        ("uucp", SyslogFacility::Uucp),
        ("cron", SyslogFacility::Cron),
        ("local0", SyslogFacility::Local0),
        ("local1", SyslogFacility::Local1),
        ("local2", SyslogFacility::Local2),
        ("local3", SyslogFacility::Local3),
        ("local4", SyslogFacility::Local4),
        ("local5", SyslogFacility::Local5),
        ("local6", SyslogFacility::Local6),
        ("local7", SyslogFacility::Local7),
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::NAMES
            .iter()
            .find(|(candidate, _)| *candidate == lower)
            .map(|(_, facility)| *facility)
    }

    pub fn as_str(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, facility)| *facility == self)
            .map_or("daemon", |(name, _)| *name)
    }

    /// The `LOG_*` facility constant handed to `openlog` and `syslog`.
    #[cfg(unix)]
    pub const fn as_raw(self) -> libc::c_int {
        match self {
            SyslogFacility::Kern => libc::LOG_KERN,
            SyslogFacility::User => libc::LOG_USER,
            SyslogFacility::Mail => libc::LOG_MAIL,
            SyslogFacility::Daemon => libc::LOG_DAEMON,
            SyslogFacility::Auth => libc::LOG_AUTH,
            SyslogFacility::Syslog => libc::LOG_SYSLOG,
            SyslogFacility::Lpr => libc::LOG_LPR,
            SyslogFacility::News => libc::LOG_NEWS,
            SyslogFacility::Uucp => libc::LOG_UUCP,
            SyslogFacility::Cron => libc::LOG_CRON,
            SyslogFacility::Local0 => libc::LOG_LOCAL0,
            SyslogFacility::Local1 => libc::LOG_LOCAL1,
            SyslogFacility::Local2 => libc::LOG_LOCAL2,
            SyslogFacility::Local3 => libc::LOG_LOCAL3,
            SyslogFacility::Local4 => libc::LOG_LOCAL4,
            SyslogFacility::Local5 => libc::LOG_LOCAL5,
            SyslogFacility::Local6 => libc::LOG_LOCAL6,
            SyslogFacility::Local7 => libc::LOG_LOCAL7,
        }
    }
}

impl Default for SyslogFacility {
    fn default() -> Self {
        SyslogFacility::Daemon
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyslogFacility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| format!("Invalid syslog facility: '{}'", s))
    }
}

impl TryFrom<String> for SyslogFacility {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SyslogFacility> for String {
    fn from(facility: SyslogFacility) -> String {
        facility.as_str().to_string()
    }
}

/// Identity handed to `openlog`. syslog(3) keeps the pointer, so the string
/// lives here until a newer identity replaces it. The lock also serializes
/// every `openlog`/`syslog` call.
#[cfg(unix)]
static IDENTITY: Mutex<Option<CString>> = parking_lot::const_mutex(None);

/// Sends lines to the platform system log.
///
/// # Example
///
/// ```no_run
/// use rust_module_logger::sinks::{SyslogFacility, SyslogSink};
/// use rust_module_logger::{Sink, SyslogPriority};
///
/// let mut sink = SyslogSink::new(SyslogFacility::Local3);
/// sink.set_identity("pool-daemon").unwrap();
/// sink.write(SyslogPriority::Info, "\n[inf] started").unwrap();
/// ```
#[cfg(unix)]
#[derive(Debug, Default)]
pub struct SyslogSink {
    facility: SyslogFacility,
}

#[cfg(unix)]
impl SyslogSink {
    pub fn new(facility: SyslogFacility) -> Self {
        Self { facility }
    }

    pub fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Identity most recently registered by any sink in this process.
    pub fn current_identity() -> Option<String> {
        IDENTITY
            .lock()
            .as_ref()
            .map(|ident| ident.to_string_lossy().into_owned())
    }

    /// Syslog records are already line delimited: the leading newline is
    /// dropped and interior NUL bytes are escaped so nothing is lost.
    fn prepare(line: &str) -> CString {
        let body = line.trim_start_matches('\n').replace('\0', "\\0");
        // Interior NULs were replaced above.
        CString::new(body).unwrap_or_default()
    }
}

#[cfg(unix)]
impl Sink for SyslogSink {
    fn write(&mut self, priority: SyslogPriority, line: &str) -> Result<()> {
        let message = Self::prepare(line);
        let _guard = IDENTITY.lock();

        // SAFETY: "%s" and message are valid NUL-terminated strings; using a
        // fixed format keeps '%' in the message from being interpreted.
        unsafe {
            libc::syslog(
                priority.as_raw() | self.facility.as_raw(),
                c"%s".as_ptr(),
                message.as_ptr(),
            );
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "syslog"
    }

    fn set_identity(&mut self, identity: &str) -> Result<()> {
        let ident = CString::new(identity)
            .map_err(|_| LoggerError::identity(identity, "contains NUL byte"))?;

        let mut slot = IDENTITY.lock();
        // SAFETY: ident's heap buffer does not move when the CString is moved
        // into the slot below, and it stays there until a later openlog call
        // has replaced it.
        unsafe {
            libc::openlog(
                ident.as_ptr(),
                libc::LOG_CONS | libc::LOG_NDELAY,
                self.facility.as_raw(),
            );
        }
        *slot = Some(ident);
        Ok(())
    }
}
