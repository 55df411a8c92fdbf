//! Logging macros with call-site capture.
//!
//! Each macro takes the logger, the module the call belongs to, and
//! `format!`-style arguments. `file!()` and `line!()` of the call site end up
//! in the line. Arguments are passed as `format_args!`, so nothing is
//! formatted when the module is disabled.
//!
//! # Examples
//!
//! ```
//! use rust_module_logger::prelude::*;
//! use rust_module_logger::{error, info};
//!
//! const POOL_ID: ModuleId = ModuleId::MEM_POOL;
//!
//! let logger = Logger::builder()
//!     .console_sink(MemorySink::new())
//!     .build()
//!     .unwrap();
//!
//! info!(logger, POOL_ID, " pool created with {} blocks", 64);
//! error!(logger, POOL_ID, " block {} freed twice", 17);
//! ```

/// Log a message at an explicit severity.
///
/// `Severity::Panic` and `Severity::Fatal` end the process when the module
/// is enabled and do nothing otherwise; use [`abort!`] and [`fatal!`] when the
/// caller should see the `!` type.
///
/// # Examples
///
/// ```
/// # use rust_module_logger::prelude::*;
/// # let logger = Logger::builder().console_sink(MemorySink::new()).build().unwrap();
/// use rust_module_logger::log;
/// log!(logger, ModuleId::PMON, Severity::Warn, " restart {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $module:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log(
            $module,
            $severity,
            $crate::Location::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!($logger, $module, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!($logger, $module, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!($logger, $module, $crate::Severity::Error, $($arg)+)
    };
}

/// Log an error caused by a failed system call.
///
/// The reason text of the calling thread's last OS error is appended after
/// the message, and the OS error is reset to zero.
///
/// ```
/// # use rust_module_logger::prelude::*;
/// # let logger = Logger::builder().console_sink(MemorySink::new()).build().unwrap();
/// use rust_module_logger::syserr;
/// if std::fs::File::open("/nonexistent/pool.cfg").is_err() {
///     syserr!(logger, ModuleId::MEM_POOL, " cannot read pool.cfg: ");
/// }
/// ```
#[macro_export]
macro_rules! syserr {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!($logger, $module, $crate::Severity::SysErr, $($arg)+)
    };
}

/// Log at fatal severity to both sinks and exit the process.
///
/// ```no_run
/// # use rust_module_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_module_logger::fatal;
/// let config: Option<&str> = None;
/// let path = match config {
///     Some(path) => path,
///     None => fatal!(logger, ModuleId::PMON, " no configuration given"),
/// };
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $logger.fatal_at(
            $module,
            $crate::Location::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
}

/// Log at panic severity to both sinks and abort the process.
#[macro_export]
macro_rules! abort {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $logger.panic_at(
            $module,
            $crate::Location::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
}

/// Abort with a diagnostic when a condition does not hold.
///
/// A failed condition logs `Assertion Failure:(<condition>) is false :` at
/// error severity, writes the optional message to both sinks at emergency
/// priority, and aborts.
///
/// ```
/// # use rust_module_logger::prelude::*;
/// # let logger = Logger::builder().console_sink(MemorySink::new()).build().unwrap();
/// use rust_module_logger::invariant;
/// let free = 3;
/// invariant!(logger, ModuleId::MEM_POOL, free <= 64);
/// invariant!(logger, ModuleId::MEM_POOL, free > 0, "pool {} empty", 1);
/// ```
#[macro_export]
macro_rules! invariant {
    ($logger:expr, $module:expr, $cond:expr $(,)?) => {
        $logger.assert_invariant(
            $module,
            $cond,
            stringify!($cond),
            $crate::Location::new(file!(), line!()),
            None,
        )
    };
    ($logger:expr, $module:expr, $cond:expr, $($arg:tt)+) => {
        $logger.assert_invariant(
            $module,
            $cond,
            stringify!($cond),
            $crate::Location::new(file!(), line!()),
            Some(format_args!($($arg)+)),
        )
    };
}
