//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::Result,
    log_entry::{LogEntry, Location},
    metrics::LoggerMetrics,
    module_id::ModuleId,
    os_error::{set_errno, OsError},
    output_mode::OutputMode,
    severity::Severity,
    sink::{Sink, SyslogPriority},
    timestamp::TimestampFormat,
};
use crate::sinks::{self, ConsoleSink, SyslogFacility};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

/// Exit status used by `fatal`; the classic `exit(-1)`.
pub const FATAL_EXIT_CODE: i32 = 255;

/// Logging context: enable bitmap, output mode and the two sinks.
///
/// A call is emitted only when its module shares a bit with the enable bitmap.
/// Filtered calls return before the timestamp is taken or the arguments are
/// formatted.
///
/// Ordinary lines go to exactly one sink: syslog when the syslog bit is set,
/// otherwise the console when the console bit is set. Panic and fatal lines go
/// to both sinks whatever the output mode says, and then end the process.
pub struct Logger {
    enable: AtomicU64,
    output: AtomicU8,
    console: Mutex<Box<dyn Sink>>,
    syslog: Mutex<Box<dyn Sink>>,
    timestamp_format: TimestampFormat,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with every module enabled, console output and the platform
    /// system log.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sinks(
            &LoggerConfig::default(),
            Box::new(ConsoleSink::new()),
            sinks::default_syslog_sink(SyslogFacility::default()),
        )
    }

    /// Logger built from `config`, registering its identity if one is set.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Logger::builder().config(config.clone()).build()
    }

    fn with_sinks(config: &LoggerConfig, console: Box<dyn Sink>, syslog: Box<dyn Sink>) -> Self {
        Self {
            enable: AtomicU64::new(config.enable.bits()),
            output: AtomicU8::new(config.output.bits()),
            console: Mutex::new(console),
            syslog: Mutex::new(syslog),
            timestamp_format: config.timestamp.clone(),
            metrics: LoggerMetrics::new(),
        }
    }

    #[inline]
    pub fn enabled(&self, module: ModuleId) -> bool {
        self.enable.load(Ordering::Relaxed) & module.bits() != 0
    }

    pub fn enable_map(&self) -> ModuleId {
        ModuleId::from_bits(self.enable.load(Ordering::Acquire))
    }

    pub fn set_enable_map(&self, map: ModuleId) {
        self.enable.store(map.bits(), Ordering::Release);
    }

    pub fn enable_modules(&self, modules: ModuleId) {
        self.enable.fetch_or(modules.bits(), Ordering::AcqRel);
    }

    pub fn disable_modules(&self, modules: ModuleId) {
        self.enable.fetch_and(!modules.bits(), Ordering::AcqRel);
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_bits(self.output.load(Ordering::Relaxed))
    }

    pub fn set_output_mode(&self, mode: OutputMode) {
        self.output.store(mode.bits(), Ordering::Release);
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Register the identity syslog prefixes to every entry from this
    /// process. Calling it again replaces the identity.
    pub fn init_log_identity(&self, signature: &str) -> Result<()> {
        self.syslog.lock().set_identity(signature)
    }

    /// Log one call.
    ///
    /// A call whose module is disabled returns without effect, whatever its
    /// severity. An enabled `Panic` or `Fatal` call does not return.
    pub fn log(
        &self,
        module: ModuleId,
        severity: Severity,
        location: Location,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled(module) {
            self.metrics.record_filtered();
            return;
        }

        let priority = match severity {
            Severity::Panic => self.panic_at(module, location, args),
            Severity::Fatal => self.fatal_at(module, location, args),
            other => other.priority(),
        };

        // Captured before the clock is read or arguments are formatted; both
        // can leave errno changed.
        let os_reason = (severity == Severity::SysErr).then(OsError::take_reason);

        let mut entry = LogEntry::new(severity, module, location, args);
        if let Some(reason) = os_reason {
            entry = entry.with_os_reason(reason);
        }
        let line = entry.render(&self.timestamp_format);
        self.metrics.record_emitted();

        let mode = self.output_mode();
        if mode.syslog() {
            self.write_to(&self.syslog, priority, &line);
        } else if mode.console() {
            self.write_to(&self.console, priority, &line);
        }

        if severity == Severity::SysErr {
            // Sink I/O may have set errno again.
            set_errno(0);
        }
    }

    /// Write a panic line to both sinks and abort the process.
    ///
    /// Nothing is written when `module` is disabled, but the process is
    /// aborted regardless: the `-> !` type promises the caller it never
    /// continues. Use [`log`](Self::log) with `Severity::Panic` for a call
    /// that is a no-op on a disabled module.
    pub fn panic_at(&self, module: ModuleId, location: Location, args: fmt::Arguments<'_>) -> ! {
        self.emit_everywhere(module, Severity::Panic, location, args);
        std::process::abort()
    }

    /// Write a fatal line to both sinks and exit with [`FATAL_EXIT_CODE`].
    ///
    /// Nothing is written when `module` is disabled, but the process exits
    /// regardless. [`log`](Self::log) with `Severity::Fatal` filters instead.
    pub fn fatal_at(&self, module: ModuleId, location: Location, args: fmt::Arguments<'_>) -> ! {
        self.emit_everywhere(module, Severity::Fatal, location, args);
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// No effect when `condition` holds. Otherwise logs an error line naming
    /// `condition_text`, writes `message` to both sinks at emergency priority
    /// and aborts.
    pub fn assert_invariant(
        &self,
        module: ModuleId,
        condition: bool,
        condition_text: &str,
        location: Location,
        message: Option<fmt::Arguments<'_>>,
    ) {
        if !condition {
            self.invariant_failed(module, condition_text, location, message);
        }
    }

    #[cold]
    fn invariant_failed(
        &self,
        module: ModuleId,
        condition_text: &str,
        location: Location,
        message: Option<fmt::Arguments<'_>>,
    ) -> ! {
        self.log(
            module,
            Severity::Error,
            location,
            format_args!("Assertion Failure:({}) is false :", condition_text),
        );

        if let Some(args) = message {
            let text = fmt::format(args);
            self.write_to(&self.console, SyslogPriority::Emergency, &text);
            self.write_to(&self.syslog, SyslogPriority::Emergency, &text);
        }

        self.flush_reporting();
        std::process::abort()
    }

    #[cold]
    fn emit_everywhere(
        &self,
        module: ModuleId,
        severity: Severity,
        location: Location,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled(module) {
            self.metrics.record_filtered();
            return;
        }

        let line = LogEntry::new(severity, module, location, args).render(&self.timestamp_format);
        self.metrics.record_emitted();

        self.write_to(&self.console, severity.priority(), &line);
        self.write_to(&self.syslog, severity.priority(), &line);
        self.flush_reporting();
    }

    /// Sink failures are counted and reported on stderr, never returned.
    fn write_to(&self, sink: &Mutex<Box<dyn Sink>>, priority: SyslogPriority, line: &str) {
        let mut sink = sink.lock();
        if let Err(e) = sink.write(priority, line) {
            self.metrics.record_sink_error();
            let _ = writeln!(
                io::stderr(),
                "[LOGGER ERROR] Sink '{}' write failed: {}",
                sink.name(),
                e
            );
        }
    }

    /// Flush both sinks on the way out of the process. Failures are counted
    /// and reported on stderr like write failures.
    fn flush_reporting(&self) {
        for sink in [&self.console, &self.syslog] {
            let mut sink = sink.lock();
            if let Err(e) = sink.flush() {
                self.metrics.record_sink_error();
                let _ = writeln!(
                    io::stderr(),
                    "[LOGGER ERROR] Sink '{}' flush failed: {}",
                    sink.name(),
                    e
                );
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.console.lock().flush()?;
        self.syslog.lock().flush()?;
        Ok(())
    }

    /// Get the logger metrics
    ///
    /// # Example
    ///
    /// ```
    /// use rust_module_logger::{Logger, ModuleId};
    ///
    /// let logger = Logger::builder()
    ///     .enable(ModuleId::MEM_POOL)
    ///     .console_sink(rust_module_logger::sinks::MemorySink::new())
    ///     .build()
    ///     .unwrap();
    ///
    /// logger.info(ModuleId::SOCK_LIB, "dropped");
    /// logger.info(ModuleId::MEM_POOL, "kept");
    ///
    /// assert_eq!(logger.metrics().filtered_count(), 1);
    /// assert_eq!(logger.metrics().emitted_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, module: ModuleId, message: impl fmt::Display) {
        self.log(module, Severity::Info, Location::caller(), format_args!("{}", message));
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, module: ModuleId, message: impl fmt::Display) {
        self.log(module, Severity::Warn, Location::caller(), format_args!("{}", message));
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, module: ModuleId, message: impl fmt::Display) {
        self.log(module, Severity::Error, Location::caller(), format_args!("{}", message));
    }

    /// Error line with the reason of the last failed system call appended.
    #[inline]
    #[track_caller]
    pub fn syserr(&self, module: ModuleId, message: impl fmt::Display) {
        self.log(module, Severity::SysErr, Location::caller(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn fatal(&self, module: ModuleId, message: impl fmt::Display) -> ! {
        self.fatal_at(module, Location::caller(), format_args!("{}", message))
    }

    #[track_caller]
    pub fn panic(&self, module: ModuleId, message: impl fmt::Display) -> ! {
        self.panic_at(module, Location::caller(), format_args!("{}", message))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enable", &self.enable_map())
            .field("output", &self.output_mode())
            .field("timestamp_format", &self.timestamp_format)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_module_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .enable(ModuleId::MEM_POOL | ModuleId::PMON)
///     .output(OutputMode::CONSOLE)
///     .console_sink(MemorySink::new())
///     .build()
///     .unwrap();
///
/// assert!(logger.enabled(ModuleId::PMON));
/// assert!(!logger.enabled(ModuleId::SOCK_LIB));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<Box<dyn Sink>>,
    syslog: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            console: None,
            syslog: None,
        }
    }

    /// Replace every setting with `config`. Sinks already set are kept.
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enable(mut self, modules: ModuleId) -> Self {
        self.config.enable = modules;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, mode: OutputMode) -> Self {
        self.config.output = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.config.identity = Some(identity.into());
        self
    }

    /// Facility of the default syslog sink. Ignored when a custom syslog
    /// sink is supplied.
    #[must_use = "builder methods return a new value"]
    pub fn facility(mut self, facility: SyslogFacility) -> Self {
        self.config.facility = facility;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp = format;
        self
    }

    /// Color console output. Ignored when a custom console sink is supplied.
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.config.colors = colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.console = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn syslog_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.syslog = Some(Box::new(sink));
        self
    }

    /// Build the Logger
    ///
    /// Fails only when the configured identity cannot be registered.
    pub fn build(self) -> Result<Logger> {
        let console = self
            .console
            .unwrap_or_else(|| Box::new(default_console(&self.config)));
        let syslog = self
            .syslog
            .unwrap_or_else(|| sinks::default_syslog_sink(self.config.facility));

        let logger = Logger::with_sinks(&self.config, console, syslog);
        if let Some(ref identity) = self.config.identity {
            logger.init_log_identity(identity)?;
        }
        Ok(logger)
    }
}

#[cfg(feature = "console")]
fn default_console(config: &LoggerConfig) -> ConsoleSink {
    ConsoleSink::new().with_colors(config.colors)
}

#[cfg(not(feature = "console"))]
fn default_console(_config: &LoggerConfig) -> ConsoleSink {
    ConsoleSink::new()
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
