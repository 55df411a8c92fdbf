//! Console sink implementation

use crate::core::{LoggerError, Result, Sink, SyslogPriority};
use std::io::{self, Write};

/// Writes lines to the standard error stream.
///
/// Lines are written verbatim: each one starts with a newline and carries no
/// trailing newline, so consecutive lines stack up the way the classic format
/// expects.
pub struct ConsoleSink {
    target: Option<Box<dyn Write + Send>>,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            target: None,
            use_colors: false,
        }
    }

    /// Colors the whole line by priority. Off by default so the output stays
    /// machine parseable.
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Write to `writer` instead of stderr.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_module_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::new().with_writer(std::io::sink());
    /// ```
    #[must_use]
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.target = Some(Box::new(writer));
        self
    }

    #[cfg_attr(not(feature = "console"), allow(unused_variables))]
    fn decorate(&self, priority: SyslogPriority, line: &str) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            use colored::{Color, Colorize};

            let color = match priority {
                SyslogPriority::Emergency | SyslogPriority::Alert | SyslogPriority::Critical => {
                    Color::BrightRed
                }
                SyslogPriority::Error => Color::Red,
                SyslogPriority::Warning => Color::Yellow,
                SyslogPriority::Notice | SyslogPriority::Info => Color::Green,
                SyslogPriority::Debug => Color::BrightBlack,
            };
            let body = line.trim_start_matches('\n');
            let lead = &line[..line.len() - body.len()];
            return format!("{}{}", lead, body.color(color));
        }

        line.to_string()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, priority: SyslogPriority, line: &str) -> Result<()> {
        let output = self.decorate(priority, line);
        let written = match self.target {
            Some(ref mut writer) => writer.write_all(output.as_bytes()),
            None => io::stderr().lock().write_all(output.as_bytes()),
        };
        written.map_err(|e| LoggerError::sink(self.name(), e.to_string()))
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            Some(ref mut writer) => writer.flush()?,
            None => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_lines_verbatim() {
        let buf = SharedBuf::default();
        let mut sink = ConsoleSink::new().with_writer(buf.clone());

        sink.write(SyslogPriority::Warning, "\n[war] a").unwrap();
        sink.write(SyslogPriority::Info, "\n[inf] b").unwrap();
        sink.flush().unwrap();

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(out, "\n[war] a\n[inf] b");
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colors_keep_leading_newline() {
        colored::control::set_override(true);
        let buf = SharedBuf::default();
        let mut sink = ConsoleSink::new().with_colors(true).with_writer(buf.clone());

        sink.write(SyslogPriority::Error, "\n[err] boom").unwrap();

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(out.starts_with("\n\u{1b}["));
        assert!(out.contains("[err] boom"));
    }

    #[test]
    fn test_name() {
        assert_eq!(ConsoleSink::new().name(), "console");
    }
}
