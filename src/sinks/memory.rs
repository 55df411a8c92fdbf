//! In-memory sink
//!
//! Captures lines instead of writing them anywhere. Clones share the same
//! buffer, so a test can hand one clone to a logger and inspect the other.

use crate::core::{Result, Sink, SyslogPriority};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Captured {
    records: Vec<(SyslogPriority, String)>,
    identity: Option<String>,
    flushes: usize,
}

/// # Example
///
/// ```
/// use rust_module_logger::sinks::MemorySink;
/// use rust_module_logger::{Sink, SyslogPriority};
///
/// let capture = MemorySink::new();
/// let mut sink = capture.clone();
/// sink.write(SyslogPriority::Info, "\n[inf] hello").unwrap();
///
/// assert_eq!(capture.lines(), vec!["\n[inf] hello".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct MemorySink {
    name: &'static str,
    captured: Arc<Mutex<Captured>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            captured: Arc::new(Mutex::new(Captured::default())),
        }
    }

    pub fn records(&self) -> Vec<(SyslogPriority, String)> {
        self.captured.lock().records.clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.captured
            .lock()
            .records
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.captured.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last identity registered through [`Sink::set_identity`].
    pub fn identity(&self) -> Option<String> {
        self.captured.lock().identity.clone()
    }

    pub fn flush_count(&self) -> usize {
        self.captured.lock().flushes
    }

    pub fn clear(&self) {
        self.captured.lock().records.clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, priority: SyslogPriority, line: &str) -> Result<()> {
        self.captured.lock().records.push((priority, line.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.captured.lock().flushes += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }

    fn set_identity(&mut self, identity: &str) -> Result<()> {
        self.captured.lock().identity = Some(identity.to_string());
        Ok(())
    }
}
