//! Logger metrics for observability
//!
//! Counters for filtered calls, emitted lines and sink failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_module_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_filtered();
/// metrics.record_emitted();
///
/// assert_eq!(metrics.filtered_count(), 1);
/// assert_eq!(metrics.emitted_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Calls dropped because their module bit was not enabled
    filtered: AtomicU64,

    /// Lines that passed the filter (including lines with no sink selected)
    emitted: AtomicU64,

    /// Sink writes that returned an error
    sink_errors: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            filtered: AtomicU64::new(0),
            emitted: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_error_count(&self) -> u64 {
        self.sink_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_error(&self) -> u64 {
        self.sink_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of calls dropped by the module filter, as a percentage.
    ///
    /// Returns 0.0 if nothing has been logged.
    pub fn filter_rate(&self) -> f64 {
        let filtered = self.filtered_count();
        let total = filtered + self.emitted_count();
        if total == 0 {
            0.0
        } else {
            (filtered as f64 / total as f64) * 100.0
        }
    }

    pub fn reset(&self) {
        self.filtered.store(0, Ordering::Relaxed);
        self.emitted.store(0, Ordering::Relaxed);
        self.sink_errors.store(0, Ordering::Relaxed);
    }
}
