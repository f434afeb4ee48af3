//! Messenger metrics
//!
//! Counters for how many messages were dispatched, discarded by a
//! preprocessor, or stopped by a failing handler.

use std::sync::atomic::{AtomicU64, Ordering};

/// Dispatch counters for a messenger
///
/// # Example
///
/// ```
/// use status_messenger::MessengerMetrics;
///
/// let metrics = MessengerMetrics::new();
///
/// metrics.record_logged();
/// metrics.record_discarded();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.discarded_count(), 1);
/// ```
#[derive(Debug)]
pub struct MessengerMetrics {
    /// Messages that went through every handler without error
    total_logged: AtomicU64,

    /// Messages dropped by a preprocessor
    discarded_count: AtomicU64,

    /// Log calls aborted by a failing message handler
    handler_failures: AtomicU64,
}

impl MessengerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            discarded_count: AtomicU64::new(0),
            handler_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn discarded_count(&self) -> u64 {
        self.discarded_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handler_failures(&self) -> u64 {
        self.handler_failures.load(Ordering::Relaxed)
    }

    /// Record a fully dispatched message, returns the previous count
    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_discarded(&self) -> u64 {
        self.discarded_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_handler_failure(&self) -> u64 {
        self.handler_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.discarded_count.store(0, Ordering::Relaxed);
        self.handler_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for MessengerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MessengerMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            total_logged: AtomicU64::new(self.total_logged()),
            discarded_count: AtomicU64::new(self.discarded_count()),
            handler_failures: AtomicU64::new(self.handler_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = MessengerMetrics::new();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.discarded_count(), 0);
        assert_eq!(metrics.handler_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = MessengerMetrics::new();
        assert_eq!(metrics.record_handler_failure(), 0);
        assert_eq!(metrics.record_handler_failure(), 1);
        assert_eq!(metrics.handler_failures(), 2);
    }

    #[test]
    fn test_snapshot_and_reset() {
        let metrics = MessengerMetrics::new();
        metrics.record_logged();
        metrics.record_logged();
        metrics.record_discarded();

        let snapshot = metrics.clone();
        metrics.reset();

        assert_eq!(snapshot.total_logged(), 2);
        assert_eq!(snapshot.discarded_count(), 1);
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.discarded_count(), 0);
    }
}
