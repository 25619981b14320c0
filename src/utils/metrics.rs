//! Observability and Metrics
//!
//! Counters for connector list encoding and decoding, so a peer can see how
//! often its hub lists are rebuilt and how many malformed buffers it rejects.
//!
//! Uses atomic counters for thread-safe metrics collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Metrics collector for codec operations
#[derive(Debug)]
pub struct Metrics {
    /// Total encode calls
    pub encodes_total: AtomicU64,
    /// Encode calls that produced a buffer
    pub encodes_success: AtomicU64,
    /// Encode calls rejected by validation
    pub encodes_failed: AtomicU64,
    /// Total decode calls
    pub decodes_total: AtomicU64,
    /// Decode calls that produced a list
    pub decodes_success: AtomicU64,
    /// Decode calls rejected as malformed
    pub decodes_failed: AtomicU64,
    /// Bytes written by successful encodes
    pub bytes_encoded: AtomicU64,
    /// Bytes consumed by successful decodes
    pub bytes_decoded: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            encodes_total: AtomicU64::new(0),
            encodes_success: AtomicU64::new(0),
            encodes_failed: AtomicU64::new(0),
            decodes_total: AtomicU64::new(0),
            decodes_success: AtomicU64::new(0),
            decodes_failed: AtomicU64::new(0),
            bytes_encoded: AtomicU64::new(0),
            bytes_decoded: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record an encode attempt
    pub fn encode_attempt(&self) {
        self.encodes_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful encode
    pub fn encode_success(&self, byte_count: u64) {
        self.encodes_success.fetch_add(1, Ordering::Relaxed);
        self.bytes_encoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a rejected encode
    pub fn encode_failed(&self) {
        self.encodes_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a decode attempt
    pub fn decode_attempt(&self) {
        self.decodes_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful decode
    pub fn decode_success(&self, byte_count: u64) {
        self.decodes_success.fetch_add(1, Ordering::Relaxed);
        self.bytes_decoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a rejected decode
    pub fn decode_failed(&self) {
        self.decodes_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            encodes_total: self.encodes_total.load(Ordering::Relaxed),
            encodes_success: self.encodes_success.load(Ordering::Relaxed),
            encodes_failed: self.encodes_failed.load(Ordering::Relaxed),
            decodes_total: self.decodes_total.load(Ordering::Relaxed),
            decodes_success: self.decodes_success.load(Ordering::Relaxed),
            decodes_failed: self.decodes_failed.load(Ordering::Relaxed),
            bytes_encoded: self.bytes_encoded.load(Ordering::Relaxed),
            bytes_decoded: self.bytes_decoded.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            encodes_total = snapshot.encodes_total,
            encodes_success = snapshot.encodes_success,
            encodes_failed = snapshot.encodes_failed,
            decodes_total = snapshot.decodes_total,
            decodes_success = snapshot.decodes_success,
            decodes_failed = snapshot.decodes_failed,
            bytes_encoded = snapshot.bytes_encoded,
            bytes_decoded = snapshot.bytes_decoded,
            uptime_seconds = snapshot.uptime_seconds,
            "Connector codec metrics snapshot"
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub encodes_total: u64,
    pub encodes_success: u64,
    pub encodes_failed: u64,
    pub decodes_total: u64,
    pub decodes_success: u64,
    pub decodes_failed: u64,
    pub bytes_encoded: u64,
    pub bytes_decoded: u64,
    pub uptime_seconds: u64,
}

static METRICS: once_cell::sync::Lazy<Metrics> = once_cell::sync::Lazy::new(Metrics::new);

/// Get the global metrics instance
pub fn global_metrics() -> &'static Metrics {
    &METRICS
}

/// Timer for measuring operation duration
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start timing an operation
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        debug!(
            operation = self.operation,
            duration_us = duration.as_micros() as u64,
            "Operation completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = Metrics::new();
        metrics.encode_attempt();
        metrics.encode_success(38);
        metrics.decode_attempt();
        metrics.decode_failed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.encodes_total, 1);
        assert_eq!(snapshot.encodes_success, 1);
        assert_eq!(snapshot.bytes_encoded, 38);
        assert_eq!(snapshot.decodes_total, 1);
        assert_eq!(snapshot.decodes_failed, 1);
        assert_eq!(snapshot.decodes_success, 0);
        metrics.log_metrics();
    }

    #[test]
    fn test_global_metrics_observe_codec() {
        let before = global_metrics().snapshot().decodes_failed;
        let result = crate::core::codec::decode(&[0, 0]);
        assert!(result.is_err());
        // other tests run concurrently, so only a lower bound holds
        assert!(global_metrics().snapshot().decodes_failed > before);
    }
}
