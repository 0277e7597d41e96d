//! Metrics hooks for calculator operations
//!
//! Provides instrumentation points for counting evaluations, zero-divisor
//! substitutions and rejected calls.
//!
//! ## Usage
//!
//! ```
//! use calc_arithmetic::{ArithmeticApi, CalculatorService, Metrics};
//! use std::sync::Arc;
//!
//! let metrics = Arc::new(Metrics::new());
//! let calculator = CalculatorService::with_metrics(Default::default(), metrics.clone()).unwrap();
//!
//! calculator.divide(7.0, 0.0).unwrap();
//! assert_eq!(metrics.snapshot().zero_divisor_hits, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::Operation;

/// Metrics collector for calculator operations
///
/// Thread-safe counters for monitoring usage.
#[derive(Default)]
pub struct Metrics {
    /// Completed evaluations, indexed by operation
    evaluations: [AtomicU64; 4],
    /// Divisions answered with the sentinel
    pub zero_divisor_hits: AtomicU64,
    /// Calls that returned an error
    pub rejected: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed evaluation
    pub fn record_operation(&self, operation: Operation) {
        self.evaluations[operation.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// Record a sentinel substitution
    pub fn record_zero_divisor(&self) {
        self.zero_divisor_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected call
    pub fn record_rejection(&self, _operation: Operation) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Completed evaluations of one operation
    pub fn evaluations(&self, operation: Operation) -> u64 {
        self.evaluations[operation.index()].load(Ordering::Relaxed)
    }

    /// Completed evaluations across all operations
    pub fn total_operations(&self) -> u64 {
        Operation::ALL.iter().map(|op| self.evaluations(*op)).sum()
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            additions: self.evaluations(Operation::Add),
            subtractions: self.evaluations(Operation::Subtract),
            multiplications: self.evaluations(Operation::Multiply),
            divisions: self.evaluations(Operation::Divide),
            zero_divisor_hits: self.zero_divisor_hits.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        for counter in &self.evaluations {
            counter.store(0, Ordering::Relaxed);
        }
        self.zero_divisor_hits.store(0, Ordering::Relaxed);
        self.rejected.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub additions: u64,
    pub subtractions: u64,
    pub multiplications: u64,
    pub divisions: u64,
    pub zero_divisor_hits: u64,
    pub rejected: u64,
}

impl MetricsSnapshot {
    /// Completed evaluations across all operations
    pub fn total(&self) -> u64 {
        self.additions + self.subtractions + self.multiplications + self.divisions
    }
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to integrate with external metrics systems
/// like Prometheus, StatsD, or OpenTelemetry.
pub trait MetricsRecorder: Send + Sync {
    /// Record a completed evaluation
    fn record_operation(&self, operation: Operation);

    /// Record a sentinel substitution for a zero divisor
    fn record_zero_divisor(&self);

    /// Record a call that returned an error
    fn record_rejection(&self, operation: Operation);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_operation(&self, _: Operation) {}
    fn record_zero_divisor(&self) {}
    fn record_rejection(&self, _: Operation) {}
}

impl MetricsRecorder for Metrics {
    fn record_operation(&self, operation: Operation) {
        Metrics::record_operation(self, operation);
    }

    fn record_zero_divisor(&self) {
        Metrics::record_zero_divisor(self);
    }

    fn record_rejection(&self, operation: Operation) {
        Metrics::record_rejection(self, operation);
    }
}
