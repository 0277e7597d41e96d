//! Calculator Service
//!
//! Orchestrates the domain operations under a validated configuration.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    checked_divide, is_zero_divisor, CalculatorConfig, Operation, ZeroDivisorPolicy,
};
use crate::error::CalcError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::ArithmeticApi;

/// Calculator Service implementation
///
/// Implements the `ArithmeticApi` port using injected dependencies.
/// With the default configuration every call returns exactly what the
/// pure functions in [`crate::domain::operations`] return.
pub struct CalculatorService<M: MetricsRecorder = NoOpMetrics> {
    /// Validated configuration
    config: CalculatorConfig,
    /// Metrics recorder (driven port)
    metrics: Arc<M>,
}

impl CalculatorService<NoOpMetrics> {
    /// Create a new service without metrics
    pub fn new(config: CalculatorConfig) -> Result<Self, CalcError> {
        Self::with_metrics(config, Arc::new(NoOpMetrics))
    }
}

impl Default for CalculatorService<NoOpMetrics> {
    fn default() -> Self {
        Self {
            config: CalculatorConfig::default(),
            metrics: Arc::new(NoOpMetrics),
        }
    }
}

impl<M: MetricsRecorder> CalculatorService<M> {
    /// Create with a metrics recorder
    pub fn with_metrics(config: CalculatorConfig, metrics: Arc<M>) -> Result<Self, CalcError> {
        config.validate()?;
        Ok(Self { config, metrics })
    }

    /// Active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Metrics recorder
    pub fn metrics(&self) -> &Arc<M> {
        &self.metrics
    }

    fn compute(&self, operation: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
        if self.config.require_finite_operands {
            for value in [a, b] {
                if !value.is_finite() {
                    return Err(CalcError::NonFiniteOperand { operation, value });
                }
            }
        }

        if operation == Operation::Divide && is_zero_divisor(b) {
            return self.resolve_zero_divisor(a, b);
        }

        Ok(operation.apply(a, b))
    }

    fn resolve_zero_divisor(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self.config.zero_divisor_policy {
            ZeroDivisorPolicy::Sentinel => {
                self.metrics.record_zero_divisor();
                warn!(
                    dividend = a,
                    sentinel = self.config.sentinel,
                    "Zero divisor, returning sentinel"
                );
                Ok(self.config.sentinel)
            }
            ZeroDivisorPolicy::Reject => checked_divide(a, b),
        }
    }
}

impl<M: MetricsRecorder> ArithmeticApi for CalculatorService<M> {
    fn evaluate(&self, operation: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
        let result = self.compute(operation, a, b);

        match &result {
            Ok(value) => {
                self.metrics.record_operation(operation);
                debug!(%operation, a, b, result = *value, "Evaluated");
            }
            Err(e) => {
                self.metrics.record_rejection(operation);
                debug!(%operation, a, b, error = %e, "Rejected");
            }
        }

        result
    }
}
