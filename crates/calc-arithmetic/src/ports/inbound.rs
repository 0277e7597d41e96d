//! Inbound Ports (Driving Ports)
//!
//! The API external components use to run arithmetic under a
//! [`CalculatorConfig`](crate::CalculatorConfig).

use crate::domain::Operation;
use crate::error::CalcError;

/// Primary arithmetic API (Driving Port)
pub trait ArithmeticApi: Send + Sync {
    /// `a + b`
    fn add(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.evaluate(Operation::Add, a, b)
    }

    /// `a - b`
    fn subtract(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.evaluate(Operation::Subtract, a, b)
    }

    /// `a * b`
    fn multiply(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.evaluate(Operation::Multiply, a, b)
    }

    /// `a / b`
    ///
    /// A zero divisor is resolved by the configured
    /// [`ZeroDivisorPolicy`](crate::ZeroDivisorPolicy).
    fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.evaluate(Operation::Divide, a, b)
    }

    /// Evaluate `a <operation> b`
    fn evaluate(&self, operation: Operation, a: f64, b: f64) -> Result<f64, CalcError>;
}
