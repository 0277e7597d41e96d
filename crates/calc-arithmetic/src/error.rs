//! Error types for the calculator

use thiserror::Error;

use crate::domain::Operation;

/// Errors that can occur in the calculator
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },

    #[error("Non-finite operand for {operation}: {value}")]
    NonFiniteOperand { operation: Operation, value: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
