//! Domain Layer - Pure arithmetic
//!
//! This layer contains:
//! - The four arithmetic operations and checked division
//! - Operation identifiers
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No logging in `operations`
//! - Pure functions where possible

pub mod config;
pub mod operation;
pub mod operations;

pub use config::{CalculatorConfig, CalculatorConfigBuilder, ZeroDivisorPolicy};
pub use operation::Operation;
pub use operations::{
    add, checked_divide, divide, is_zero_divisor, multiply, subtract, ZERO_DIVISOR_SENTINEL,
};
