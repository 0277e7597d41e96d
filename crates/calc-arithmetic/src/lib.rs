//! # Calc-Arithmetic
//!
//! Double-precision arithmetic: add, subtract, multiply and divide over `f64`.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure arithmetic, no I/O
//!   - `add`, `subtract`, `multiply`, `divide`: the four operations
//!   - `checked_divide`: division that reports a zero divisor as an error
//!   - `Operation`: names an operation and dispatches to it
//!   - `CalculatorConfig` / `CalculatorConfigBuilder`: validated configuration
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ArithmeticApi`: Driving port (inbound API)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `CalculatorService`: Implements `ArithmeticApi`
//!
//! - **Metrics** (`metrics`): `MetricsRecorder` driven port, `Metrics` counters
//!
//! ## Division by zero
//!
//! `divide(a, 0.0)` returns `0.0` for every `a`, including `-0.0` divisors.
//! The result cannot be told apart from a genuine zero quotient.
//! `checked_divide` and `ZeroDivisorPolicy::Reject` surface
//! `CalcError::DivisionByZero` instead.
//!
//! ## Usage Example
//!
//! ```
//! use calc_arithmetic::{add, divide, multiply, subtract};
//!
//! assert_eq!(add(2.0, 3.0), 5.0);
//! assert_eq!(subtract(5.0, 3.0), 2.0);
//! assert_eq!(multiply(4.0, 2.5), 10.0);
//! assert_eq!(divide(10.0, 2.0), 5.0);
//! assert_eq!(divide(7.0, 0.0), 0.0);
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    add, checked_divide, divide, multiply, subtract, CalculatorConfig, CalculatorConfigBuilder,
    Operation, ZeroDivisorPolicy, ZERO_DIVISOR_SENTINEL,
};
pub use error::CalcError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::ArithmeticApi;
pub use service::CalculatorService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
