//! Service Layer
//!
//! Applies configuration policy on top of the pure domain operations
//! and reports outcomes to the metrics recorder.

pub mod calculator_service;

pub use calculator_service::CalculatorService;
