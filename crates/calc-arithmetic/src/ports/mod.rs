//! Ports Layer
//!
//! Defines the driving port external callers use. The only driven
//! dependency, metrics, is expressed by [`crate::metrics::MetricsRecorder`].

pub mod inbound;

pub use inbound::ArithmeticApi;
