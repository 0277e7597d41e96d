//! Integration tests across the domain, service and metrics layers.

pub mod properties;
pub mod scenarios;
