//! Calculator configuration and validation
//!
//! # Example
//!
//! ```
//! use calc_arithmetic::{CalculatorConfigBuilder, ZeroDivisorPolicy};
//!
//! let config = CalculatorConfigBuilder::new()
//!     .zero_divisor_policy(ZeroDivisorPolicy::Reject)
//!     .require_finite_operands(true)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.zero_divisor_policy, ZeroDivisorPolicy::Reject);
//! ```

use crate::domain::operations::ZERO_DIVISOR_SENTINEL;
use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// What division does when the divisor is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDivisorPolicy {
    /// Return the configured sentinel.
    #[default]
    Sentinel,
    /// Return [`CalcError::DivisionByZero`].
    Reject,
}

/// Calculator configuration
///
/// The default reproduces the plain [`divide`](crate::divide) behavior:
/// sentinel policy, sentinel `0.0`, any operand accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Zero-divisor handling
    pub zero_divisor_policy: ZeroDivisorPolicy,
    /// Value returned under [`ZeroDivisorPolicy::Sentinel`]
    pub sentinel: f64,
    /// Reject NaN and infinite operands
    pub require_finite_operands: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            zero_divisor_policy: ZeroDivisorPolicy::Sentinel,
            sentinel: ZERO_DIVISOR_SENTINEL,
            require_finite_operands: false,
        }
    }
}

impl CalculatorConfig {
    /// Create a new configuration with validation
    pub fn new(
        zero_divisor_policy: ZeroDivisorPolicy,
        sentinel: f64,
        require_finite_operands: bool,
    ) -> Result<Self, CalcError> {
        let config = Self {
            zero_divisor_policy,
            sentinel,
            require_finite_operands,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CalcError> {
        if !self.sentinel.is_finite() {
            return Err(CalcError::InvalidConfig(format!(
                "sentinel must be finite, got {}",
                self.sentinel
            )));
        }

        Ok(())
    }

    /// Builder-style method to set the zero-divisor policy
    pub fn with_zero_divisor_policy(mut self, policy: ZeroDivisorPolicy) -> Self {
        self.zero_divisor_policy = policy;
        self
    }

    /// Builder-style method to set the sentinel
    pub fn with_sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Builder-style method to require finite operands
    pub fn with_require_finite_operands(mut self, require: bool) -> Self {
        self.require_finite_operands = require;
        self
    }
}

/// Builder for CalculatorConfig with validation
#[derive(Default)]
pub struct CalculatorConfigBuilder {
    zero_divisor_policy: Option<ZeroDivisorPolicy>,
    sentinel: Option<f64>,
    require_finite_operands: Option<bool>,
}

impl CalculatorConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zero-divisor policy
    pub fn zero_divisor_policy(mut self, policy: ZeroDivisorPolicy) -> Self {
        self.zero_divisor_policy = Some(policy);
        self
    }

    /// Set the sentinel returned for a zero divisor (must be finite)
    pub fn sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = Some(sentinel);
        self
    }

    /// Reject NaN and infinite operands
    pub fn require_finite_operands(mut self, require: bool) -> Self {
        self.require_finite_operands = Some(require);
        self
    }

    /// Build the CalculatorConfig, validating all parameters
    pub fn build(self) -> Result<CalculatorConfig, CalcError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> CalculatorConfig {
        let defaults = CalculatorConfig::default();

        CalculatorConfig {
            zero_divisor_policy: self
                .zero_divisor_policy
                .unwrap_or(defaults.zero_divisor_policy),
            sentinel: self.sentinel.unwrap_or(defaults.sentinel),
            require_finite_operands: self
                .require_finite_operands
                .unwrap_or(defaults.require_finite_operands),
        }
    }
}
