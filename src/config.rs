//! Planner configuration.
//!
//! Plain data with defaults matching the staffing tool's input forms. The
//! host application decides where the values come from (file, env,
//! request); every field has a default so partial documents deserialize.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::planning::{FutureBandwidthPolicy, FULL_CAPACITY};

/// Tunables for [`Planner`](crate::planning::Planner) and input validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Bandwidth requested when a query does not specify one (percent).
    pub default_required_bandwidth: i32,
    /// Bandwidth values accepted by validation. The computations accept any
    /// integer percentage.
    pub allowed_bandwidths: Vec<i32>,
    /// How candidates that only become available later report bandwidth.
    pub future_bandwidth_policy: FutureBandwidthPolicy,
}

/// A configuration value out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The default required bandwidth is not a percentage.
    #[error("default required bandwidth must be within 0..={max}, got {value}")]
    DefaultBandwidthOutOfRange {
        /// Configured value.
        value: i32,
        /// Upper bound.
        max: i32,
    },

    /// No bandwidth value would pass validation.
    #[error("allowed bandwidth list is empty")]
    NoAllowedBandwidths,

    /// An allowed bandwidth is not a positive percentage.
    #[error("allowed bandwidth {value} is outside 1..={max}")]
    AllowedBandwidthOutOfRange {
        /// Offending value.
        value: i32,
        /// Upper bound.
        max: i32,
    },
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_required_bandwidth: 50,
            allowed_bandwidths: vec![50, 100],
            future_bandwidth_policy: FutureBandwidthPolicy::AssumeFullyFree,
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default required bandwidth.
    pub fn with_default_required_bandwidth(mut self, bandwidth: i32) -> Self {
        self.default_required_bandwidth = bandwidth;
        self
    }

    /// Replaces the accepted bandwidth values.
    pub fn with_allowed_bandwidths(mut self, values: Vec<i32>) -> Self {
        self.allowed_bandwidths = values;
        self
    }

    /// Sets the future bandwidth policy.
    pub fn with_future_bandwidth_policy(mut self, policy: FutureBandwidthPolicy) -> Self {
        self.future_bandwidth_policy = policy;
        self
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=FULL_CAPACITY).contains(&self.default_required_bandwidth) {
            return Err(ConfigError::DefaultBandwidthOutOfRange {
                value: self.default_required_bandwidth,
                max: FULL_CAPACITY,
            });
        }
        if self.allowed_bandwidths.is_empty() {
            return Err(ConfigError::NoAllowedBandwidths);
        }
        if let Some(&value) = self
            .allowed_bandwidths
            .iter()
            .find(|v| !(1..=FULL_CAPACITY).contains(*v))
        {
            return Err(ConfigError::AllowedBandwidthOutOfRange {
                value,
                max: FULL_CAPACITY,
            });
        }
        Ok(())
    }

    /// Whether validation accepts `bandwidth`.
    pub fn is_allowed_bandwidth(&self, bandwidth: i32) -> bool {
        self.allowed_bandwidths.contains(&bandwidth)
    }
}
