//! Module configuration
//!
//! The only behavioural knob is the [`FailurePolicy`]: what the relay does
//! when the custodial account reports that it did not execute a request.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Handling of a `false` result from the custodial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Fail the whole operation with `ExternalCallFailed`
    #[default]
    Abort,
    /// Return `Ok(false)` to the caller and record the failed attempt
    ///
    /// Matches modules that ignore the custodial account's return value.
    Tolerate,
}

impl FailurePolicy {
    pub fn aborts_on_failure(&self) -> bool {
        matches!(self, FailurePolicy::Abort)
    }
}

/// Transfer module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Human-readable name used in logs
    pub name: String,
    /// Handling of rejected requests
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: "transfer-module".to_string(),
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl ModuleConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Config that reproduces the legacy behaviour of ignoring `false` results
    pub fn tolerant() -> Self {
        Self {
            failure_policy: FailurePolicy::Tolerate,
            ..Default::default()
        }
    }

    /// Set the module name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Check the config for obviously broken values
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidConfig("module name cannot be empty".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
