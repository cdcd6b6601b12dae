//! Emitter configuration and validation
//!
//! # Example
//!
//! ```
//! use observable::{FailurePolicy, ObservableConfigBuilder};
//!
//! let config = ObservableConfigBuilder::new()
//!     .label("inventory")
//!     .subscribe_name("subscribe")
//!     .unsubscribe_name("unsubscribe")
//!     .publish_name("publish")
//!     .failure_policy(FailurePolicy::Continue)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.method_names.publish, "publish");
//! ```

use crate::error::ObservableError;
use crate::{DEFAULT_LABEL, INSPECT_NAME};
use serde::{Deserialize, Serialize};

/// The operations an observable exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Subscribe,
    Unsubscribe,
    Publish,
    Inspect,
}

/// What `fire` does when a callback returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Stop at the first failing callback and report it.
    #[default]
    Abort,
    /// Run every callback in the snapshot, then report all failures together.
    Continue,
}

/// Names under which the renameable operations are exposed.
///
/// The inspector is always `getEvents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodNames {
    #[serde(rename = "subscribeName")]
    pub subscribe: String,
    #[serde(rename = "unsubscribeName")]
    pub unsubscribe: String,
    #[serde(rename = "publishName")]
    pub publish: String,
}

impl Default for MethodNames {
    fn default() -> Self {
        Self {
            subscribe: "on".to_string(),
            unsubscribe: "off".to_string(),
            publish: "fire".to_string(),
        }
    }
}

impl MethodNames {
    /// Resolve a method name to the operation it is bound to.
    pub fn resolve(&self, name: &str) -> Option<Operation> {
        if name == self.subscribe {
            Some(Operation::Subscribe)
        } else if name == self.unsubscribe {
            Some(Operation::Unsubscribe)
        } else if name == self.publish {
            Some(Operation::Publish)
        } else if name == INSPECT_NAME {
            Some(Operation::Inspect)
        } else {
            None
        }
    }

    /// The configured name of an operation.
    pub fn name_of(&self, op: Operation) -> &str {
        match op {
            Operation::Subscribe => &self.subscribe,
            Operation::Unsubscribe => &self.unsubscribe,
            Operation::Publish => &self.publish,
            Operation::Inspect => INSPECT_NAME,
        }
    }

    /// Reject empty, duplicate, or reserved names.
    pub fn validate(&self) -> Result<(), ObservableError> {
        let names = [&self.subscribe, &self.unsubscribe, &self.publish];

        for name in names {
            if name.trim().is_empty() {
                return Err(ObservableError::InvalidConfig(
                    "method names cannot be empty".to_string(),
                ));
            }
            if name == INSPECT_NAME {
                return Err(ObservableError::InvalidConfig(format!(
                    "'{INSPECT_NAME}' is reserved for the inspector"
                )));
            }
        }

        if self.subscribe == self.unsubscribe
            || self.subscribe == self.publish
            || self.unsubscribe == self.publish
        {
            return Err(ObservableError::InvalidConfig(
                "method names must be distinct".to_string(),
            ));
        }

        Ok(())
    }
}

/// Emitter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservableConfig {
    /// Label attached to every log record the emitter writes
    pub label: String,
    /// Names of the renameable operations
    pub method_names: MethodNames,
    /// Behaviour when a callback fails during `fire`
    pub failure_policy: FailurePolicy,
}

impl Default for ObservableConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            method_names: MethodNames::default(),
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl ObservableConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ObservableError> {
        if self.label.trim().is_empty() {
            return Err(ObservableError::InvalidConfig(
                "label cannot be empty".to_string(),
            ));
        }
        self.method_names.validate()
    }

    /// Builder-style method to set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder-style method to set the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

/// Builder for [`ObservableConfig`] with validation.
#[derive(Default)]
pub struct ObservableConfigBuilder {
    label: Option<String>,
    subscribe_name: Option<String>,
    unsubscribe_name: Option<String>,
    publish_name: Option<String>,
    failure_policy: Option<FailurePolicy>,
}

impl ObservableConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the name of the subscribe operation (default `on`)
    pub fn subscribe_name(mut self, name: impl Into<String>) -> Self {
        self.subscribe_name = Some(name.into());
        self
    }

    /// Set the name of the unsubscribe operation (default `off`)
    pub fn unsubscribe_name(mut self, name: impl Into<String>) -> Self {
        self.unsubscribe_name = Some(name.into());
        self
    }

    /// Set the name of the publish operation (default `fire`)
    pub fn publish_name(mut self, name: impl Into<String>) -> Self {
        self.publish_name = Some(name.into());
        self
    }

    /// Set the failure policy (default [`FailurePolicy::Abort`])
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = Some(policy);
        self
    }

    /// Build the configuration, validating all parameters
    pub fn build(self) -> Result<ObservableConfig, ObservableError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    fn build_unchecked(self) -> ObservableConfig {
        let defaults = ObservableConfig::default();

        ObservableConfig {
            label: self.label.unwrap_or(defaults.label),
            method_names: MethodNames {
                subscribe: self
                    .subscribe_name
                    .unwrap_or(defaults.method_names.subscribe),
                unsubscribe: self
                    .unsubscribe_name
                    .unwrap_or(defaults.method_names.unsubscribe),
                publish: self.publish_name.unwrap_or(defaults.method_names.publish),
            },
            failure_policy: self.failure_policy.unwrap_or(defaults.failure_policy),
        }
    }
}
