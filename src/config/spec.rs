//! Step payload types for the helm mixin.
//!
//! These structs map the YAML the host hands to the mixin. A status payload
//! looks like:
//!
//! ```yaml
//! status:
//!   - helm:
//!       description: "MySQL Status"
//!       releases:
//!         - mysql
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

use crate::error::{MixinError, Result};

/// The root of a status payload.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StatusAction {
    /// Status steps; exactly one is expected at invocation time.
    #[serde(rename = "status", default, deserialize_with = "null_as_default")]
    pub steps: Vec<StatusStep>,
}

/// A single status step.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StatusStep {
    /// Arguments nested under the `helm` key.
    #[serde(rename = "helm", default, deserialize_with = "null_as_default")]
    pub arguments: StatusArguments,
}

/// Arguments available to the status action.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StatusArguments {
    /// Fields shared with every other step kind.
    #[serde(flatten)]
    pub step: Step,
    /// Releases to report on, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub releases: Vec<String>,
}

/// Fields common to all steps of the host.
///
/// The mixin never acts on these; they are carried through as-is.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Step {
    /// Human-readable step description. Any scalar is accepted as text.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub description: Option<String>,
    /// Outputs declared on the step.
    #[serde(default, deserialize_with = "null_as_default")]
    pub outputs: Vec<serde_yaml::Value>,
    /// Any other inline step fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl StatusAction {
    /// Returns the only step of the action.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the action does not hold exactly one step.
    pub fn into_single_step(self) -> Result<StatusStep> {
        let count = self.steps.len();
        let mut steps = self.steps.into_iter();
        match (steps.next(), steps.next()) {
            (Some(step), None) => Ok(step),
            _ => Err(MixinError::Validation { count }),
        }
    }
}

impl StatusStep {
    /// Releases named by this step.
    #[must_use]
    pub fn releases(&self) -> &[String] {
        &self.arguments.releases
    }
}

/// Treats an explicit YAML `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads any YAML scalar as text, so `description: 2024` is kept as `"2024"`.
fn scalar_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Null => Ok(None),
        serde_yaml::Value::String(s) => Ok(Some(s)),
        serde_yaml::Value::Number(n) => Ok(Some(n.to_string())),
        serde_yaml::Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(D::Error::custom("expected a scalar description")),
    }
}
