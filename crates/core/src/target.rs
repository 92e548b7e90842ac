//! Data model shared by both decoders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a build target. Compared and hashed by its string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        TargetId(id.to_owned())
    }
}

impl From<String> for TargetId {
    fn from(id: String) -> Self {
        TargetId(id)
    }
}

fn enabled_by_default() -> bool {
    true
}

/// A single launch argument. Order within a target's list is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLineArgument {
    pub value: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl CommandLineArgument {
    pub fn new(value: impl Into<String>) -> Self {
        CommandLineArgument {
            value: value.into(),
            enabled: true,
        }
    }
}

/// A launch environment entry. Keys are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub key: String,
    pub value: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl EnvironmentVariable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        EnvironmentVariable {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }
}

/// Descriptor of a producible product, as written into scheme documents.
///
/// The decoders never build one of these; they are only obtained from a
/// [`TargetRegistry`](crate::registry::TargetRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildableReference {
    pub blueprint_identifier: String,
    pub buildable_name: String,
    pub blueprint_name: String,
    pub referenced_container: String,
}

/// A registry entry: a target and the buildable reference it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    pub buildable_reference: BuildableReference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_id_serializes_as_plain_string() {
        let id = TargetId::from("//app:App applebin_ios-ios_sim_arm64-dbg-STABLE-1");
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(
            json,
            serde_json::json!("//app:App applebin_ios-ios_sim_arm64-dbg-STABLE-1")
        );
    }

    #[test]
    fn enabled_defaults_to_true_when_absent() {
        let env: EnvironmentVariable =
            serde_json::from_str(r#"{"key": "A", "value": "1"}"#).unwrap();
        assert!(env.enabled);
        let arg: CommandLineArgument = serde_json::from_str(r#"{"value": "-v"}"#).unwrap();
        assert_eq!(arg, CommandLineArgument::new("-v"));
    }
}
