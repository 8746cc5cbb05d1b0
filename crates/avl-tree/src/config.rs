//! Tree construction options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AvlError, Result};

/// What `insert` does when the key is already present.
///
/// Every policy reports a duplicate insert as "not inserted" and leaves the
/// shape of the tree alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the stored key untouched.
    #[default]
    Ignore,
    /// Replace the stored key with the incoming equal key.
    Update,
    /// Bump the node's multiplicity.
    Count,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Ignore => "ignore",
            DuplicatePolicy::Update => "update",
            DuplicatePolicy::Count => "count",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = AvlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ignore" => Ok(DuplicatePolicy::Ignore),
            "update" => Ok(DuplicatePolicy::Update),
            "count" => Ok(DuplicatePolicy::Count),
            other => Err(AvlError::UnknownPolicy(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub duplicate_policy: DuplicatePolicy,
}

impl TreeConfig {
    pub fn new(duplicate_policy: DuplicatePolicy) -> Self {
        Self { duplicate_policy }
    }

    /// Parses a JSON configuration document. Missing fields take their
    /// defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AvlError::InvalidInput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("ignore".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Ignore));
        assert_eq!("update".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Update));
        assert_eq!("count".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Count));
        assert_eq!(
            "replace".parse::<DuplicatePolicy>(),
            Err(AvlError::UnknownPolicy("replace".to_string()))
        );
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [
            DuplicatePolicy::Ignore,
            DuplicatePolicy::Update,
            DuplicatePolicy::Count,
        ] {
            assert_eq!(policy.to_string().parse::<DuplicatePolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_config_from_json() {
        let config = TreeConfig::from_json_str(r#"{"duplicate_policy": "count"}"#).unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Count);

        let config = TreeConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TreeConfig::default());
    }

    #[test]
    fn test_config_from_json_rejects_garbage() {
        assert!(matches!(
            TreeConfig::from_json_str(r#"{"duplicate_policy": "sometimes"}"#),
            Err(AvlError::InvalidInput(_))
        ));
        assert!(matches!(
            TreeConfig::from_json_str("not json"),
            Err(AvlError::InvalidInput(_))
        ));
    }
}
