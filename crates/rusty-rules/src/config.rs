// File: src/config.rs
// Purpose: Validator configuration, parsed from rusty-rules.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What to do with an annotation whose rule name is not `len`, `in`, `min` or `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRules {
    /// Skip the field silently
    #[default]
    Ignore,
    /// Record a syntax violation for the field
    Reject,
}

/// How `in` lists parse entries that are not integers when the field is an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipInts {
    /// Unparsable entries count as `0`
    #[default]
    Lenient,
    /// Unparsable entries are a syntax violation
    Strict,
}

/// Validator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub unknown_rules: UnknownRules,

    #[serde(default)]
    pub membership_ints: MembershipInts,
}

impl ValidatorConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse validator config")
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidatorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rusty-rules.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-rules.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.unknown_rules, UnknownRules::Ignore);
        assert_eq!(config.membership_ints, MembershipInts::Lenient);
    }

    #[test]
    fn test_empty_config() {
        let config = ValidatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_custom_policies() {
        let toml = r#"
            unknown_rules = "reject"
            membership_ints = "strict"
        "#;
        let config = ValidatorConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.unknown_rules, UnknownRules::Reject);
        assert_eq!(config.membership_ints, MembershipInts::Strict);
    }

    #[test]
    fn test_invalid_policy_is_an_error() {
        let err = ValidatorConfig::from_toml_str(r#"unknown_rules = "panic""#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse validator config"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ValidatorConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"membership_ints = "strict""#).unwrap();

        let config = ValidatorConfig::load(file.path()).unwrap();
        assert_eq!(config.membership_ints, MembershipInts::Strict);
        assert_eq!(config.unknown_rules, UnknownRules::Ignore);
    }
}
