//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading audit
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AuditError, AuditResult};

use super::types::{AuditConfig, PayoutConfig, ReconciliationConfig};

/// Loads and provides access to audit configuration.
///
/// The file layout mirrors [`AuditConfig`]:
/// ```text
/// payout:
///   excluded_employees: [Nick C, Troy, ...]
///   excluded_locations: [Haven, ...]
///   bonus_location: "Fleming's Condo"
///   bonus_amount: "13.5"
/// reconciliation:
///   ignored_employees: [...]
///   ignored_locations: [...]
/// ```
///
/// Sections or fields left out of the file keep their built-in defaults.
///
/// # Example
///
/// ```no_run
/// use timesheet_audit::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml")?;
/// println!("Bonus location: {}", loader.payout().bonus_location);
/// # Ok::<(), timesheet_audit::error::AuditError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AuditConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the file is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|e| match e {
            AuditError::ConfigParseError { message, .. } => AuditError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(
            path = %path_str,
            excluded_employees = loader.payout().excluded_employees.len(),
            ignored_employees = loader.reconciliation().ignored_employees.len(),
            "Loaded audit configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> AuditResult<Self> {
        // An empty document deserializes to unit, not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AuditConfig =
            serde_yaml::from_str(content).map_err(|e| AuditError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying audit configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Returns the payout report rules.
    pub fn payout(&self) -> &PayoutConfig {
        &self.config.payout
    }

    /// Returns the reconciliation report rules.
    pub fn reconciliation(&self) -> &ReconciliationConfig {
        &self.config.reconciliation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default.yaml"
    }

    #[test]
    fn test_load_shipped_configuration() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &AuditConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("./config/does_not_exist.yaml");
        match result {
            Err(AuditError::ConfigNotFound { path }) => {
                assert!(path.contains("does_not_exist.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let loader = ConfigLoader::from_yaml_str(
            r#"
payout:
  bonus_amount: "20"
"#,
        )
        .unwrap();
        assert_eq!(
            loader.payout().bonus_amount,
            Decimal::from_str("20").unwrap()
        );
        assert_eq!(loader.payout().bonus_location, "Fleming's Condo");
        assert!(loader.payout().excluded_employees.contains("troy"));
        assert_eq!(loader.reconciliation(), &ReconciliationConfig::default());
    }

    #[test]
    fn test_yaml_lists_replace_defaults() {
        let loader = ConfigLoader::from_yaml_str(
            r#"
reconciliation:
  ignored_employees: [Alice]
  ignored_locations: []
"#,
        )
        .unwrap();
        let reconciliation = loader.reconciliation();
        assert!(reconciliation.ignored_employees.contains("ALICE"));
        assert!(!reconciliation.ignored_employees.contains("Troy"));
        assert!(reconciliation.ignored_locations.is_empty());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let loader = ConfigLoader::from_yaml_str("   \n").unwrap();
        assert_eq!(loader.config(), &AuditConfig::default());
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("payout: [unclosed");
        assert!(matches!(result, Err(AuditError::ConfigParseError { .. })));
    }
}
