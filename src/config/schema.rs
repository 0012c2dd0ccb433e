//! Configuration schema definitions for showroom.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::locale::Locale;

/// Root configuration structure for `.showroom/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowroomConfig {
    /// Dealership name shown on exported documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_name: Option<String>,

    /// Display language: en or ar
    pub locale: Locale,

    /// Where orders are sent
    pub submission: SubmissionConfig,

    /// Order document export
    pub export: ExportConfig,

    /// Vehicle listings
    pub inventory: InventoryConfig,
}

/// Lead submission settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Lead endpoint URL; orders are simulated when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Order document export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported documents are written to
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,

    /// Embed the vehicle image in exported documents
    #[serde(default = "default_true")]
    pub embed_images: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            embed_images: true,
        }
    }
}

/// Inventory settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Listings file (YAML or JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Quiet period before filter changes apply, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_uses_defaults() {
        let config: ShowroomConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ShowroomConfig::default());
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.submission.timeout_secs, 30);
        assert_eq!(config.export.directory, PathBuf::from("."));
        assert!(config.export.embed_images);
        assert_eq!(config.inventory.debounce_ms, 500);
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
dealer_name: Riyadh Motors
locale: ar
submission:
  endpoint: https://leads.example.com/orders
  timeout_secs: 10
export:
  directory: orders
  embed_images: false
inventory:
  path: stock.yml
  debounce_ms: 250
"#;
        let config: ShowroomConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.dealer_name.as_deref(), Some("Riyadh Motors"));
        assert_eq!(config.locale, Locale::Arabic);
        assert_eq!(
            config.submission.endpoint.as_deref(),
            Some("https://leads.example.com/orders")
        );
        assert_eq!(config.submission.timeout_secs, 10);
        assert_eq!(config.export.directory, PathBuf::from("orders"));
        assert!(!config.export.embed_images);
        assert_eq!(config.inventory.path, Some(PathBuf::from("stock.yml")));
        assert_eq!(config.inventory.debounce_ms, 250);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: ShowroomConfig =
            serde_yaml::from_str("submission:\n  endpoint: http://localhost:8080").unwrap();
        assert_eq!(config.submission.timeout_secs, 30);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let result: std::result::Result<ShowroomConfig, _> = serde_yaml::from_str("locale: fr");
        assert!(result.is_err());
    }

    #[test]
    fn serializes_without_unset_options() {
        let yaml = serde_yaml::to_string(&ShowroomConfig::default()).unwrap();
        assert!(yaml.contains("locale: en"));
        assert!(!yaml.contains("dealer_name"));
        assert!(!yaml.contains("endpoint"));
    }
}
