//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use showroom::config::{load_merged_config, validate};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".showroom");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "dealer_name: Riyadh Motors").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.dealer_name.as_deref(), Some("Riyadh Motors"));
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{ExportConfig, InventoryConfig, ShowroomConfig, SubmissionConfig};
pub use validator::{validate, validate_config, ValidationError};
