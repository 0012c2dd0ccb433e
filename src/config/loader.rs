//! Configuration file discovery and loading.
//!
//! Layers are merged in this order, later overriding earlier:
//! 1. User global config (`~/.showroom/config.yml`)
//! 2. Project config (`.showroom/config.yml`)
//! 3. Local overrides (`.showroom/config.local.yml`)
//!
//! No layer is required; without any file the defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::schema::ShowroomConfig;
use crate::error::{Result, ShowroomError};

/// Name of the per-project and per-user config directory.
pub const CONFIG_DIR: &str = ".showroom";

/// Paths to configuration files in priority order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// `~/.showroom/config.yml`
    pub user_global: Option<PathBuf>,

    /// `.showroom/config.yml`
    pub project: Option<PathBuf>,

    /// `.showroom/config.local.yml`
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .and_then(|home| existing(home.join(CONFIG_DIR).join("config.yml"))),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// A directory containing `.showroom/` wins; a `.git` entry is the fallback.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() || current.join(".git").exists() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the YAML doesn't match the schema.
pub fn load_config_file(path: &Path) -> Result<ShowroomConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Parse YAML content into a config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ShowroomConfig> {
    let value = parse_value(content, source_path)?;
    from_value(value, source_path)
}

/// Load a config file as a raw YAML value, for merging.
///
/// An empty file loads as an empty mapping.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShowroomError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShowroomError::Io(e)
        }
    })?;

    debug!("Loading config from {}", path.display());
    parse_value(&content, path)
}

/// Load and merge every config layer for a project.
pub fn load_merged_config(project_root: &Path) -> Result<ShowroomConfig> {
    let paths = ConfigPaths::discover(project_root);

    let layers = paths
        .all_existing()
        .into_iter()
        .map(|path| load_config_value(path))
        .collect::<Result<Vec<_>>>()?;

    from_value(
        merge_configs(&layers),
        &project_root.join(CONFIG_DIR).join("config.yml"),
    )
}

/// Load config with an optional path override.
///
/// With an override only that file is loaded, without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ShowroomConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

fn parse_value(content: &str, path: &Path) -> Result<Value> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| ShowroomError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(if value.is_null() {
        Value::Mapping(Default::default())
    } else {
        value
    })
}

fn from_value(value: Value, path: &Path) -> Result<ShowroomConfig> {
    serde_yaml::from_value(value).map_err(|e| ShowroomError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use tempfile::TempDir;

    fn project_with(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        temp
    }

    #[test]
    fn discover_finds_project_and_local() {
        let temp = project_with(&[
            ("config.yml", "locale: en"),
            ("config.local.yml", "locale: ar"),
        ]);
        let paths = ConfigPaths::discover(temp.path());

        assert!(paths.has_project_config());
        assert!(paths.project_local.is_some());
    }

    #[test]
    fn missing_project_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.submission.timeout_secs, 30);
        assert!(config.submission.endpoint.is_none());
    }

    #[test]
    fn local_overrides_project() {
        let temp = project_with(&[
            ("config.yml", "dealer_name: Riyadh Motors\nlocale: en"),
            ("config.local.yml", "locale: ar"),
        ]);
        let config = load_merged_config(temp.path()).unwrap();

        assert_eq!(config.locale, Locale::Arabic);
        assert_eq!(config.dealer_name.as_deref(), Some("Riyadh Motors"));
    }

    #[test]
    fn empty_file_is_empty_layer() {
        let temp = project_with(&[("config.yml", "")]);
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config, ShowroomConfig::default());
    }

    #[test]
    fn override_path_loads_only_that_file() {
        let temp = project_with(&[("config.yml", "dealer_name: Project")]);
        let other = temp.path().join("other.yml");
        fs::write(&other, "locale: ar").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.locale, Locale::Arabic);
        assert!(config.dealer_name.is_none());
    }

    #[test]
    fn missing_override_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, ShowroomError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = project_with(&[("config.yml", "locale: [en")]);
        let err = load_merged_config(temp.path()).unwrap_err();
        assert!(matches!(err, ShowroomError::ConfigParseError { .. }));
    }

    #[test]
    fn schema_mismatch_is_parse_error() {
        let err =
            parse_config("submission:\n  timeout_secs: soon", Path::new("x.yml")).unwrap_err();
        assert!(err.to_string().contains("x.yml"));
    }

    #[test]
    fn project_root_found_from_subdirectory() {
        let temp = project_with(&[("config.yml", "")]);
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }
}
