//! Config command implementation.
//!
//! The `showroom config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, ConfigPaths};
use crate::error::{Result, ShowroomError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn sources(&self) -> Vec<PathBuf> {
        match &self.config_override {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;

        let sources = self.sources();
        if sources.is_empty() {
            ui.message("# defaults (no config files found)");
        } else {
            for path in &sources {
                ui.message(&format!("# {}", path.display()));
            }
        }
        ui.message("");

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&config).map_err(|e| ShowroomError::Other(e.into()))?
        } else {
            serde_yaml::to_string(&config).map_err(|e| ShowroomError::Other(e.into()))?
        };
        ui.message(&rendered);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".showroom");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn config_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
    }

    #[test]
    fn shows_config_path_and_values() {
        let temp = setup_project("dealer_name: Riyadh Motors\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.messages().iter().any(|m| m.starts_with('#') && m.contains("config.yml")));
        assert!(ui.messages().iter().any(|m| m.contains("dealer_name: Riyadh Motors")));
    }

    #[test]
    fn json_output() {
        let temp = setup_project("locale: ar\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages().iter().any(|m| m.contains("\"locale\": \"ar\"")));
    }

    #[test]
    fn override_path_is_the_only_source() {
        let temp = setup_project("locale: en\n");
        let other = temp.path().join("kiosk.yml");
        fs::write(&other, "locale: ar\n").unwrap();
        let cmd = ConfigCommand::new(temp.path(), Some(&other), ConfigArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let headers: Vec<_> = ui.messages().iter().filter(|m| m.starts_with('#')).collect();
        assert_eq!(headers.len(), 1);
        assert!(headers[0].contains("kiosk.yml"));
    }

    #[test]
    fn no_files_reports_defaults() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(ui.has_message("defaults"));
    }
}
