//! Order command implementation.
//!
//! The `showroom order` command opens the purchase wizard for one vehicle
//! and submits the finished order.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cli::args::OrderArgs;
use crate::config::{load_config, validate, ShowroomConfig};
use crate::error::Result;
use crate::export::{DocumentExporter, HttpImageFetcher, ImagePrefetch, MarkdownRenderer};
use crate::inventory::{load_inventory, load_selected_vehicle, SelectedVehicle};
use crate::submission::{HttpSubmissionClient, SimulatedSubmissionClient, SubmissionClient};
use crate::ui::{should_use_colors, BadgeStyles, UserInterface};
use crate::wizard::{SessionOptions, SessionOutcome, WizardController, WizardSession};

use super::browse::inventory_path;
use super::dispatcher::{Command, CommandResult};

/// The order command implementation.
pub struct OrderCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: OrderArgs,
}

impl OrderCommand {
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: OrderArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    pub fn args(&self) -> &OrderArgs {
        &self.args
    }

    fn load_config(&self) -> Result<ShowroomConfig> {
        let mut config = load_config(&self.project_root, self.config_override.as_deref())?;
        if let Some(endpoint) = &self.args.endpoint {
            config.submission.endpoint = Some(endpoint.clone());
        }
        if let Some(locale) = self.args.lang {
            config.locale = locale;
        }
        validate(&config)?;
        Ok(config)
    }

    /// A vehicle file, or a listing looked up in the inventory by id.
    fn selected_vehicle(&self, config: &ShowroomConfig) -> Result<SelectedVehicle> {
        if let Some(file) = self.vehicle_file() {
            debug!("Loading vehicle from {}", file.display());
            return load_selected_vehicle(&file);
        }

        let path = inventory_path(&self.project_root, self.args.inventory.as_deref(), config)?;
        let inventory = load_inventory(&path)?;
        Ok(inventory.require(&self.args.vehicle)?.to_selected())
    }

    fn vehicle_file(&self) -> Option<PathBuf> {
        let given = Path::new(&self.args.vehicle);
        if given.is_file() {
            return Some(given.to_path_buf());
        }
        let in_project = self.project_root.join(given);
        in_project.is_file().then_some(in_project)
    }

    fn exporter(&self, config: &ShowroomConfig) -> DocumentExporter {
        let directory = match &self.args.export_dir {
            Some(dir) => dir.clone(),
            None if config.export.directory.is_absolute() => config.export.directory.clone(),
            None => self.project_root.join(&config.export.directory),
        };
        DocumentExporter::new(Box::new(MarkdownRenderer), directory)
            .with_dealer_name(config.dealer_name.clone())
    }

    fn client(&self, config: &ShowroomConfig) -> Result<Box<dyn SubmissionClient>> {
        let timeout = Duration::from_secs(config.submission.timeout_secs);
        let client: Box<dyn SubmissionClient> = match &config.submission.endpoint {
            Some(endpoint) => Box::new(HttpSubmissionClient::with_timeout(
                endpoint.clone(),
                timeout,
            )?),
            None => {
                debug!("No submission endpoint configured, simulating");
                Box::new(SimulatedSubmissionClient::default())
            }
        };
        Ok(client)
    }
}

fn prefetch(config: &ShowroomConfig, vehicle: &SelectedVehicle) -> ImagePrefetch {
    if !config.export.embed_images || vehicle.image_url.is_none() {
        return ImagePrefetch::none();
    }
    match HttpImageFetcher::new(Duration::from_secs(config.submission.timeout_secs)) {
        Ok(fetcher) => ImagePrefetch::start(Arc::new(fetcher), vehicle.image_url.as_deref()),
        Err(e) => {
            warn!("Image fetching disabled: {:#}", e);
            ImagePrefetch::none()
        }
    }
}

impl Command for OrderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.load_config()?;
        let vehicle = self.selected_vehicle(&config)?;
        let client = self.client(&config)?;

        let image = prefetch(&config, &vehicle);
        let wizard = WizardController::open(vehicle, self.args.payment, config.locale);
        let interactive = ui.is_interactive();

        let options = SessionOptions {
            exporter: Some(self.exporter(&config)),
            image,
            auto_export: !interactive && self.args.export_dir.is_some(),
            badges: BadgeStyles::new(interactive && should_use_colors()),
        };

        let report = WizardSession::new(wizard, options).run(ui, client.as_ref())?;
        Ok(match report.outcome {
            SessionOutcome::Submitted => CommandResult::success(),
            SessionOutcome::Cancelled => CommandResult::failure(1),
        })
    }
}
