//! Browse command implementation.
//!
//! The `showroom browse` command lists the inventory, optionally narrowed
//! by filter flags or by an interactive refine pass.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cli::args::BrowseArgs;
use crate::config::{load_config, validate, ShowroomConfig};
use crate::error::{Result, ShowroomError};
use crate::inventory::{
    format_price, load_inventory, FilterSidebar, Inventory, ListingFilter, Vehicle,
};
use crate::locale::Catalog;
use crate::ui::{Prompt, PromptOption, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Option value meaning "no constraint" in refine prompts.
const ANY: &str = "any";

/// The browse command implementation.
pub struct BrowseCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: BrowseArgs,
}

impl BrowseCommand {
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: BrowseArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    pub fn args(&self) -> &BrowseArgs {
        &self.args
    }

    fn initial_filter(&self) -> ListingFilter {
        ListingFilter {
            make: self.args.make.clone(),
            body_type: self.args.body.clone(),
            fuel_type: self.args.fuel.clone(),
            min_price: self.args.min_price,
            max_price: self.args.max_price,
            search: self.args.search.clone(),
            sort: self.args.sort,
            ..ListingFilter::default()
        }
    }
}

/// Resolve the inventory file from a flag or `inventory.path`.
///
/// Relative paths are taken from the project root.
pub fn inventory_path(
    project_root: &Path,
    flag: Option<&Path>,
    config: &ShowroomConfig,
) -> Result<PathBuf> {
    let path = flag
        .or(config.inventory.path.as_deref())
        .ok_or_else(|| ShowroomError::ConfigValidationError {
            message: "No inventory file. Pass --inventory or set inventory.path".to_string(),
        })?;

    Ok(if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    })
}

impl Command for BrowseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        validate(&config)?;

        let path = inventory_path(&self.project_root, self.args.inventory.as_deref(), &config)?;
        let inventory = load_inventory(&path)?;

        let filter = if self.args.refine && ui.is_interactive() {
            let delay = Duration::from_millis(config.inventory.debounce_ms);
            let catalog = config.locale.catalog();
            refine(ui, catalog, &inventory, self.initial_filter(), delay)?
        } else {
            self.initial_filter()
        };

        let matches = filter.apply(&inventory.vehicles);
        if matches.is_empty() {
            ui.warning("No vehicles match the current filters");
            return Ok(CommandResult::success());
        }

        if let Some(dealer) = &config.dealer_name {
            ui.show_header(dealer);
        }
        ui.message(&listing_table(&matches).render());
        ui.show_hint(&format!(
            "{} of {} vehicles. Order one with: showroom order --vehicle <ID>",
            matches.len(),
            inventory.vehicles.len()
        ));

        Ok(CommandResult::success())
    }
}

fn listing_table(vehicles: &[&Vehicle]) -> Table {
    let mut table =
        Table::new(&["ID", "Vehicle", "Year", "Body", "Fuel", "Price"]).align_right(5);
    for vehicle in vehicles {
        table.add_row(vec![
            vehicle.id.clone(),
            vehicle.display_name(),
            vehicle.year.to_string(),
            vehicle.body_type.clone().unwrap_or_default(),
            vehicle.fuel_type.clone().unwrap_or_default(),
            format_price(vehicle.price),
        ]);
    }
    table
}

/// Ask for each criterion and return the filter once the sidebar settles.
fn refine(
    ui: &mut dyn UserInterface,
    catalog: &Catalog,
    inventory: &Inventory,
    initial: ListingFilter,
    delay: Duration,
) -> Result<ListingFilter> {
    let (tx, rx) = mpsc::channel();
    let mut sidebar = FilterSidebar::new(&inventory.vehicles, delay, move |filter| {
        let _ = tx.send(filter);
    });
    sidebar.edit(|filter| *filter = initial);

    let options = sidebar.options().clone();
    let current = sidebar.filter().clone();

    let any = catalog.filter_any;

    let make = Choice::new("make", catalog.filter_make, any);
    let make = make.ask(ui, &options.makes, current.make.as_deref())?;
    sidebar.edit(|filter| filter.make = make);

    let body = Choice::new("body", catalog.filter_body_type, any);
    let body = body.ask(ui, &options.body_types, current.body_type.as_deref())?;
    sidebar.edit(|filter| filter.body_type = body);

    let fuel = Choice::new("fuel", catalog.filter_fuel, any);
    let fuel = fuel.ask(ui, &options.fuel_types, current.fuel_type.as_deref())?;
    sidebar.edit(|filter| filter.fuel_type = fuel);

    let mut question = Prompt::input("max_price", catalog.filter_max_price);
    if let Some(max) = current.max_price {
        question = question.with_default(max.to_string());
    }
    let answer = ui.prompt(&question)?.as_string();
    let max_price = parse_price(&answer)?;
    sidebar.edit(|filter| filter.max_price = max_price);

    Ok(settled(&rx, sidebar.filter(), delay))
}

/// One select-from-inventory criterion with an "any" escape.
struct Choice<'a> {
    key: &'a str,
    question: &'a str,
    any_label: &'a str,
}

impl<'a> Choice<'a> {
    fn new(key: &'a str, question: &'a str, any_label: &'a str) -> Self {
        Self {
            key,
            question,
            any_label,
        }
    }

    fn ask(
        &self,
        ui: &mut dyn UserInterface,
        values: &[String],
        current: Option<&str>,
    ) -> Result<Option<String>> {
        if values.is_empty() {
            return Ok(current.map(str::to_string));
        }

        let mut options = vec![PromptOption::new(self.any_label, ANY)];
        options.extend(values.iter().map(|v| PromptOption::new(v.clone(), v.clone())));
        let prompt = Prompt::select(self.key, self.question, options)
            .with_default(current.unwrap_or(ANY));

        let answer = ui.prompt(&prompt)?.as_string();
        Ok((answer != ANY).then_some(answer))
    }
}

fn parse_price(answer: &str) -> Result<Option<u64>> {
    let trimmed = answer.trim().replace(',', "");
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ShowroomError::InvalidInput {
            field: "max_price".to_string(),
            message: format!("'{}' is not a whole number", answer.trim()),
        })
}

/// Wait for the debounced emission matching the final edit.
///
/// Falls back to `last` if the worker has not caught up in time.
fn settled(
    rx: &mpsc::Receiver<ListingFilter>,
    last: &ListingFilter,
    delay: Duration,
) -> ListingFilter {
    let deadline = Instant::now() + delay * 4;
    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(remaining) {
            Ok(filter) if &filter == last => return filter,
            Ok(stale) => debug!("Skipping stale filter emission: {:?}", stale),
            Err(_) => break,
        }
    }
    last.clone()
}
