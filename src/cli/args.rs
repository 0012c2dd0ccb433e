//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::inventory::SortOrder;
use crate::locale::Locale;
use crate::wizard::PaymentMethod;

/// Showroom - browse a dealership's cars and place an order.
#[derive(Debug, Parser)]
#[command(name = "showroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .showroom/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Order a vehicle through the purchase wizard
    Order(OrderArgs),

    /// List vehicles in the inventory (default if no command specified)
    Browse(BrowseArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `order` command.
#[derive(Debug, Clone, clap::Args)]
pub struct OrderArgs {
    /// Inventory id of the vehicle, or a YAML/JSON file describing it
    #[arg(long)]
    pub vehicle: String,

    /// Inventory file (overrides inventory.path)
    #[arg(long)]
    pub inventory: Option<PathBuf>,

    /// Fix the payment method and skip that step: cash or finance
    #[arg(long, value_name = "METHOD")]
    pub payment: Option<PaymentMethod>,

    /// Display language: en or ar (overrides locale)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<Locale>,

    /// Lead endpoint URL (overrides submission.endpoint)
    #[arg(long, env = "SHOWROOM_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Directory for order documents (overrides export.directory)
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Answer prompts from SHOWROOM_PROMPT_* variables and defaults
    #[arg(long)]
    pub non_interactive: bool,
}

impl OrderArgs {
    /// Arguments for ordering `vehicle` with every option unset.
    pub fn for_vehicle(vehicle: impl Into<String>) -> Self {
        Self {
            vehicle: vehicle.into(),
            inventory: None,
            payment: None,
            lang: None,
            endpoint: None,
            export_dir: None,
            non_interactive: false,
        }
    }
}

/// Arguments for the `browse` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BrowseArgs {
    /// Inventory file (overrides inventory.path)
    #[arg(long)]
    pub inventory: Option<PathBuf>,

    /// Only this make
    #[arg(long)]
    pub make: Option<String>,

    /// Only this body type
    #[arg(long)]
    pub body: Option<String>,

    /// Only this fuel type
    #[arg(long)]
    pub fuel: Option<String>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Match make or model containing this text
    #[arg(long)]
    pub search: Option<String>,

    /// Ordering: featured, price, price-desc, year
    #[arg(long, default_value = "featured")]
    pub sort: SortOrder,

    /// Narrow the listing with prompts before showing it
    #[arg(long)]
    pub refine: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
