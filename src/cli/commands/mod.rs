//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations.

pub mod browse;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod order;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
