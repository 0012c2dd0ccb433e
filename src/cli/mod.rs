//! Command-line interface for showroom.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{BrowseArgs, Cli, Commands, CompletionsArgs, ConfigArgs, OrderArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
