//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the instaname binary.

mod commands;
mod generate;
mod session;

pub use commands::{Cli, Commands};
pub use generate::handle_generate_command;
pub use session::run_session;
