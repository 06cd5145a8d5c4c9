//! Command-line interface for art-secretary.
//!
//! This module provides CLI commands for investigating Bandcamp pages and
//! inspecting the configuration.

mod commands;

pub use commands::{Cli, Commands, root_for_url, run_command};
