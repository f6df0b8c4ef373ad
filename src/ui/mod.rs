//! User interface
//!
//! Command-line argument definitions and helpers for turning parsed
//! arguments into configuration.

pub mod cli;

pub use cli::{Cli, cli_to_config};
