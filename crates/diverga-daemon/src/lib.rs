//! Diverga binary library exports.
//!
//! - `cli`: command-line argument parsing with clap
//! - `commands`: command implementations (start, search, agents, config)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{list_agents, load_settings, run_search, show_config, start_server};
