//! Diverga
//!
//! Bilingual (English/Korean) fuzzy search over the research agent catalog,
//! served over HTTP together with a demo assistant endpoint.
//!
//! # Usage
//!
//! ```bash
//! diverga start [--port PORT] [--host HOST]
//! diverga search <QUERY> [--locale ko] [--limit N] [--type agent]
//! diverga agents [--locale ko] [--category design]
//! diverga config
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/diverga/config.toml)
//! 3. Environment variables (DIVERGA_*, OPENAI_API_KEY)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use diverga_daemon::{list_agents, run_search, show_config, start_server, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let log_level = cli.log_level.as_deref();

    match cli.command {
        Commands::Start { port, host } => {
            start_server(config, port, host.as_deref(), log_level).await?;
        }
        Commands::Search {
            query,
            locale,
            limit,
            doc_type,
            json,
        } => {
            run_search(
                config,
                log_level,
                &query,
                &locale,
                limit,
                doc_type.as_deref(),
                json,
            )?;
        }
        Commands::Agents { locale, category } => {
            list_agents(&locale, category.as_deref())?;
        }
        Commands::Config => {
            show_config(config, log_level)?;
        }
    }

    Ok(())
}
