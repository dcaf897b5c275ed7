//! CLI argument parsing for the `diverga` binary.
//!
//! CLI flags override every other configuration source.

use clap::{Parser, Subcommand};

/// Diverga
///
/// Bilingual fuzzy search over the research agent catalog, plus a demo
/// assistant endpoint.
#[derive(Parser, Debug)]
#[command(name = "diverga")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/diverga/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Start {
        /// Override HTTP port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override bind host
        #[arg(long)]
        host: Option<String>,
    },

    /// Search the catalog from the terminal
    Search {
        /// Search query
        query: String,

        /// Result language (en, ko)
        #[arg(long, default_value = "en")]
        locale: String,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Restrict to one document type (agent, doc, workflow)
        #[arg(short = 't', long = "type")]
        doc_type: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List research agents
    Agents {
        /// Display language (en, ko)
        #[arg(long, default_value = "en")]
        locale: String,

        /// Category slug or letter (e.g. "design" or "C")
        #[arg(long)]
        category: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_start_with_port() {
        let cli = Cli::parse_from(["diverga", "start", "-p", "8080"]);
        match cli.command {
            Commands::Start { port, host } => {
                assert_eq!(port, Some(8080));
                assert!(host.is_none());
            }
            _ => panic!("Expected Start command"),
        }
    }

    #[test]
    fn test_cli_start_with_host() {
        let cli = Cli::parse_from(["diverga", "start", "--host", "127.0.0.1"]);
        match cli.command {
            Commands::Start { host, .. } => assert_eq!(host.as_deref(), Some("127.0.0.1")),
            _ => panic!("Expected Start command"),
        }
    }

    #[test]
    fn test_cli_search_defaults() {
        let cli = Cli::parse_from(["diverga", "search", "meta-analysis"]);
        match cli.command {
            Commands::Search {
                query,
                locale,
                limit,
                doc_type,
                json,
            } => {
                assert_eq!(query, "meta-analysis");
                assert_eq!(locale, "en");
                assert!(limit.is_none());
                assert!(doc_type.is_none());
                assert!(!json);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_search_with_options() {
        let cli = Cli::parse_from([
            "diverga", "search", "메타분석", "--locale", "ko", "-n", "3", "--type", "agent",
            "--json",
        ]);
        match cli.command {
            Commands::Search {
                locale,
                limit,
                doc_type,
                json,
                ..
            } => {
                assert_eq!(locale, "ko");
                assert_eq!(limit, Some(3));
                assert_eq!(doc_type.as_deref(), Some("agent"));
                assert!(json);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_agents() {
        let cli = Cli::parse_from(["diverga", "agents", "--category", "C"]);
        match cli.command {
            Commands::Agents { locale, category } => {
                assert_eq!(locale, "en");
                assert_eq!(category.as_deref(), Some("C"));
            }
            _ => panic!("Expected Agents command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from([
            "diverga",
            "config",
            "--config",
            "/path/to/config.toml",
            "-l",
            "debug",
        ]);
        assert!(matches!(cli.command, Commands::Config));
        assert_eq!(cli.config.as_deref(), Some("/path/to/config.toml"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
