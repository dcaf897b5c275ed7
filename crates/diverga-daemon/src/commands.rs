//! Command implementations for the `diverga` binary.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::signal;
use tracing::info;

use diverga_catalog::{agents_in, shared_catalog, AgentCategory};
use diverga_search::{FuzzySearcher, SearchConfig, SearchOptions};
use diverga_service::{build_router, run_server_with_shutdown, AppState};
use diverga_types::{DocType, Locale, SearchResult, Settings};

/// Load settings and apply the global `--log-level` override.
pub fn load_settings(config_path: Option<&str>, log_level: Option<&str>) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;
    if let Some(level) = log_level {
        settings.log_level = level.to_string();
    }
    Ok(settings)
}

fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

fn build_searcher(settings: &Settings) -> Result<FuzzySearcher> {
    FuzzySearcher::new(shared_catalog(), SearchConfig::from(&settings.search))
        .context("Invalid search configuration")
}

/// Start the HTTP server.
///
/// 1. Load configuration (defaults -> file -> env -> CLI)
/// 2. Build the catalog, searcher and assistant
/// 3. Serve until SIGINT/SIGTERM
pub async fn start_server(
    config_path: Option<&str>,
    port_override: Option<u16>,
    host_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<()> {
    let mut settings = load_settings(config_path, log_level_override)?;
    if let Some(port) = port_override {
        settings.http_port = port;
    }
    if let Some(host) = host_override {
        settings.http_host = host.to_string();
    }

    init_logging(&settings.log_level)?;

    info!("Diverga starting...");
    info!("  HTTP address: {}", settings.http_addr());
    info!("  Log level: {}", settings.log_level);

    let searcher = build_searcher(&settings)?;
    info!(documents = searcher.catalog().len(), "Catalog loaded");

    let assistant = diverga_assistant::from_settings(&settings.assistant)
        .context("Failed to configure assistant")?;

    let addr: SocketAddr = settings
        .http_addr()
        .parse()
        .context("Invalid HTTP address")?;

    let state = AppState::new(Arc::new(searcher), assistant);
    let router = build_router(state, &settings.cors_origins);

    run_server_with_shutdown(addr, router, shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Run a search against the embedded catalog and print the results.
pub fn run_search(
    config_path: Option<&str>,
    log_level: Option<&str>,
    query: &str,
    locale: &str,
    limit: Option<usize>,
    doc_type: Option<&str>,
    json: bool,
) -> Result<()> {
    let settings = load_settings(config_path, log_level)?;
    if log_level.is_some() {
        init_logging(&settings.log_level)?;
    }

    let locale = Locale::parse(locale).with_context(|| format!("Unknown locale: {}", locale))?;
    let doc_type = match doc_type {
        Some(raw) => Some(DocType::parse(raw).with_context(|| format!("Unknown type: {}", raw))?),
        None => None,
    };

    let searcher = build_searcher(&settings)?;
    let results = searcher.search_with(query, locale, SearchOptions { doc_type, limit });

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results for \"{}\"", query);
        return Ok(());
    }

    for result in &results {
        println!("{}", format_result_line(result));
    }
    println!("\n{} result(s)", results.len());
    Ok(())
}

fn format_result_line(result: &SearchResult) -> String {
    format!(
        "{:.3}  {:<8} {:<24} {}  {}",
        result.score, result.doc_type, result.id, result.title, result.href
    )
}

/// Print the agent registry, optionally narrowed to one category.
pub fn list_agents(locale: &str, category: Option<&str>) -> Result<()> {
    let locale = Locale::parse(locale).with_context(|| format!("Unknown locale: {}", locale))?;
    let category = match category {
        Some(raw) => match AgentCategory::parse(raw) {
            Some(c) => Some(c),
            None => bail!("Unknown category: {}", raw),
        },
        None => None,
    };

    let categories: Vec<AgentCategory> = match category {
        Some(c) => vec![c],
        None => AgentCategory::ALL.to_vec(),
    };

    for category in categories {
        println!(
            "[{}] {}",
            category.letter(),
            category.name().get(locale)
        );
        for agent in agents_in(category) {
            println!("  {:<4} {}", agent.id, agent.name.get(locale));
        }
    }
    Ok(())
}

/// Print the effective configuration. The API key is never printed.
pub fn show_config(config_path: Option<&str>, log_level: Option<&str>) -> Result<()> {
    let settings = load_settings(config_path, log_level)?;
    print!("{}", render_config(&settings)?);
    Ok(())
}

fn render_config(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to render configuration")
}
