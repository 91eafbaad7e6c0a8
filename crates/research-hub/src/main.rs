//! Research Hub MCP Server - Entry Point
//!
//! Serves JSON-RPC over stdio. Logs are written to stderr.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use research_hub::config::storage;
use research_hub::server::McpServer;
use research_hub::state::{FileStore, KeyValueStore, MemoryStore, PreferenceStore};
use research_hub::{Config, SummaryClient};

#[derive(Parser, Debug)]
#[command(name = "research-hub")]
#[command(about = "MCP server for browsing, comparing and summarizing research papers")]
#[command(version)]
struct Cli {
    /// API key for the chat-completion endpoint (summaries fall back without it)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API (e.g., http://localhost:11434/v1)
    #[arg(long, env = "OPENAI_BASE_URL")]
    api_base_url: Option<String>,

    /// Model identifier
    #[arg(long, env = "OPENAI_MODEL")]
    model: Option<String>,

    /// Preference store file
    #[arg(long, env = "RESEARCH_HUB_STORE", default_value = storage::DEFAULT_FILE)]
    store_path: PathBuf,

    /// Keep preferences in memory only
    #[arg(long)]
    in_memory: bool,

    /// Summary request timeout in seconds
    #[arg(long, default_value = "60")]
    request_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::new(cli.api_key.clone());
    if let Some(base_url) = &cli.api_base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(model) = &cli.model {
        config.model.clone_from(model);
    }
    config.request_timeout = Duration::from_secs(cli.request_timeout_secs);
    config.store_path = (!cli.in_memory).then(|| cli.store_path.clone());
    Ok(config)
}

fn open_store(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn KeyValueStore>> {
    Ok(match path {
        Some(path) => {
            let store = FileStore::open(path)?;
            tracing::info!(path = %store.path().display(), "Using preference file");
            Box::new(store)
        }
        None => {
            tracing::info!("Keeping preferences in memory");
            Box::new(MemoryStore::new())
        }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = build_config(&cli)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.model,
        has_api_key = config.has_api_key(),
        "Starting Research Hub MCP server"
    );
    if !config.has_api_key() {
        tracing::warn!("No API key configured; summaries will use the fallback result");
    }

    let preferences = PreferenceStore::new(open_store(config.store_path.as_ref())?);
    let client = SummaryClient::new(config)?;
    let server = McpServer::new(client, preferences);

    server.run_stdio().await
}
