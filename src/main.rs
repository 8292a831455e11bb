//! # Main Entry Point
//!
//! Initializes the knowledge-base action server:
//! - Domain: Configuration, Types, Errors
//! - Infrastructure: MySQL store, Dispatcher
//! - Application: Keyword matching, Answer lookup, Action registry
//! - Interface: Webhook server
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::application::handler::AnswerLookupHandler;
use crate::application::registry::ActionRegistry;
use crate::domain::config::AppConfig;
use crate::infrastructure::mysql::MySqlKnowledgeStore;
use crate::strings::logs;

/// Custom-action server answering user questions from the admin knowledge base.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: String,

    /// Override the listening port from the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let mut config = AppConfig::load(&args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // 2. Logging Setup
    let log_dir = Path::new(&config.logging.directory);
    if !log_dir.exists() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Clear previous session log
    let log_path = log_dir.join(&config.logging.file);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, &config.logging.file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn,tower_http=info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("{}", logs::STARTING);
    tracing::info!("{}", logs::config_loaded(&args.config));

    // 3. Knowledge Base
    let db = &config.database;
    tracing::info!("{}", logs::store_target(&db.host, db.port, &db.database));
    let store = Arc::new(MySqlKnowledgeStore::new(db));

    // 4. Actions
    let registry = ActionRegistry::new().with(Arc::new(AnswerLookupHandler::new(store)));
    let app = crate::interface::webhook::create_router(registry);

    // 5. Serve
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("{}", logs::listening(&addr));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Action server failed")?;

    tracing::info!("{}", logs::SHUTDOWN);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
        std::future::pending::<()>().await;
    }
}
