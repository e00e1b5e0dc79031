// --- File: backend/src/main.rs ---

use anyhow::Context;
use backend::config::AppConfig;
use backend::web_server::{run_server, AppState};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- Setup ---
    // 1. Load configuration (defaults, Config.toml, APP_* environment)
    let app_config = AppConfig::from_env().context("failed to load configuration")?;

    // 2. Initialize structured logging
    let level: LevelFilter = app_config
        .log
        .level
        .parse()
        .with_context(|| format!("invalid log level {:?}", app_config.log.level))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(level)
        .init();

    tracing::info!(
        "Configuration loaded successfully, full config: {:?}",
        app_config
    );

    if !app_config.static_files.index_path().is_file() {
        tracing::warn!(
            "Index document {} not found; the app shell will answer 500",
            app_config.static_files.index_path().display()
        );
    }

    // --- Run Server ---
    tracing::info!("Initializing server...");
    run_server(AppState { app_config })
        .await
        .context("server terminated with an error")?;

    Ok(())
}
