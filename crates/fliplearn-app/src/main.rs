use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use fliplearn_config::Config;
use fliplearn_core::{FileKeyValueStore, SetStore};
use fliplearn_translator::{DeeplTranslator, Translator};
use tokio::signal;
use tokio::sync::RwLock;

pub mod controller;
pub mod events;
pub mod logging;
pub mod profile;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// How long queued commands get to finish after a shutdown request
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Flip&Learn: build word sets, translate them, study them as flip cards
#[derive(Parser, Debug)]
#[command(name = "fliplearn", version)]
struct Args {
    /// Directory holding saved sets and config.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Explicit config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the resolved config to the config path and exit
    #[arg(long)]
    write_config: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn build_translator(config: &Config) -> Option<Arc<dyn Translator>> {
    let cfg = &config.translator;
    if !cfg.is_usable() {
        tracing::warn!("Translator disabled or no API key, translation unavailable");
        return None;
    }
    if cfg.provider != "deepl" {
        tracing::warn!("Unknown translation provider '{}'", cfg.provider);
        return None;
    }

    let translator = match DeeplTranslator::with_timeout(
        cfg.api_key.clone(),
        cfg.api_url.clone(),
        Duration::from_secs(cfg.timeout_seconds),
    ) {
        Ok(translator) => translator,
        Err(e) => {
            tracing::error!("Failed to build translation client: {}", e);
            return None;
        }
    };

    let metadata = translator.metadata();
    if let Err(e) = translator.ensure_supported(&cfg.from_lang, &cfg.to_lang) {
        tracing::warn!("{} cannot translate this pair: {}", metadata.name, e);
        return None;
    }
    tracing::info!(
        "Translating {} -> {} with {}",
        cfg.from_lang,
        cfg.to_lang,
        metadata.name
    );
    Some(Arc::new(translator))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    logging::init_tracing(args.log_json)?;

    let config = profile::load_config(args.config.as_deref(), args.data_dir.as_deref())?;

    if args.write_config {
        let path = args
            .config
            .clone()
            .unwrap_or_else(|| profile::config_path(&config.storage.data_dir));
        profile::write_config(&path, &config)?;
        return Ok(());
    }

    tracing::info!("Data directory: {}", config.storage.data_dir.display());
    let store = SetStore::new(
        FileKeyValueStore::new(config.storage.data_dir.clone()),
        config.storage.key.clone(),
    );
    let translator = build_translator(&config);

    let config = Arc::new(RwLock::new(config));
    let state = AppState::new(Arc::clone(&config), store, translator);

    let controller = AppController::new(config).await;
    let mut tasks = controller.spawn_tasks(state).await;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("Task finished"),
                Some(Ok(Err(e))) => tracing::error!("Task failed: {e}"),
                Some(Err(e)) => tracing::error!("Task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    let drain = async {
        while let Some(result) = tasks.join_next().await {
            if let Ok(Err(e)) = result {
                tracing::warn!("Task ended with error during shutdown: {e}");
            }
        }
    };
    if tokio::time::timeout(SHUTDOWN_GRACE, drain).await.is_err() {
        tracing::warn!("Tasks still running after {:?}, aborting", SHUTDOWN_GRACE);
    }

    Ok(())
}
