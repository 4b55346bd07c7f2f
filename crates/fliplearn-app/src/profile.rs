use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use fliplearn_config::Config;

const CONFIG_FILE: &str = "config.json";

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Default location of the config file for a data directory
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Resolve the config.
///
/// An explicit `path` must exist. Otherwise `config.json` in the data
/// directory is used when present, falling back to env defaults.
pub fn load_config(path: Option<&Path>, data_dir: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            read_config(path)?
        }
        None => {
            let defaults = Config::new();
            let dir = data_dir.unwrap_or(defaults.storage.data_dir.as_path());
            let candidate = config_path(dir);
            if candidate.exists() {
                tracing::info!("Loading config from {}", candidate.display());
                read_config(&candidate)?
            } else {
                tracing::debug!("No config file at {}, using defaults", candidate.display());
                defaults
            }
        }
    };

    if let Some(dir) = data_dir {
        config.storage.data_dir = dir.to_path_buf();
    }

    Ok(config)
}

/// Write `config` as pretty JSON, creating parent directories
pub fn write_config(path: &Path, config: &Config) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    tracing::info!("Wrote config to {}", path.display());
    Ok(())
}
