use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_key() -> String {
    "wordSets".to_string()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("fliplearn"))
        .unwrap_or_else(|| PathBuf::from(".fliplearn"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one file per storage key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Key under which the word-set document is stored
    #[serde(default = "default_key")]
    pub key: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("FLIPLEARN_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let key = env::var("FLIPLEARN_STORAGE_KEY").unwrap_or_else(|_| default_key());

        Self { data_dir, key }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new()
    }
}
