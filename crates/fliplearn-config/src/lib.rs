use std::env;

use serde::{Deserialize, Serialize};

use self::storage::StorageConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod storage;
pub mod translator;
pub mod ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub translator: TranslatorConfig,
    pub ui: UiConfig,

    /// Capacity of the UI -> app channel
    pub command_buffer: usize,
    /// Capacity of the app -> UI channel
    pub render_buffer: usize,
}

impl Config {
    pub fn new() -> Self {
        let command_buffer = env::var("COMMAND_BUFFER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        let render_buffer = env::var("RENDER_BUFFER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(128);

        Config {
            storage: StorageConfig::new(),
            translator: TranslatorConfig::new(),
            ui: UiConfig::default(),

            command_buffer,
            render_buffer,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "translator": { "to_lang": "de" }, "ui": { "prompt": "? " } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.translator.to_lang, "de");
        assert_eq!(config.translator.from_lang, "tr");
        assert_eq!(config.ui.prompt, "? ");
        assert_eq!(config.storage.key, "wordSets");
        assert!(config.command_buffer > 0);
    }
}
