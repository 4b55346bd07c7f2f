use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_provider() -> String {
    "deepl".to_string()
}

fn default_from_lang() -> String {
    "tr".to_string()
}

fn default_to_lang() -> String {
    "en".to_string()
}

fn default_api_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

fn default_timeout_seconds() -> u64 {
    15
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let env_or = |name: &str, fallback: fn() -> String| {
            env::var(name).unwrap_or_else(|_| fallback())
        };

        let timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            from_lang: env_or("TRANSLATE_FROM", default_from_lang),
            to_lang: env_or("TRANSLATE_TO", default_to_lang),
            api_key: env::var("DEEPL_API_KEY").unwrap_or_default(),
            api_url: env_or("DEEPL_API_URL", default_api_url),
            timeout_seconds,
        }
    }

    /// Translation needs both the switch and a key
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
