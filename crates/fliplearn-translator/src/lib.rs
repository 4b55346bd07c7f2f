use fliplearn_types::ErrorKind;

pub mod deepl;

pub use deepl::DeeplTranslator;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language.
    /// An empty `from` lets the provider detect the source language.
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Get supported language pairs
    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;

    /// Check a configured pair against [`Self::supported_languages`].
    /// An empty `from` only needs some pair ending in `to`.
    fn ensure_supported(&self, from: &str, to: &str) -> Result<(), TranslateError> {
        let supported = self.supported_languages().iter().any(|(src, dst)| {
            dst.eq_ignore_ascii_case(to) && (from.is_empty() || src.eq_ignore_ascii_case(from))
        });
        if supported {
            Ok(())
        } else {
            Err(TranslateError::UnsupportedLanguagePair {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
    pub detected_source: Option<LanguageCode>,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Nothing to translate")]
    EmptyText,
}

impl TranslateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::EmptyText => ErrorKind::EmptyInput,
            _ => ErrorKind::TranslationFailed,
        }
    }
}
