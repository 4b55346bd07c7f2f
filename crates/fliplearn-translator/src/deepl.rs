use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

#[derive(Clone)]
pub struct DeeplTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<String>,
}

impl DeeplTranslator {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    pub fn with_timeout(
        api_key: String,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }

    async fn post(&self, body: &TranslateRequest<'_>) -> Result<serde_json::Value, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {}", e)))
    }
}

/// Pull `translations[0]` out of a DeepL response body
fn first_translation(json: &serde_json::Value) -> Result<(String, Option<String>), TranslateError> {
    let first = json["translations"]
        .get(0)
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

    let text = first["text"]
        .as_str()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

    let detected = first["detected_source_language"]
        .as_str()
        .map(|lang| lang.to_lowercase());

    Ok((text.to_string(), detected))
}

#[async_trait]
impl Translator for DeeplTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranslateError::EmptyText);
        }

        let body = TranslateRequest {
            text: [text],
            target_lang: to.to_uppercase(),
            source_lang: (!from.is_empty()).then(|| from.to_uppercase()),
        };

        tracing::debug!("Requesting DeepL translation {} -> {}", from, to);
        let json = self.post(&body).await?;
        let (translated, detected_source) = first_translation(&json)?;

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: "deepl".to_string(),
            detected_source,
        })
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        vec![
            ("tr".to_string(), "en".to_string()),
            ("tr".to_string(), "de".to_string()),
            ("tr".to_string(), "fr".to_string()),
            ("tr".to_string(), "es".to_string()),
            ("en".to_string(), "tr".to_string()),
        ]
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
            free_tier_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fliplearn_types::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_first_translation_reads_text_and_source() {
        let body = json!({
            "translations": [{ "detected_source_language": "TR", "text": "apple" }]
        });

        let (text, detected) = first_translation(&body).unwrap();
        assert_eq!(text, "apple");
        assert_eq!(detected.as_deref(), Some("tr"));
    }

    #[test]
    fn test_first_translation_rejects_malformed_bodies() {
        for body in [
            json!({}),
            json!({ "translations": [] }),
            json!({ "translations": [{ "text": "" }] }),
            json!({ "translations": [{ "text": 42 }] }),
        ] {
            let err = first_translation(&body).unwrap_err();
            assert!(matches!(err, TranslateError::ApiError(_)), "{body}");
            assert_eq!(err.kind(), ErrorKind::TranslationFailed);
        }
    }

    #[test]
    fn test_request_omits_empty_source_lang() {
        let body = TranslateRequest {
            text: ["elma"],
            target_lang: "EN".to_string(),
            source_lang: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, json!({ "text": ["elma"], "target_lang": "EN" }));
    }

    #[test]
    fn test_configured_pair_is_checked() {
        let translator = DeeplTranslator::new("key".to_string(), "http://127.0.0.1:9".to_string());

        assert!(translator.ensure_supported("tr", "en").is_ok());
        assert!(translator.ensure_supported("TR", "DE").is_ok());
        // Auto-detected source
        assert!(translator.ensure_supported("", "tr").is_ok());

        let err = translator.ensure_supported("tr", "ja").unwrap_err();
        let TranslateError::UnsupportedLanguagePair { ref from, ref to } = err else {
            panic!("expected unsupported pair, got {err:?}");
        };
        assert_eq!((from.as_str(), to.as_str()), ("tr", "ja"));
        assert_eq!(err.kind(), ErrorKind::TranslationFailed);
    }

    #[tokio::test]
    async fn test_blank_text_fails_before_request() {
        let translator = DeeplTranslator::new("key".to_string(), "http://127.0.0.1:9".to_string());

        let err = translator
            .translate("   ", "tr".to_string(), "en".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, TranslateError::EmptyText));
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }

    #[tokio::test]
    async fn test_missing_key_is_authentication_error() {
        let translator = DeeplTranslator::new(String::new(), "http://127.0.0.1:9".to_string());

        let err = translator
            .translate("elma", "tr".to_string(), "en".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, TranslateError::AuthenticationError));
    }
}
