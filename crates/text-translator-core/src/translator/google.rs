use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{Lang, TranslatorConfig};
use crate::error::{Error, Result};
use super::traits::{Detection, Translator, TranslatorInfo};

/// Pivot target used when only detection metadata is wanted.
const DETECT_PIVOT_TARGET: &str = "en";

/// Client for the public Google translate web endpoint.
///
/// Issues form-encoded POSTs to `/translate_a/single?client=gtx&dt=t&dj=1`
/// with `sl=auto`, so every response carries the detected source language
/// and a confidence score alongside the translated sentences. One request
/// per operation; failures are returned to the caller as-is.
pub struct GoogleTranslator {
    client: Client,
    /// Base URL for the endpoint (e.g., "https://translate.googleapis.com")
    pub api_base: String,
}

#[derive(Debug, Deserialize)]
struct Sentence {
    trans: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    sentences: Vec<Sentence>,
    /// Detected source language code
    src: Option<String>,
    /// Detection confidence; the endpoint omits it for some inputs
    #[serde(default = "default_confidence")]
    confidence: f64,
}

const fn default_confidence() -> f64 {
    1.0
}

impl GoogleTranslator {
    /// Create a new translator from configuration.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created, which should only happen
    /// in extreme circumstances (e.g., TLS backend unavailable on the system).
    #[allow(clippy::expect_used)]
    pub fn new(config: &TranslatorConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: config.api_base.clone(),
        }
    }

    /// Single request to the endpoint. `sl=auto` always; the target decides
    /// whether the sentences are useful or only the detection metadata is.
    async fn request(&self, text: &str, target: &str) -> Result<TranslateResponse> {
        let url = format!(
            "{}/translate_a/single?client=gtx&dt=t&dj=1",
            self.api_base.trim_end_matches('/')
        );
        let params = [("sl", "auto"), ("tl", target), ("q", text)];

        debug!("Translation request to {} (target: {})", url, target);

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::TranslationRequest(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("API error: {} - {}", status, body);
            return Err(Error::TranslationRequest(format!("HTTP {status}: {body}")));
        }

        response
            .json::<TranslateResponse>()
            .await
            .map_err(|e| Error::TranslationInvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "Google Translate",
            requires_api_key: false,
            supports_auto_detect: true,
        }
    }

    async fn detect(&self, text: &str) -> Result<Detection> {
        let response = self.request(text, DETECT_PIVOT_TARGET).await?;

        let src = response
            .src
            .ok_or_else(|| Error::DetectionFailed("no source language in response".to_string()))?;

        Ok(Detection {
            lang: Lang::new(src),
            confidence: response.confidence,
        })
    }

    async fn translate(&self, text: &str, target: &Lang) -> Result<String> {
        let response = self.request(text, target.as_str()).await?;

        if response.sentences.is_empty() {
            return Err(Error::TranslationInvalidResponse(
                "no sentences in response".to_string(),
            ));
        }

        let mut translated = String::new();
        for sentence in response.sentences {
            translated.push_str(&sentence.trans);
        }

        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn translator_for(server: &MockServer) -> GoogleTranslator {
        GoogleTranslator::new(&TranslatorConfig::new(server.uri()))
    }

    fn endpoint_response(sentences: &[&str], src: &str, confidence: f64) -> serde_json::Value {
        serde_json::json!({
            "sentences": sentences.iter()
                .map(|s| serde_json::json!({"trans": s, "orig": ""}))
                .collect::<Vec<_>>(),
            "src": src,
            "confidence": confidence,
        })
    }

    #[tokio::test]
    async fn test_translate_joins_sentences() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate_a/single"))
            .and(body_string_contains("tl=fr"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(endpoint_response(&["Bonjour. ", "Au revoir."], "en", 0.98)),
            )
            .mount(&server)
            .await;

        let translator = translator_for(&server);
        let result = translator
            .translate("Hello. Goodbye.", &Lang::new("fr"))
            .await
            .expect("translation should succeed");

        assert_eq!(result, "Bonjour. Au revoir.");
    }

    #[tokio::test]
    async fn test_detect_reads_src_and_confidence() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate_a/single"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(endpoint_response(&["hello"], "es", 0.75)),
            )
            .mount(&server)
            .await;

        let translator = translator_for(&server);
        let detection = translator.detect("hola").await.expect("detect should succeed");

        assert_eq!(detection.lang.as_str(), "es");
        assert!((detection.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_detect_defaults_confidence_when_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sentences": [{"trans": "hi", "orig": "hi"}],
                "src": "en",
            })))
            .mount(&server)
            .await;

        let translator = translator_for(&server);
        let detection = translator.detect("hi").await.expect("detect should succeed");

        assert!((detection.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_http_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let translator = translator_for(&server);
        let result = translator.translate("hello", &Lang::new("fr")).await;

        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("503"), "got: {err}");
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let translator = translator_for(&server);
        let result = translator.translate("hello", &Lang::new("fr")).await;

        assert!(matches!(result, Err(Error::TranslationInvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_empty_sentences_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate_a/single"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(endpoint_response(&[], "en", 1.0)),
            )
            .mount(&server)
            .await;

        let translator = translator_for(&server);
        let result = translator.translate("hello", &Lang::new("fr")).await;

        assert!(matches!(result, Err(Error::TranslationInvalidResponse(_))));
    }
}
