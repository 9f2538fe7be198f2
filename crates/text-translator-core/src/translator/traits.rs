use async_trait::async_trait;
use crate::config::Lang;
use crate::error::Result;

/// Information about a translator backend
#[derive(Debug, Clone)]
pub struct TranslatorInfo {
    /// Human-readable name
    pub name: &'static str,
    /// Whether this translator requires an API key
    pub requires_api_key: bool,
    /// Whether this translator supports auto-detection of source language
    pub supports_auto_detect: bool,
}

/// Source-language detection result.
///
/// The confidence score is provider-defined, nominally in [0, 1]; it is
/// passed through without further interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub lang: Lang,
    pub confidence: f64,
}

/// Trait for translation backends
#[async_trait]
pub trait Translator: Send + Sync {
    /// Get information about this translator
    fn info(&self) -> TranslatorInfo;

    /// Get the translator name (convenience method)
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Detect the language of a piece of text
    async fn detect(&self, text: &str) -> Result<Detection>;

    /// Translate text into the target language, auto-detecting the source
    async fn translate(&self, text: &str, target: &Lang) -> Result<String>;
}
