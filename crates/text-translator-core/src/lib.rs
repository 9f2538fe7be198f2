//! Text Translator Core Library
//!
//! This library provides the core functionality for the translation service:
//! - Source-language detection and translation via the provider backend
//! - The static table of supported languages
//! - The composed translation result returned to API clients

pub mod config;
pub mod error;
pub mod languages;
pub mod translator;

pub use config::{Lang, TranslatorConfig, DEFAULT_API_BASE};
pub use error::{Error, Result};
pub use languages::{display_name, is_supported, language_map, language_name, LANGUAGES, UNKNOWN_LANGUAGE};
pub use translator::{create_translator, Detection, GoogleTranslator, Translator, TranslatorInfo};

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// High-level translation service combining detection, translation, and
/// display-name lookup.
///
/// Holds a single shared provider client; safe to share across concurrent
/// requests since there is no mutable state.
#[derive(Clone)]
pub struct TextTranslator {
    translator: Arc<dyn Translator>,
}

/// Result of translating a piece of text.
///
/// Detected-language metadata comes from the provider; display names come
/// from the static table, defaulting to "Unknown" for unmapped codes.
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub source_language_name: &'static str,
    pub target_language: String,
    pub target_language_name: &'static str,
    pub confidence: f64,
}

impl TextTranslator {
    /// Create a new translation service with the given configuration
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            translator: create_translator(config),
        }
    }

    /// Create with a custom translator backend (used by tests)
    pub fn with_translator(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Detect the source language of `text`, then translate it into
    /// `target`. Any provider error propagates unchanged.
    pub async fn translate_text(&self, text: &str, target: &Lang) -> Result<Translation> {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        if !languages::is_supported(target.as_str()) {
            return Err(Error::UnsupportedLanguage(target.as_str().to_string()));
        }

        let detected = self.translator.detect(text).await?;
        let translated = self.translator.translate(text, target).await?;

        info!(
            "Translated {} -> {} ({} chars) with {}",
            detected.lang,
            target,
            text.len(),
            self.translator.name()
        );

        Ok(Translation {
            original_text: text.to_string(),
            translated_text: translated,
            source_language_name: languages::display_name(detected.lang.as_str()),
            source_language: detected.lang.0,
            target_language_name: languages::display_name(target.as_str()),
            target_language: target.as_str().to_string(),
            confidence: detected.confidence,
        })
    }

    pub fn translator_info(&self) -> TranslatorInfo {
        self.translator.info()
    }
}
