use thiserror::Error;

/// Unified error type for text-translator-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - Translation operations (API requests, responses)
/// - Language detection
/// - Input validation
#[derive(Error, Debug)]
pub enum Error {
    /// Translation API request failed
    #[error("translation API request failed: {0}")]
    TranslationRequest(String),

    /// Invalid response from translation API
    #[error("invalid translation API response: {0}")]
    TranslationInvalidResponse(String),

    /// Language detection returned no usable result
    #[error("language detection failed: {0}")]
    DetectionFailed(String),

    /// Unsupported language for translation
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Nothing to translate
    #[error("text must not be empty")]
    EmptyText,
}

pub type Result<T> = std::result::Result<T, Error>;
