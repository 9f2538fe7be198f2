use std::sync::Arc;
use text_translator_core::{TextTranslator, Translator, TranslatorConfig};

/// Global application state.
///
/// One provider client created at startup and shared across all requests.
/// Everything else the handlers touch is read-only static data, so no
/// locking is needed.
pub struct AppState {
    pub translator: TextTranslator,
}

impl AppState {
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            translator: TextTranslator::new(config),
        }
    }

    /// Build state around a custom translator backend (used by tests)
    pub fn with_translator(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator: TextTranslator::with_translator(translator),
        }
    }
}
