mod traits;
mod google;

pub use traits::{Detection, Translator, TranslatorInfo};
pub use google::GoogleTranslator;

use crate::config::TranslatorConfig;
use std::sync::Arc;

/// Create a translator from configuration
pub fn create_translator(config: &TranslatorConfig) -> Arc<dyn Translator> {
    Arc::new(GoogleTranslator::new(config))
}
