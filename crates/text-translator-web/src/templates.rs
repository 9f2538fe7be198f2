//! Askama templates for the web UI.
//!
//! The language dropdown is rendered from the static language table, so the
//! page and the `/languages` endpoint can never disagree.

use askama::Template;
use askama_web::WebTemplate;
use text_translator_core::LANGUAGES;

/// Landing page with the translation form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Language options for the target dropdown (code, display name)
    pub languages: &'static [(&'static str, &'static str)],
}

impl IndexTemplate {
    pub const fn new() -> Self {
        Self {
            languages: LANGUAGES,
        }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}
