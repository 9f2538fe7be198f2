//! Translation route - detect, translate, and compose the JSON result.

use axum::extract::{Form, State};
use axum::response::Json;
use std::sync::Arc;
use text_translator_core::{is_supported, Lang, Translation};
use tracing::error;

use super::{ApiError, TranslateForm};
use crate::state::AppState;

/// Translate text from an auto-detected source language to the requested
/// target language.
///
/// Input is validated against the known language set before the provider
/// is contacted; a bad target or empty text never triggers an external
/// call. Any provider error is reported as a 500 carrying the raw message.
pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TranslateForm>,
) -> Result<Json<Translation>, ApiError> {
    if form.text.trim().is_empty() {
        return Err(ApiError::unprocessable("text must not be empty"));
    }
    if !is_supported(&form.dest_language) {
        return Err(ApiError::unprocessable(format!(
            "unknown target language: {}",
            form.dest_language
        )));
    }

    let target = Lang::new(form.dest_language);
    match state.translator.translate_text(&form.text, &target).await {
        Ok(translation) => Ok(Json(translation)),
        Err(e) => {
            error!("Translation to {} failed: {}", target, e);
            Err(ApiError::internal(e.to_string()))
        }
    }
}
