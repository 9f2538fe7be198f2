//! HTTP route handlers for the translation web service.
//!
//! `/translate` and `/languages` return JSON; the index page is rendered
//! with an Askama template from the `templates` module.

mod languages;
mod pages;
mod translate;

pub use languages::languages;
pub use pages::index;
pub use translate::translate_text;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

/// Form data for translation.
#[derive(Deserialize)]
pub struct TranslateForm {
    /// Text to translate (source language is auto-detected)
    pub text: String,
    /// Target language code
    pub dest_language: String,
}

/// JSON error response carrying a status and a bare message.
///
/// Validation failures use 422 (matching the form-validation layer's own
/// rejections); provider failures use 500.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
