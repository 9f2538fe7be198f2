//! Language listing route.

use axum::response::Json;
use serde_json::Value;
use text_translator_core::language_map;

/// Return the full static mapping of language code to display name.
pub async fn languages() -> Json<Value> {
    Json(Value::Object(language_map()))
}
