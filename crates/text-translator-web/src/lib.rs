//! Text Translator Web - HTTP front end for the translation service.
//!
//! Exposes three endpoints: `POST /translate`, `GET /languages`, and the
//! index page at `/`. Router construction lives here so integration tests
//! can drive the service without binding a socket.

pub mod routes;
pub mod state;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/languages", get(routes::languages))
        .route("/translate", post(routes::translate_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
