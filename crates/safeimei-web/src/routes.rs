//! Route definitions for the static host

use axum::{Router, routing::get};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Build the router serving the bundle in `static_dir`
///
/// Any path that is not a file falls back to `index.html`; the page switch
/// happens in the browser.
pub fn build_routes(static_dir: &Path) -> Router {
    let index = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(static_dir).fallback(index))
}

/// Liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}
