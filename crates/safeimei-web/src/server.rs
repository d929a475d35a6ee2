//! Static host setup

use crate::routes::build_routes;
use axum::Router;
use safeimei_core::Config;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the complete host with request tracing
pub fn build_app(config: &Config) -> Router {
    build_routes(&config.server.static_dir).layer(TraceLayer::new_for_http())
}

/// Bind to the configured address and serve until the process exits
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: Config) -> safeimei_core::Result<()> {
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        "Starting SafeIMEI web server on {} (serving {})",
        addr,
        config.server.static_dir.display()
    );

    axum::serve(listener, build_app(&config).into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use pretty_assertions::assert_eq;
    use std::fs;
    use tower::ServiceExt;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>SafeIMEI</html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        dir
    }

    fn config_for(dir: &tempfile::TempDir) -> Config {
        let mut config = Config::default();
        config.server.static_dir = dir.path().to_path_buf();
        config
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = site();
        let (status, body) = get(build_app(&config_for(&dir)), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_serves_assets() {
        let dir = site();
        let (status, body) = get(build_app(&config_for(&dir)), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = site();
        let (status, body) = get(build_app(&config_for(&dir)), "/officer/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>SafeIMEI</html>");
    }
}
