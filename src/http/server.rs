//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the two asset handlers
//! - Wire up middleware (tracing, request timeout)
//! - Serve plain HTTP or HTTPS depending on listener config
//!
//! # Design Decisions
//! - Route registration replaces prefix dispatch: /dist/ routes are
//!   registered alongside the SPA catch-all, axum picks the more specific
//! - Handlers are registered with any(); method policing (405 + Allow for
//!   non-GET/HEAD) is the file service's

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::any, Router};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::serve::{dist_handler, public_handler};

/// Application state injected into handlers.
///
/// Three immutable paths cloned per request; no locks, no shared mutable
/// state between requests.
#[derive(Clone)]
pub struct AppState {
    pub public_root: PathBuf,
    pub index_file: PathBuf,
    pub dist_root: PathBuf,
}

/// HTTP server for the static asset trees.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server from the given configuration.
    pub fn new(config: &ServerConfig) -> Self {
        let state = AppState {
            public_root: config.assets.public_root.clone(),
            index_file: config.assets.index_file.clone(),
            dist_root: config.assets.dist_root.clone(),
        };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/dist", any(redirect_to_dist_dir))
            .route("/dist/", any(dist_handler))
            .route("/dist/{*path}", any(dist_handler))
            .route("/", any(public_handler))
            .route("/{*path}", any(public_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over TLS on the given address.
    pub async fn run_tls(self, addr: SocketAddr, tls: RustlsConfig) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, "HTTPS server starting");

        axum_server::bind_rustls(addr, tls)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

/// Redirect the bare `/dist` to its directory form, like a trailing-slash
/// mount would. Without this the SPA catch-all would swallow the request.
async fn redirect_to_dist_dir() -> impl IntoResponse {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, "/dist/")],
    )
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    fn fixture_config() -> (tempfile::TempDir, ServerConfig) {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("public")).unwrap();
        std::fs::create_dir_all(root.path().join("dist")).unwrap();
        std::fs::write(root.path().join("public/index.html"), "<html>spa</html>").unwrap();
        std::fs::write(root.path().join("dist/app.js"), "plain js").unwrap();
        std::fs::write(root.path().join("dist/app.js.br"), "brotli js").unwrap();

        let mut config = ServerConfig::default();
        config.assets.public_root = root.path().join("public");
        config.assets.dist_root = root.path().to_path_buf();
        (root, config)
    }

    #[tokio::test]
    async fn test_root_serves_spa_index() {
        let (_root, config) = fixture_config();
        let router = HttpServer::new(&config).router;

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"<html>spa</html>");
    }

    #[tokio::test]
    async fn test_bare_dist_redirects_to_directory_form() {
        let (_root, config) = fixture_config();
        let router = HttpServer::new(&config).router;

        let response = router
            .oneshot(Request::builder().uri("/dist").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/dist/");
    }

    #[tokio::test]
    async fn test_dist_route_dispatches_to_negotiated_handler() {
        let (_root, config) = fixture_config();
        let router = HttpServer::new(&config).router;

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/dist/app.js")
                    .header(header::ACCEPT_ENCODING, "br")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_ENCODING).unwrap(),
            "br"
        );
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"brotli js");
    }
}
