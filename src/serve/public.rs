//! SPA handler for the public asset tree.
//!
//! Serves files under the configured public root and falls back to the SPA
//! index for paths that do not exist on disk, so client-side routing can
//! take over.

use std::io::ErrorKind;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::server::AppState;
use crate::serve::path::sanitize_request_path;
use crate::serve::serve_file;

/// Handler for every path outside `/dist/`.
///
/// A missing file serves the SPA index with status 200. Other stat errors
/// fall through to the file service, which surfaces its own status.
pub async fn public_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let Some(relative) = sanitize_request_path(request.uri().path()) else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };
    let resolved = state.public_root.join(relative);

    let target = match tokio::fs::metadata(&resolved).await {
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %resolved.display(), "Asset missing, serving SPA index");
            state.public_root.join(&state.index_file)
        }
        // Directory requests (including "/") resolve to their index file.
        Ok(meta) if meta.is_dir() => resolved.join(&state.index_file),
        _ => resolved,
    };

    serve_file(target, request).await
}
