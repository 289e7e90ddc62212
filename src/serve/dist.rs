//! Content-negotiated handler for pre-compressed bundles.
//!
//! Serves the `/dist/` tree, preferring a `.br` or `.gz` sibling of the
//! requested file when the client advertises support. The compressed
//! variants are built ahead of time; nothing is compressed per request.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::server::AppState;
use crate::serve::encoding::PreferredEncoding;
use crate::serve::path::sanitize_request_path;
use crate::serve::serve_file;

/// Handler for paths under `/dist/`.
///
/// The full URL path (including the `dist/` segment) resolves against the
/// dist root, a distinct tree from the public root. There is no fallback:
/// a missing `.br`/`.gz` variant is a 404 for the suffixed path, never a
/// retry against the original.
pub async fn dist_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let Some(relative) = sanitize_request_path(request.uri().path()) else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };
    let mut resolved = state.dist_root.join(relative);

    let encoding = PreferredEncoding::from_headers(request.headers());
    if let Some(suffix) = encoding.file_suffix() {
        // The variant is a sibling file, so the suffix lands on the file
        // name rather than replacing the extension.
        let mut file_name = resolved.into_os_string();
        file_name.push(suffix);
        resolved = file_name.into();
    }

    let mut response = serve_file(resolved, request).await;

    // ServeFile cannot know the real type behind a .br/.gz name; the dist
    // tree holds JavaScript bundles, so the negotiated branches pin the
    // type for every asset under /dist/, JavaScript or not.
    if response.status().is_success() {
        if let Some(token) = encoding.content_encoding() {
            let headers = response.headers_mut();
            headers.insert(header::CONTENT_ENCODING, HeaderValue::from_static(token));
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/javascript"),
            );
        }
    }

    response
}
