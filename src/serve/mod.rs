//! Static asset serving subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → path.rs (strip leading /, resolve . and .. segments)
//!     → public.rs   URL under /        → public root, SPA index fallback
//!       dist.rs     URL under /dist/   → working tree, pre-compressed variant
//!     → tower-http ServeFile (Content-Type, Range, conditional requests)
//! ```
//!
//! # Design Decisions
//! - Handlers never read file bytes themselves; ServeFile owns the IO and
//!   the error-to-status mapping
//! - No shared mutable state; each request resolves its own path

mod dist;
mod encoding;
mod path;
mod public;

pub use dist::dist_handler;
pub use encoding::PreferredEncoding;
pub use path::sanitize_request_path;
pub use public::public_handler;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use tower::util::ServiceExt;
use tower_http::services::ServeFile;

/// Delegate a resolved filesystem path to `ServeFile`.
///
/// ServeFile handles `Range` and `If-Modified-Since`, picks `Content-Type`
/// by extension, and maps IO errors to response statuses (404 for a missing
/// file, 500 otherwise).
async fn serve_file(path: PathBuf, request: Request<Body>) -> Response {
    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(infallible) => match infallible {},
    }
}
