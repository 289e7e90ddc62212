//! Request-path sanitisation.
//!
//! # Responsibilities
//! - Percent-decode the URL path so encoded names reach the filesystem
//! - Strip the leading `/` from the URL path
//! - Resolve `.` and `..` segments lexically, without touching the filesystem
//! - Guarantee the result never climbs above the root it is joined onto
//!
//! # Design Decisions
//! - Decoding happens before the segment walk, so an encoded `%2e%2e` or
//!   `%2f` is normalised like its literal form instead of landing on disk
//! - A `..` at the top level is dropped rather than rejected, so a traversal
//!   attempt degrades to a path inside the root (and usually a 404)
//! - Segments that can never name a file (invalid UTF-8 after decoding,
//!   embedded NUL, backslash) are rejected outright

use std::path::PathBuf;

use percent_encoding::percent_decode_str;

/// Normalise an HTTP request path into a relative filesystem path.
///
/// The result is always relative and free of `.`/`..` components, safe to
/// join onto a served root. An empty result means the request targeted the
/// root itself. Returns `None` for paths that cannot name a file on disk.
pub fn sanitize_request_path(path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    let mut clean = PathBuf::new();

    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // Popping an already-empty path is a no-op, so the walk can
                // never leave the root.
                clean.pop();
            }
            s if s.contains('\0') || s.contains('\\') => return None,
            s => clean.push(s),
        }
    }

    Some(clean)
}
