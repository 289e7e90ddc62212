//! `Accept-Encoding` negotiation for pre-compressed assets.
//!
//! # Design Decisions
//! - Plain substring containment on the header value, no q-value parsing
//! - Brotli is checked before gzip; a client advertising both gets brotli

use axum::http::{header, HeaderMap};

/// Compressed representation preferred by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredEncoding {
    Brotli,
    Gzip,
    /// No supported encoding advertised; serve the file as-is.
    Identity,
}

impl PreferredEncoding {
    /// Negotiate from the request's `Accept-Encoding` header.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let accept = headers
            .get(header::ACCEPT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if accept.contains("br") {
            Self::Brotli
        } else if accept.contains("gzip") {
            Self::Gzip
        } else {
            Self::Identity
        }
    }

    /// Suffix of the pre-compressed sibling file, if any.
    pub fn file_suffix(self) -> Option<&'static str> {
        match self {
            Self::Brotli => Some(".br"),
            Self::Gzip => Some(".gz"),
            Self::Identity => None,
        }
    }

    /// `Content-Encoding` token for the response, if any.
    pub fn content_encoding(self) -> Option<&'static str> {
        match self {
            Self::Brotli => Some("br"),
            Self::Gzip => Some("gzip"),
            Self::Identity => None,
        }
    }
}
