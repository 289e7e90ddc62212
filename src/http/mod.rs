//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, route dispatch on path prefix)
//!     → serve::dist    /dist/ prefix → pre-compressed bundle tree
//!       serve::public  everything else → SPA tree with index fallback
//!     → Send to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
