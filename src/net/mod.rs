//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup
//!     → tls.rs (optional certificate/key loading)
//!     → HTTP or HTTPS listener bound by the server
//! ```
//!
//! # Design Decisions
//! - TLS is optional; a missing TLS block means plain HTTP
//! - Certificate problems are fatal at startup, never at request time

pub mod tls;
