//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so an empty config yields a runnable server.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the static asset server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Asset tree locations.
    pub assets: AssetConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Locations of the two served asset trees.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Root of the SPA tree served under `/`.
    pub public_root: PathBuf,

    /// File under `public_root` served when a requested path does not
    /// exist on disk (SPA fallback).
    pub index_file: PathBuf,

    /// Root of the tree served under `/dist/`. The URL prefix itself names
    /// a subdirectory of this root, so the default is the working directory.
    pub dist_root: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            public_root: PathBuf::from("public"),
            index_file: PathBuf::from("index.html"),
            dist_root: PathBuf::from("."),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// End-to-end request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_deserializes_to_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
        assert!(config.listener.tls.is_none());
        assert_eq!(config.assets.public_root, PathBuf::from("public"));
        assert_eq!(config.assets.index_file, PathBuf::from("index.html"));
        assert_eq!(config.assets.dist_root, PathBuf::from("."));
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:8443"

            [listener.tls]
            cert_path = "certs/server.pem"
            key_path = "certs/server.key"

            [assets]
            public_root = "www"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:8443");
        let tls = config.listener.tls.unwrap();
        assert_eq!(tls.cert_path, "certs/server.pem");
        assert_eq!(tls.key_path, "certs/server.key");
        assert_eq!(config.assets.public_root, PathBuf::from("www"));
        assert_eq!(config.assets.index_file, PathBuf::from("index.html"));
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
