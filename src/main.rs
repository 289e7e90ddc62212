//! Static Asset Server
//!
//! A static web asset server built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌─────────────────────────────────────────────────┐
//!                    │               STATIC ASSET SERVER               │
//!                    │                                                 │
//!   Client Request   │  ┌──────────┐    ┌───────────────────────────┐  │
//!   ─────────────────┼─▶│   http   │───▶│           serve           │  │
//!                    │  │  server  │    │  /      → public (SPA)    │  │
//!                    │  └──────────┘    │  /dist/ → pre-compressed  │  │
//!                    │       ▲          └─────────────┬─────────────┘  │
//!                    │       │                        │                │
//!                    │  ┌──────────┐           ┌──────▼──────┐         │
//!                    │  │ net/tls  │           │ tower-http  │         │
//!                    │  │ optional │           │  ServeFile  │         │
//!                    │  └──────────┘           └─────────────┘         │
//!                    │                                                 │
//!                    │  cross-cutting: config, tracing, timeouts       │
//!                    └─────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use static_asset_server::config::{load_config, ServerConfig, TlsConfig};
use static_asset_server::http::HttpServer;
use static_asset_server::net::tls::load_tls_config;

/// Serve a SPA tree with pre-compressed /dist/ bundles over HTTP or HTTPS.
#[derive(Parser)]
#[command(name = "static-asset-server")]
struct Cli {
    /// TLS certificate file (PEM). Enables HTTPS together with KEY_FILE.
    #[arg(requires = "key_file")]
    cert_file: Option<PathBuf>,

    /// TLS private key file (PEM).
    #[arg(requires = "cert_file")]
    key_file: Option<PathBuf>,

    /// TOML configuration file (built-in defaults when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured listen port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "static_asset_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    // CLI overrides on top of the file/defaults.
    if let (Some(cert), Some(key)) = (&cli.cert_file, &cli.key_file) {
        config.listener.tls = Some(TlsConfig {
            cert_path: cert.display().to_string(),
            key_path: key.display().to_string(),
        });
    }
    if let Some(port) = cli.port {
        let addr: SocketAddr = config.listener.bind_address.parse()?;
        config.listener.bind_address = SocketAddr::new(addr.ip(), port).to_string();
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        public_root = %config.assets.public_root.display(),
        dist_root = %config.assets.dist_root.display(),
        tls = config.listener.tls.is_some(),
        "Configuration loaded"
    );

    let server = HttpServer::new(&config);

    match config.listener.tls.clone() {
        Some(tls) => {
            let rustls =
                load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path)).await?;
            let addr: SocketAddr = config.listener.bind_address.parse()?;
            server.run_tls(addr, rustls).await?;
        }
        None => {
            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            server.run(listener).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
