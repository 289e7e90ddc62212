//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::Path;

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use static_asset_server::config::ServerConfig;
use static_asset_server::http::HttpServer;

/// Build a fixture asset tree:
///
/// ```text
/// root/
///   public/index.html          SPA index
///   public/css/app.css         ordinary public asset
///   dist/bundle.js             plus .br and .gz siblings
///   secret.txt                 outside the public root
/// ```
pub fn fixture_tree() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("public/css")).unwrap();
    std::fs::create_dir_all(root.path().join("dist")).unwrap();

    std::fs::write(
        root.path().join("public/index.html"),
        "<html>spa index</html>",
    )
    .unwrap();
    std::fs::write(root.path().join("public/css/app.css"), "body{margin:0}").unwrap();
    std::fs::write(root.path().join("dist/bundle.js"), "console.log('plain')").unwrap();
    std::fs::write(root.path().join("dist/bundle.js.br"), "brotli-variant-bytes").unwrap();
    std::fs::write(root.path().join("dist/bundle.js.gz"), "gzip-variant-bytes").unwrap();
    std::fs::write(root.path().join("secret.txt"), "not reachable via /").unwrap();

    root
}

/// Start a server over the fixture tree on an ephemeral port.
pub async fn start_server(root: &Path) -> SocketAddr {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.assets.public_root = root.join("public");
    config.assets.dist_root = root.to_path_buf();

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(&config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Issue a raw HTTP/1.1 request, bypassing client-side URL normalization.
///
/// reqwest resolves `..` segments before the request leaves the client, so
/// traversal tests write the request line by hand.
#[allow(dead_code)]
pub async fn raw_get(addr: SocketAddr, path: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let text = String::from_utf8_lossy(&raw).into_owned();

    let status = text
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap();
    let body = text
        .split_once("\r\n\r\n")
        .map(|(_, body)| body.to_string())
        .unwrap_or_default();

    (status, body)
}
