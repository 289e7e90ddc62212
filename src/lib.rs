//! Static Asset Server Library

pub mod config;
pub mod http;
pub mod net;
pub mod serve;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
