//! servedir - a static file HTTP server.
//!
//! Serves files from a configured root directory over HTTP/1.1, with
//! extension-based MIME detection, configurable `Content-Type` overrides,
//! conditional and range request support, and per-request access logging.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
