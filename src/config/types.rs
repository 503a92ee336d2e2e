// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
}

/// Server bind configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

/// File serving configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FilesConfig {
    /// Root directory requests resolve against
    pub root: String,
    /// Files tried in order when a directory is requested
    pub index_files: Vec<String>,
    /// Generate an HTML listing when a directory has no index file
    pub directory_listing: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
            directory_listing: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { access_log: true }
    }
}

/// HTTP response configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub server_name: String,
    /// Extension -> Content-Type map applied on top of the detected type.
    /// A matching entry is appended as a second Content-Type header; the
    /// detected one is kept, matching the reference server exactly.
    pub mime_overrides: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            server_name: "servedir/0.1".to_string(),
            mime_overrides: default_mime_overrides(),
        }
    }
}

impl HttpConfig {
    /// Look up the configured Content-Type override for a request path.
    ///
    /// Matches on the path's trailing extension, case-sensitive. Paths
    /// without an extension (including directory paths) never match.
    pub fn override_for_path(&self, path: &str) -> Option<&str> {
        let ext = std::path::Path::new(path).extension()?.to_str()?;
        self.mime_overrides.get(ext).map(String::as_str)
    }
}

fn default_mime_overrides() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("css".to_string(), "text/css; charset=utf-8".to_string());
    map.insert(
        "js".to_string(),
        "application/javascript; charset=utf-8".to_string(),
    );
    map.insert("html".to_string(), "text/html; charset=utf-8".to_string());
    map
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive_timeout: 75,
            read_timeout: 30,
            write_timeout: 30,
            max_connections: None,
        }
    }
}
