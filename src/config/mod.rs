// Configuration module entry point
// Loads layered configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::{AccessLogFn, AppState};
pub use types::{Config, FilesConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration from the default `servedir.toml` (optional) plus
    /// `SERVEDIR_`-prefixed environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("servedir")
    }

    /// Load configuration from the specified file path (without extension).
    /// Missing files are fine; built-in defaults keep the server compatible
    /// with the reference behavior (0.0.0.0:8080 serving the working dir).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVEDIR"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("files.root", ".")?
            .set_default("files.directory_listing", true)?
            .set_default("logging.access_log", true)?
            .set_default("http.server_name", "servedir/0.1")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_from_defaults() {
        let cfg = Config::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let mut cfg = Config::default();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.socket_addr().is_err());
    }
}
