// Application state module
// Holds the loaded configuration and the injected access log sink

use std::sync::atomic::{AtomicBool, Ordering};

use crate::logger::{self, AccessLogEntry};

use super::types::Config;

/// Access log sink: called once per completed request.
pub type AccessLogFn = dyn Fn(&AccessLogEntry) + Send + Sync;

/// Shared application state, constructed once in the entry point and
/// passed to the server loop. The request path holds no other state;
/// handlers stay stateless and reentrant.
pub struct AppState {
    pub config: Config,

    // Cached flag for lock-free checks on the hot path
    pub cached_access_log: AtomicBool,

    access_log: Box<AccessLogFn>,
}

impl AppState {
    /// Create state with the default access log sink (one formatted line
    /// per request on stdout).
    pub fn new(config: Config) -> Self {
        Self::with_access_log(config, Box::new(|entry| logger::log_access(entry)))
    }

    /// Create state with a custom access log sink. Used by tests to
    /// capture log lines instead of printing them.
    pub fn with_access_log(config: Config, sink: Box<AccessLogFn>) -> Self {
        let access_log_enabled = config.logging.access_log;
        Self {
            config,
            cached_access_log: AtomicBool::new(access_log_enabled),
            access_log: sink,
        }
    }

    /// Emit one access log line, if access logging is enabled.
    pub fn log_access(&self, entry: &AccessLogEntry) {
        if self.cached_access_log.load(Ordering::Relaxed) {
            (self.access_log)(entry);
        }
    }
}
