//! Logger module
//!
//! Console output for the server: startup/shutdown notices on stdout,
//! one access log line per request, errors and warnings on stderr.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;

/// Startup announcement: port, browsable URL, stop instruction.
pub fn log_server_start(config: &Config) {
    let port = config.server.port;
    println!("Starting HTTP server on port {port}...");
    println!("Open http://localhost:{port} in your browser");
    println!("Press Ctrl+C to stop the server");
}

/// Shutdown notice, printed after the accept loop exits.
pub fn log_server_stopped() {
    println!("\nServer stopped.");
}

/// Default access log sink: print the formatted line to stdout.
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_line());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
