//! Access log formatting
//!
//! One line per completed request, in the shape the reference server prints:
//!
//! `[<date> <time>] <client> - "<request line>" <status>`

use chrono::Local;

/// Timestamp layout, e.g. `29/Aug/2026 14:03:55`
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y %H:%M:%S";

/// Everything needed to render one access log line
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client socket address
    pub remote_addr: String,
    /// Time the entry was created (local time)
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string, without the leading `?`
    pub query: Option<String>,
    /// HTTP version ("1.0", "1.1", "2")
    pub http_version: String,
    /// Response status code
    pub status: u16,
}

impl AccessLogEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(remote_addr: String, method: &str, path: &str) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method: method.to_string(),
            path: path.to_string(),
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
        }
    }

    /// Reconstruct the request line, e.g. `GET /style.css?v=2 HTTP/1.1`
    pub fn request_line(&self) -> String {
        let uri = self.query.as_ref().map_or_else(
            || self.path.clone(),
            |q| format!("{}?{}", self.path, q),
        );
        format!("{} {} HTTP/{}", self.method, uri, self.http_version)
    }

    /// Render the full log line with a bracketed timestamp.
    pub fn format_line(&self) -> String {
        format!(
            "[{}] {} - \"{}\" {}",
            self.time.format(TIMESTAMP_FORMAT),
            self.remote_addr,
            self.request_line(),
            self.status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> AccessLogEntry {
        let mut entry =
            AccessLogEntry::new("127.0.0.1:54321".to_string(), "GET", "/style.css");
        entry.status = 200;
        entry
    }

    #[test]
    fn line_has_bracketed_timestamp_prefix() {
        let line = sample_entry().format_line();
        assert!(line.starts_with('['));
        let close = line.find(']').expect("closing bracket");
        // Timestamp like 29/Aug/2026 14:03:55
        let stamp = &line[1..close];
        assert_eq!(stamp.len(), "29/Aug/2026 14:03:55".len());
        assert_eq!(stamp.matches('/').count(), 2);
        assert_eq!(stamp.matches(':').count(), 2);
    }

    #[test]
    fn line_contains_client_request_and_status() {
        let line = sample_entry().format_line();
        assert!(line.contains("127.0.0.1:54321 - \"GET /style.css HTTP/1.1\" 200"));
    }

    #[test]
    fn request_line_includes_query() {
        let mut entry = sample_entry();
        entry.query = Some("page=1".to_string());
        assert_eq!(entry.request_line(), "GET /style.css?page=1 HTTP/1.1");
    }

    #[test]
    fn head_and_error_status_render() {
        let mut entry = AccessLogEntry::new("10.0.0.2:80".to_string(), "HEAD", "/missing.html");
        entry.status = 404;
        let line = entry.format_line();
        assert!(line.ends_with("\"HEAD /missing.html HTTP/1.1\" 404"));
    }
}
