//! MIME type detection
//!
//! Maps a file extension to the Content-Type the server sends by default.
//! Configured overrides (see `config::HttpConfig`) are layered on top of
//! this table by the router, not here.

/// Detect the Content-Type for a file extension.
///
/// Unknown or missing extensions fall back to `application/octet-stream`.
///
/// # Examples
/// ```
/// use servedir::http::mime::detect_content_type;
/// assert_eq!(detect_content_type(Some("html")), "text/html");
/// assert_eq!(detect_content_type(Some("png")), "image/png");
/// assert_eq!(detect_content_type(None), "application/octet-stream");
/// ```
pub fn detect_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Media
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Archives and documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",

        _ => "application/octet-stream",
    }
}
