//! Directory listing generation
//!
//! Renders an HTML index for a directory: entries sorted by name,
//! directories suffixed with `/`, display names HTML-escaped and link
//! targets percent-encoded.

use std::path::Path;
use tokio::fs;

/// Render the listing page for `dir`, titled with the request path.
pub async fn render_listing(dir: &Path, display_path: &str) -> std::io::Result<String> {
    let mut entries: Vec<(String, bool)> = Vec::new();
    let mut reader = fs::read_dir(dir).await?;
    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await.is_ok_and(|t| t.is_dir());
        entries.push((name, is_dir));
    }
    entries.sort();

    let title = format!("Directory listing for {}", escape_html(display_path));
    let mut html = String::with_capacity(512 + entries.len() * 64);
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for (name, is_dir) in &entries {
        let suffix = if *is_dir { "/" } else { "" };
        html.push_str(&format!(
            "<li><a href=\"{}{suffix}\">{}{suffix}</a></li>\n",
            percent_encode(name),
            escape_html(name),
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(html)
}

/// Escape text for inclusion in HTML.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Percent-encode a single path segment for use in an href.
///
/// Unreserved characters pass through; everything else becomes `%XX`.
pub fn percent_encode(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Decode `%XX` sequences in a request path. Malformed sequences are kept
/// literally rather than rejected.
pub fn percent_decode(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html("<b>&\"quoted\""),
            "&lt;b&gt;&amp;&quot;quoted&quot;"
        );
    }

    #[test]
    fn encodes_spaces_and_reserved() {
        assert_eq!(percent_encode("my file.css"), "my%20file.css");
        assert_eq!(percent_encode("a?b#c"), "a%3Fb%23c");
        assert_eq!(percent_encode("plain-name_1.txt"), "plain-name_1.txt");
    }

    #[test]
    fn decode_reverses_encode() {
        assert_eq!(percent_decode("/my%20file.css"), "/my file.css");
        assert_eq!(percent_decode("/%41%62c"), "/Abc");
    }

    #[test]
    fn malformed_percent_kept_literally() {
        assert_eq!(percent_decode("/100%"), "/100%");
        assert_eq!(percent_decode("/%zz"), "/%zz");
        assert_eq!(percent_decode("/%2"), "/%2");
    }

    #[tokio::test]
    async fn listing_is_sorted_and_escaped() {
        let dir = std::env::temp_dir().join(format!("servedir-listing-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("zsub")).unwrap();
        std::fs::write(dir.join("b.txt"), b"b").unwrap();
        std::fs::write(dir.join("a<b>.txt"), b"a").unwrap();

        let html = render_listing(&dir, "/files/").await.unwrap();
        assert!(html.contains("Directory listing for /files/"));
        assert!(html.contains("<a href=\"zsub/\">zsub/</a>"));
        assert!(html.contains("a&lt;b&gt;.txt"));
        assert!(html.contains("a%3Cb%3E.txt"));
        // Sorted: escaped "a<b>.txt" entry precedes "b.txt", dirs mixed in by name
        let a_pos = html.find("a%3Cb%3E.txt").unwrap();
        let b_pos = html.find("b.txt").unwrap();
        assert!(a_pos < b_pos);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
