//! Range header parsing
//!
//! Single-range `bytes=` parsing for partial content responses. Multi-range
//! and non-byte units are ignored, which means the full body is served.

/// A byte range requested by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte position
    pub start: usize,
    /// Last byte position; `None` means through end of file
    pub end: Option<usize>,
}

impl ByteRange {
    /// Resolve the inclusive end position against the file size.
    #[inline]
    pub fn resolve_end(&self, file_size: usize) -> usize {
        self.end.unwrap_or_else(|| file_size.saturating_sub(1))
    }
}

/// Outcome of parsing a Range header
#[derive(Debug)]
pub enum RangeOutcome {
    /// Satisfiable range, serve 206
    Partial(ByteRange),
    /// Range cannot be satisfied, serve 416
    Unsatisfiable,
    /// No header, or a form we ignore: serve the full body
    Full,
}

/// Parse a Range header value against the file size.
///
/// Supported forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
///
/// # Examples
/// ```
/// use servedir::http::range::{parse_range_header, RangeOutcome};
///
/// assert!(matches!(parse_range_header(Some("bytes=0-99"), 1000), RangeOutcome::Partial(_)));
/// assert!(matches!(parse_range_header(None, 1000), RangeOutcome::Full));
/// assert!(matches!(parse_range_header(Some("bytes=2000-"), 1000), RangeOutcome::Unsatisfiable));
/// ```
pub fn parse_range_header(header: Option<&str>, file_size: usize) -> RangeOutcome {
    let Some(spec) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Full;
    };

    // Multi-range requests are ignored rather than rejected
    if spec.contains(',') {
        return RangeOutcome::Full;
    }

    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeOutcome::Full;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if start_str.is_empty() {
        // "-500": the last 500 bytes
        return parse_suffix(end_str, file_size);
    }

    let Ok(start) = start_str.parse::<usize>() else {
        return RangeOutcome::Full;
    };
    if start >= file_size {
        return RangeOutcome::Unsatisfiable;
    }

    let end = if end_str.is_empty() {
        None
    } else {
        match end_str.parse::<usize>() {
            // Clamp to the last byte of the file
            Ok(e) => Some(e.min(file_size - 1)),
            Err(_) => return RangeOutcome::Full,
        }
    };

    if let Some(e) = end {
        if start > e {
            return RangeOutcome::Unsatisfiable;
        }
    }

    RangeOutcome::Partial(ByteRange { start, end })
}

fn parse_suffix(suffix_str: &str, file_size: usize) -> RangeOutcome {
    let Ok(suffix) = suffix_str.parse::<usize>() else {
        return RangeOutcome::Full;
    };
    // A suffix against an empty file selects no bytes at all
    if suffix == 0 || file_size == 0 {
        return RangeOutcome::Unsatisfiable;
    }

    // A suffix longer than the file means the whole file
    RangeOutcome::Partial(ByteRange {
        start: file_size.saturating_sub(suffix),
        end: Some(file_size.saturating_sub(1)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_header_serves_full_body() {
        assert!(matches!(parse_range_header(None, 100), RangeOutcome::Full));
    }

    #[test]
    fn fixed_range() {
        match parse_range_header(Some("bytes=0-9"), 100) {
            RangeOutcome::Partial(r) => {
                assert_eq!(r.start, 0);
                assert_eq!(r.end, Some(9));
                assert_eq!(r.resolve_end(100), 9);
            }
            other => panic!("expected Partial, got {other:?}"),
        }
    }

    #[test]
    fn open_ended_range() {
        match parse_range_header(Some("bytes=50-"), 100) {
            RangeOutcome::Partial(r) => {
                assert_eq!(r.start, 50);
                assert_eq!(r.end, None);
                assert_eq!(r.resolve_end(100), 99);
            }
            other => panic!("expected Partial, got {other:?}"),
        }
    }

    #[test]
    fn suffix_range() {
        match parse_range_header(Some("bytes=-20"), 100) {
            RangeOutcome::Partial(r) => {
                assert_eq!(r.start, 80);
                assert_eq!(r.end, Some(99));
            }
            other => panic!("expected Partial, got {other:?}"),
        }
    }

    #[test]
    fn oversized_suffix_is_whole_file() {
        match parse_range_header(Some("bytes=-500"), 100) {
            RangeOutcome::Partial(r) => {
                assert_eq!(r.start, 0);
                assert_eq!(r.end, Some(99));
            }
            other => panic!("expected Partial, got {other:?}"),
        }
    }

    #[test]
    fn end_clamped_to_file_size() {
        match parse_range_header(Some("bytes=10-9999"), 100) {
            RangeOutcome::Partial(r) => assert_eq!(r.end, Some(99)),
            other => panic!("expected Partial, got {other:?}"),
        }
    }

    #[test]
    fn start_past_eof_is_unsatisfiable() {
        assert!(matches!(
            parse_range_header(Some("bytes=200-"), 100),
            RangeOutcome::Unsatisfiable
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=-0"), 100),
            RangeOutcome::Unsatisfiable
        ));
    }

    #[test]
    fn suffix_against_empty_file_is_unsatisfiable() {
        assert!(matches!(
            parse_range_header(Some("bytes=-5"), 0),
            RangeOutcome::Unsatisfiable
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=0-"), 0),
            RangeOutcome::Unsatisfiable
        ));
    }

    #[test]
    fn malformed_and_multirange_are_ignored() {
        assert!(matches!(
            parse_range_header(Some("bytes=a-b"), 100),
            RangeOutcome::Full
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=0-9,20-29"), 100),
            RangeOutcome::Full
        ));
        assert!(matches!(
            parse_range_header(Some("items=0-9"), 100),
            RangeOutcome::Full
        ));
    }
}
