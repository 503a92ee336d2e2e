//! Static file serving
//!
//! Resolves request paths against the configured root, with traversal
//! protection, index file resolution, directory listings, and conditional
//! and range request handling.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::config::FilesConfig;
use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeOutcome};
use crate::logger;

/// Serve the request path from the file root.
pub async fn serve(ctx: &RequestContext<'_>, files: &FilesConfig) -> Response<Full<Bytes>> {
    let decoded = listing::percent_decode(ctx.path);
    // Drop empty and parent-directory segments before joining; filenames
    // that merely contain dots pass through. The canonical prefix check
    // below is the backstop.
    let clean = decoded
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != "..")
        .collect::<Vec<_>>()
        .join("/");

    let root = Path::new(&files.root);
    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "File root not found or inaccessible '{}': {e}",
                files.root
            ));
            return http::build_404_response();
        }
    };

    // Missing files are the common case, resolved here as 404 without noise
    let Ok(target) = root.join(&clean).canonicalize() else {
        return http::build_404_response();
    };
    if !target.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            ctx.path,
            target.display()
        ));
        return http::build_404_response();
    }

    if target.is_dir() {
        return serve_directory(ctx, &target, &decoded, files).await;
    }
    serve_file(ctx, &target).await
}

/// Serve a directory request: redirect to the slashed form, then try index
/// files, then fall back to a generated listing.
async fn serve_directory(
    ctx: &RequestContext<'_>,
    dir: &Path,
    decoded_path: &str,
    files: &FilesConfig,
) -> Response<Full<Bytes>> {
    if !ctx.path.ends_with('/') {
        return http::build_redirect_response(&format!("{}/", ctx.path));
    }

    for index in &files.index_files {
        let candidate = dir.join(index);
        if candidate.is_file() {
            return serve_file(ctx, &candidate).await;
        }
    }

    if files.directory_listing {
        return match listing::render_listing(dir, decoded_path).await {
            Ok(html) => http::response::build_html_response(html, ctx.is_head),
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to read directory '{}': {e}",
                    dir.display()
                ));
                http::build_404_response()
            }
        };
    }

    http::build_404_response()
}

/// Read a file and build its response, honoring `If-None-Match` and Range.
async fn serve_file(ctx: &RequestContext<'_>, path: &Path) -> Response<Full<Bytes>> {
    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            return http::build_404_response();
        }
    };

    let content_type = mime::detect_content_type(path.extension().and_then(|e| e.to_str()));
    respond_with_content(&content, content_type, ctx)
}

fn respond_with_content(
    data: &[u8],
    content_type: &str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    if cache::etag_matches(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    let total_size = data.len();
    match http::parse_range_header(ctx.range_header.as_deref(), total_size) {
        RangeOutcome::Partial(range) => {
            let start = range.start;
            let end = range.resolve_end(total_size);
            http::response::build_partial_response(
                Bytes::from(data[start..=end].to_vec()),
                content_type,
                &etag,
                start,
                end,
                total_size,
                ctx.is_head,
            )
        }
        RangeOutcome::Unsatisfiable => http::build_416_response(total_size),
        RangeOutcome::Full => http::response::build_file_response(
            Bytes::from(data.to_owned()),
            content_type,
            &etag,
            ctx.is_head,
        ),
    }
}
