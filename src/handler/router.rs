//! Request routing and dispatch
//!
//! Entry point for HTTP request processing: method validation, dispatch to
//! the static file layer, header finalization, and access logging.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{self, HeaderValue};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::{AppState, HttpConfig};
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Request context passed down to the file serving layer
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling.
///
/// Generic over the body type: this server never reads request bodies, and
/// tests drive it with `Request<()>`.
pub async fn handle_request<B>(
    req: Request<B>,
    remote_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path();

    let mut entry = AccessLogEntry::new(remote_addr.to_string(), req.method().as_str(), path);
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_str(req.version()).to_string();

    let mut response = match check_http_method(req.method()) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path,
                is_head: *req.method() == Method::HEAD,
                if_none_match: header_value(&req, "if-none-match"),
                range_header: header_value(&req, "range"),
            };
            static_files::serve(&ctx, &state.config.files).await
        }
    };

    finalize_headers(&mut response, path, &state.config.http);

    entry.status = response.status().as_u16();
    state.log_access(&entry);

    Ok(response)
}

/// Final header pass, applied once per request to every response.
///
/// Sets the Server header and appends the configured Content-Type override
/// for matching path suffixes. The override is appended next to the detected
/// type rather than replacing it, so a matched response carries two
/// Content-Type headers. The reference server behaves exactly this way.
fn finalize_headers(response: &mut Response<Full<Bytes>>, path: &str, http_config: &HttpConfig) {
    if let Ok(server) = HeaderValue::from_str(&http_config.server_name) {
        response.headers_mut().insert(header::SERVER, server);
    }

    if let Some(content_type) = http_config.override_for_path(path) {
        if let Ok(value) = HeaderValue::from_str(content_type) {
            response.headers_mut().append(header::CONTENT_TYPE, value);
        }
    }
}

/// Allow GET/HEAD through, answer OPTIONS, reject the rest with 405.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    if *method == Method::GET || *method == Method::HEAD {
        return None;
    }
    if *method == Method::OPTIONS {
        return Some(http::build_options_response());
    }
    logger::log_warning(&format!("Method not allowed: {method}"));
    Some(http::build_405_response())
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_str(version: Version) -> &'static str {
    if version == Version::HTTP_09 {
        "0.9"
    } else if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else if version == Version::HTTP_3 {
        "3"
    } else {
        "1.1"
    }
}
