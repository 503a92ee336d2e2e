//! Request handler module
//!
//! Routing dispatch plus the static file serving and directory listing
//! layers behind it.

pub mod listing;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
