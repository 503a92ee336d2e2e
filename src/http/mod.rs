//! HTTP protocol layer
//!
//! Protocol-level helpers shared by the file serving code: MIME detection,
//! cache validators, Range parsing, and response builders.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used items
pub use range::parse_range_header;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_416_response,
    build_options_response, build_redirect_response,
};
