//! HTTP protocol layer module
//!
//! Protocol-level building blocks with no business logic: request line
//! parsing, the status outcome set, and the content-type table.

pub mod mime;
pub mod request;
pub mod status;

// Re-export commonly used types
pub use request::RequestLine;
pub use status::StatusOutcome;

/// The only request method this server implements.
pub const SUPPORTED_METHOD: &str = "GET";

/// The only protocol version accepted in a request line, and the version
/// every response is framed as.
pub const SUPPORTED_VERSION: &str = "HTTP/1.1";
