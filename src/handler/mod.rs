//! Request handler module
//!
//! The decision core of the server: validate a raw request line, then
//! assemble the complete response bytes. Both halves are stateless; each
//! call is independent of every other.

pub mod response;
pub mod validate;

pub use validate::{ResolvedResource, Validation};

use crate::config::ServerConfig;
use crate::logger::LogSink;

/// Run one request through the full pipeline.
///
/// Always produces a complete response, whatever the input looked like.
pub async fn process_request(raw: &str, config: &ServerConfig, log: &dyn LogSink) -> Vec<u8> {
    let validation = validate::validate(raw, config, log).await;
    response::build_response(&validation, config, log).await
}
