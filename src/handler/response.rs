//! Response assembly module
//!
//! Builds the complete response in memory before anything touches the
//! transport: status line, `Date` / `Content-Type` / `Server` /
//! `Content-Length` headers, a blank line, then the body. Header text and
//! file bytes are joined at the byte level so binary payloads survive
//! unmodified.

use super::validate::{ResolvedResource, Validation};
use crate::config::ServerConfig;
use crate::http::{StatusOutcome, SUPPORTED_VERSION};
use crate::logger::LogSink;
use chrono::Utc;
use std::io;
use tokio::fs;

const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Assemble the response bytes for a validation outcome.
///
/// A read failure after successful validation (the file vanished or cannot
/// be decoded) degrades to the Not Found error page; the client always
/// receives a complete, well-formed response.
pub async fn build_response(
    validation: &Validation,
    config: &ServerConfig,
    log: &dyn LogSink,
) -> Vec<u8> {
    if let Some(resolved) = &validation.resolved {
        match build_file_response(resolved, config, log).await {
            Ok(bytes) => return bytes,
            Err(err) => {
                log.log(&format!(
                    "[ERROR] - failed to read {}: {err}",
                    resolved.path.display()
                ));
            }
        }
        return build_error_response(StatusOutcome::NotFound, config, log);
    }

    build_error_response(validation.outcome, config, log)
}

/// Serve the resolved file.
///
/// Textual types are read as UTF-8 text; the byte length, not the character
/// count, becomes the `Content-Length`. Image types are read and appended
/// as raw bytes.
async fn build_file_response(
    resolved: &ResolvedResource,
    config: &ServerConfig,
    log: &dyn LogSink,
) -> io::Result<Vec<u8>> {
    let body: Vec<u8> = if resolved.content_type.starts_with("text") {
        fs::read_to_string(&resolved.path).await?.into_bytes()
    } else {
        fs::read(&resolved.path).await?
    };

    let date = format_date();
    let head = header_block(
        StatusOutcome::Ok,
        resolved.content_type,
        body.len(),
        &config.server_name,
        &date,
    );

    log.log(&format!(
        "[RESPONSE] - content-type: {}, content-length: {}, server: {}, date: {}",
        resolved.content_type,
        body.len(),
        config.server_name,
        date
    ));

    let mut response = head.into_bytes();
    response.extend_from_slice(&body);
    Ok(response)
}

/// Synthesize the error page for a failed outcome.
///
/// The content type is forced to `text/html` regardless of what the request
/// asked for.
pub fn build_error_response(
    outcome: StatusOutcome,
    config: &ServerConfig,
    log: &dyn LogSink,
) -> Vec<u8> {
    let body = format!("<h1>{}: {}</h1>", outcome.code(), outcome.reason());
    let head = header_block(
        outcome,
        "text/html",
        body.len(),
        &config.server_name,
        &format_date(),
    );

    log.log(&format!("[RESPONSE] - status: {}", outcome.code()));

    let mut response = head.into_bytes();
    response.extend_from_slice(body.as_bytes());
    response
}

/// Status line and the fixed header block, terminated by the blank line.
fn header_block(
    outcome: StatusOutcome,
    content_type: &str,
    content_length: usize,
    server_name: &str,
    date: &str,
) -> String {
    format!(
        "{SUPPORTED_VERSION} {} {}\r\n\
         Date: {date}\r\n\
         Content-Type: {content_type}\r\n\
         Server: {server_name}\r\n\
         Content-Length: {content_length}\r\n\
         \r\n",
        outcome.code(),
        outcome.reason(),
    )
}

fn format_date() -> String {
    Utc::now().format(DATE_FORMAT).to_string()
}
