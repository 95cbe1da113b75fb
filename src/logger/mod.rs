//! Logging module
//!
//! The pipeline logs through the `LogSink` trait rather than a concrete
//! file handle, so tests can capture log lines without real file I/O.
//! `FileLogger` is the production sink: a single append-only file with
//! timestamped lines.

pub mod writer;

pub use writer::FileLogger;

use crate::config::Config;
use std::net::SocketAddr;

/// Write-only logging sink.
///
/// Implementations timestamp and persist each line themselves. Logging is
/// fire-and-forget: a sink must swallow its own write failures and never
/// surface them to the caller.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

/// Console banner printed once at startup.
pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("solohttpd started");
    println!("Listening on: http://{addr}");
    println!("Web root: {}", config.server.web_root);
    println!("Server name: {}", config.server.server_name);
    println!("Log file: {}", config.logging.log_file);
    println!("One connection served at a time");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    eprintln!("[ERROR] Failed to serve connection: {err}");
}
