//! Configuration module
//!
//! Layered configuration: built-in defaults, an optional `solohttpd.toml`
//! file, `SOLOHTTPD_*` environment variables, and finally the three
//! mandatory command-line values as overrides. Constructed once at startup
//! and read-only afterwards.

use crate::cli::CliArgs;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Values the request pipeline reads on every request.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Directory below which all servable resources must resolve.
    /// Stored without a trailing separator.
    pub web_root: String,
    pub bind_address: String,
    pub bind_port: u16,
    /// Value of the `Server` response header.
    pub server_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Path of the append-only log file.
    pub log_file: String,
    /// Echo accepted connections to the console.
    pub access_log: bool,
}

impl Config {
    /// Build the configuration, applying CLI values over file/env/defaults.
    pub fn load(cli: &CliArgs) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("solohttpd").required(false))
            .add_source(config::Environment::with_prefix("SOLOHTTPD"))
            .set_default("server.server_name", "solohttpd/0.1")?
            .set_default("logging.log_file", crate::logger::writer::DEFAULT_LOG_FILE)?
            .set_default("logging.access_log", true)?
            .set_override("server.web_root", trim_trailing_separator(&cli.web_root))?
            .set_override("server.bind_address", cli.bind_address.to_string())?
            .set_override("server.bind_port", i64::from(cli.bind_port))?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .server
            .bind_address
            .parse()
            .map_err(|e| format!("Invalid bind address: {e}"))?;
        Ok(SocketAddr::new(ip, self.server.bind_port))
    }
}

/// Normalize the web root so path concatenation never doubles a separator.
fn trim_trailing_separator(web_root: &str) -> String {
    let trimmed = web_root.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        web_root.to_string()
    } else {
        trimmed.to_string()
    }
}
