//! Command-line argument parsing
//!
//! The server takes exactly three flags, in any order:
//! `-webRoot=<dir> -webIP=<address> -webPort=<port>`. Anything else aborts
//! startup before the listener is created.

use std::net::IpAddr;
use thiserror::Error;

const WEB_ROOT_FLAG: &str = "-webRoot=";
const WEB_IP_FLAG: &str = "-webIP=";
const WEB_PORT_FLAG: &str = "-webPort=";

const REQUIRED_ARG_COUNT: usize = 3;

/// The three mandatory startup values.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub web_root: String,
    pub bind_address: IpAddr,
    pub bind_port: u16,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("expected 3 arguments, got {0}")]
    WrongArgCount(usize),
    #[error("unrecognized argument: {0}")]
    UnknownFlag(String),
    #[error("invalid IP address: {0}")]
    InvalidIp(String),
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("missing required flag: {0}")]
    MissingFlag(&'static str),
}

/// Parse command-line arguments (without the program name).
pub fn parse<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.len() != REQUIRED_ARG_COUNT {
        return Err(CliError::WrongArgCount(args.len()));
    }

    let mut web_root = None;
    let mut bind_address = None;
    let mut bind_port = None;

    for arg in &args {
        if let Some(value) = arg.strip_prefix(WEB_ROOT_FLAG) {
            web_root = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix(WEB_IP_FLAG) {
            let ip = value
                .parse::<IpAddr>()
                .map_err(|_| CliError::InvalidIp(value.to_string()))?;
            bind_address = Some(ip);
        } else if let Some(value) = arg.strip_prefix(WEB_PORT_FLAG) {
            let port = value
                .parse::<u16>()
                .map_err(|_| CliError::InvalidPort(value.to_string()))?;
            bind_port = Some(port);
        } else {
            return Err(CliError::UnknownFlag(arg.clone()));
        }
    }

    Ok(CliArgs {
        web_root: web_root.ok_or(CliError::MissingFlag(WEB_ROOT_FLAG))?,
        bind_address: bind_address.ok_or(CliError::MissingFlag(WEB_IP_FLAG))?,
        bind_port: bind_port.ok_or(CliError::MissingFlag(WEB_PORT_FLAG))?,
    })
}
