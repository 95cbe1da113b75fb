//! Request validation module
//!
//! An ordered short-circuit pipeline: the first failing check fixes the
//! status outcome and everything after it is skipped. Checks run in this
//! order: emptiness, tokenization, method, target structure, version,
//! extension, root containment, existence.

use crate::config::ServerConfig;
use crate::http::{mime, RequestLine, StatusOutcome, SUPPORTED_METHOD, SUPPORTED_VERSION};
use crate::logger::LogSink;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};
use tokio::fs;

/// A servable file, produced only for a 200 outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    /// Canonical absolute path, always inside the web root.
    pub path: PathBuf,
    /// Taken from the fixed extension table, never from file contents.
    pub content_type: &'static str,
}

/// Result of validating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub outcome: StatusOutcome,
    pub resolved: Option<ResolvedResource>,
}

impl Validation {
    const fn failure(outcome: StatusOutcome) -> Self {
        Self {
            outcome,
            resolved: None,
        }
    }

    pub const fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Validate a raw request against the grammar and the web root.
///
/// Emits exactly one `[REQUEST]` log line per invocation, success or
/// failure, before returning.
pub async fn validate(raw: &str, config: &ServerConfig, log: &dyn LogSink) -> Validation {
    let request = RequestLine::parse(raw);

    let validation = match &request {
        None => Validation::failure(StatusOutcome::BadRequest),
        Some(line) => check_request(line, config).await,
    };

    let (method, target) = request
        .as_ref()
        .map_or(("", ""), |line| (line.method.as_str(), line.target.as_str()));
    log.log(&format!("[REQUEST] - {method} {target}"));

    validation
}

async fn check_request(line: &RequestLine, config: &ServerConfig) -> Validation {
    if line.method != SUPPORTED_METHOD {
        return Validation::failure(StatusOutcome::NotImplemented);
    }

    // The target must be an absolute path reference, not an absolute URI.
    if !line.target.starts_with('/') {
        return Validation::failure(StatusOutcome::BadRequest);
    }

    if line.version != SUPPORTED_VERSION {
        return Validation::failure(StatusOutcome::VersionNotSupported);
    }

    // Unknown extensions report the same as missing files so the response
    // does not reveal which types the server recognizes.
    let Some(content_type) = mime::extension_of(&line.target).and_then(mime::content_type_for)
    else {
        return Validation::failure(StatusOutcome::NotFound);
    };

    match resolve_path(&config.web_root, &line.target).await {
        Resolve::File(path) => Validation {
            outcome: StatusOutcome::Ok,
            resolved: Some(ResolvedResource { path, content_type }),
        },
        Resolve::Escapes => Validation::failure(StatusOutcome::Forbidden),
        Resolve::Missing => Validation::failure(StatusOutcome::NotFound),
    }
}

enum Resolve {
    /// Canonical path of an existing regular file inside the root.
    File(PathBuf),
    /// The target resolves outside the web root.
    Escapes,
    /// Nothing servable at the target.
    Missing,
}

/// Map a request target onto the filesystem and enforce containment.
///
/// Containment is checked twice, both before existence: a lexical pass
/// catches `..` climbing out of the root even when the named file does not
/// exist, and a `starts_with` check on the canonicalized path catches
/// symlinks pointing outside the root.
async fn resolve_path(web_root: &str, target: &str) -> Resolve {
    let relative = target
        .trim_start_matches('/')
        .replace('/', MAIN_SEPARATOR_STR);

    if escapes_root(Path::new(&relative)) {
        return Resolve::Escapes;
    }

    let Ok(root) = fs::canonicalize(web_root).await else {
        // Misconfigured or vanished root: nothing under it is servable.
        return Resolve::Missing;
    };

    let candidate = Path::new(web_root).join(&relative);
    match fs::canonicalize(&candidate).await {
        Ok(canonical) => {
            if !canonical.starts_with(&root) {
                return Resolve::Escapes;
            }
            match fs::metadata(&canonical).await {
                Ok(meta) if meta.is_file() => Resolve::File(canonical),
                _ => Resolve::Missing,
            }
        }
        Err(_) => Resolve::Missing,
    }
}

/// Lexical containment: does the relative path climb above its starting
/// directory at any point?
fn escapes_root(relative: &Path) -> bool {
    let mut depth: i32 = 0;
    for component in relative.components() {
        match component {
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return true;
                }
            }
            Component::CurDir => {}
            _ => depth += 1,
        }
    }
    false
}
