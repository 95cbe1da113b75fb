//! Status outcome module
//!
//! Every request resolves to exactly one member of a closed status set.
//! The reason phrase is fixed per code; there is no dynamic lookup.

use std::fmt;

/// Outcome of validating a single request.
///
/// Any outcome other than `Ok` means the response body is the synthesized
/// error page, never file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// 200 - request valid, resource resolved
    Ok,
    /// 400 - malformed request line or non-absolute target
    BadRequest,
    /// 403 - target escapes the web root
    Forbidden,
    /// 404 - missing file, or an extension outside the served set
    NotFound,
    /// 501 - any method other than GET
    NotImplemented,
    /// 505 - any version other than HTTP/1.1
    VersionNotSupported,
}

impl StatusOutcome {
    /// Numeric status code.
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::NotImplemented => 501,
            Self::VersionNotSupported => 505,
        }
    }

    /// Canonical reason phrase for the status line.
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::NotImplemented => "Not Implemented",
            Self::VersionNotSupported => "HTTP Version Not Supported",
        }
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}
