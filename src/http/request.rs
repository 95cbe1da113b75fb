//! Request line parsing module
//!
//! The server reads exactly one request line per connection; headers and
//! bodies are never parsed. Both bare `\n` and `\r\n` line endings are
//! tolerated by trimming trailing carriage returns from each token.

/// The three tokens of a request line, split from the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub target: String,
    pub version: String,
}

impl RequestLine {
    /// Split raw request text into its first three tokens.
    ///
    /// Returns `None` for empty or whitespace-only input and for anything
    /// with fewer than three tokens; both are malformed requests. No
    /// validation of token content happens here.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let tokens: Vec<&str> = raw
            .split([' ', '\n'])
            .map(|token| token.trim_end_matches('\r'))
            .collect();

        if tokens.len() < 3 {
            return None;
        }

        Some(Self {
            method: tokens[0].to_string(),
            target: tokens[1].to_string(),
            version: tokens[2].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_request_line() {
        let line = RequestLine::parse("GET /index.html HTTP/1.1").unwrap();
        assert_eq!(line.method, "GET");
        assert_eq!(line.target, "/index.html");
        assert_eq!(line.version, "HTTP/1.1");
    }

    #[test]
    fn test_parse_trims_carriage_returns() {
        let line = RequestLine::parse("GET /index.html HTTP/1.1\r\nHost: x\r\n").unwrap();
        assert_eq!(line.version, "HTTP/1.1");
    }

    #[test]
    fn test_parse_bare_newline_terminator() {
        let line = RequestLine::parse("GET /a.txt HTTP/1.1\n").unwrap();
        assert_eq!(line.target, "/a.txt");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(RequestLine::parse(""), None);
        assert_eq!(RequestLine::parse("   \r\n"), None);
    }

    #[test]
    fn test_parse_too_few_tokens() {
        assert_eq!(RequestLine::parse("GET /index.html"), None);
        assert_eq!(RequestLine::parse("GET"), None);
    }
}
