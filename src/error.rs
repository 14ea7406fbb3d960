//! Error types for server address parsing.

use std::fmt;

/// Errors that can occur when parsing a server address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// Input is not an absolute URL
    InvalidUrl {
        /// Why the URL parser rejected the input
        reason: String,
    },
    /// URL parsed, but carries no host to address
    MissingHost,
    /// Address fields could not be assembled into a URI
    InvalidUri {
        /// Why the URI builder rejected the fields
        reason: String,
    },
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse server address '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::InvalidUrl { reason } => {
                write!(f, "not an absolute URL ({reason}); expected e.g. 'https://gitea.example.com'")
            }
            ParseErrorKind::MissingHost => write!(f, "URL has no host"),
            ParseErrorKind::InvalidUri { reason } => write!(f, "cannot build URI: {reason}"),
        }
    }
}

impl std::error::Error for ParseError {}
