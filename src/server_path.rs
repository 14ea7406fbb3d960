//! Trait for anything that addresses a remote server.

use std::fmt;

use iri_string::types::UriString;

use crate::address::ServerAddress;
use crate::error::ParseError;

/// A reference to a remote server.
///
/// Consumers such as HTTP clients and account stores accept any
/// `ServerPath`. The `Display` form is the canonical, user-facing address.
pub trait ServerPath: fmt::Display + Send + Sync {
    /// Builds the structural URI used to reach the server.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the reference cannot be expressed as a URI.
    fn to_uri(&self) -> Result<UriString, ParseError>;
}

impl ServerPath for ServerAddress {
    fn to_uri(&self) -> Result<UriString, ParseError> {
        Self::to_uri(self)
    }
}
