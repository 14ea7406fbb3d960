//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use gitea_server_address::prelude::*;
//!
//! let address = ServerAddress::parse("https://gitea.io").unwrap();
//! let uri = ServerPath::to_uri(&address).unwrap();
//! assert_eq!(uri.as_str(), "https://gitea.io");
//! ```

pub use crate::{
    // Core types
    ServerAddress, ServerPath,
    // Errors
    ParseError, ParseErrorKind,
    // Constants
    ACCESS_TOKEN_SETTINGS_PATH, DEFAULT_HOST, DEFAULT_PORT, HTTPS_SCHEME, HTTP_SCHEME, NO_PORT,
    SCHEME_SEPARATOR,
};
