//! Constants for server address parsing and rendering.

/// Scheme used when an address has `use_http` set.
pub const HTTP_SCHEME: &str = "http";

/// Scheme used for every other address.
pub const HTTPS_SCHEME: &str = "https";

/// Separator between the scheme and the authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// Integer form of "no explicit port", as stored in persisted configuration.
pub const NO_PORT: i32 = -1;

/// Host of the default server.
pub const DEFAULT_HOST: &str = "localhost";

/// Port of the default server.
pub const DEFAULT_PORT: u16 = 443;

/// Server path where users generate personal access tokens.
pub const ACCESS_TOKEN_SETTINGS_PATH: &str = "/user/settings/applications";
