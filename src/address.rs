//! Server address type identifying a Gitea instance.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use iri_string::types::UriString;
use url::Url;

use crate::constants::{
    ACCESS_TOKEN_SETTINGS_PATH, DEFAULT_HOST, DEFAULT_PORT, HTTP_SCHEME, HTTPS_SCHEME, NO_PORT,
    SCHEME_SEPARATOR,
};
use crate::error::{ParseError, ParseErrorKind};

/// Scheme without special host rules, used to re-read numeric-label hosts.
const OPAQUE_HOST_SCHEME: &str = "gitea-host";

static DEFAULT_SERVER: LazyLock<ServerAddress> =
    LazyLock::new(|| ServerAddress::new(false, DEFAULT_HOST, Some(DEFAULT_PORT)));

/// The address of a remote Gitea server: protocol, host and optional port.
///
/// Values are immutable. A port of `None` means "no explicit port" and is
/// omitted when rendering; any `Some` port is rendered literally, even when it
/// equals the protocol default.
///
/// Equality and hashing cover the whole `(use_http, host, port)` triple. Use
/// [`ServerAddress::equals_ignoring_protocol`] to treat `http://x` and
/// `https://x` as the same server.
///
/// # Examples
///
/// ```
/// use gitea_server_address::ServerAddress;
///
/// let address = ServerAddress::parse("https://gitea.example.com:3000").unwrap();
/// assert!(!address.use_http());
/// assert_eq!(address.host(), "gitea.example.com");
/// assert_eq!(address.port(), Some(3000));
/// assert_eq!(address.to_string(), "https://gitea.example.com:3000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerAddress {
    use_http: bool,
    host: String,
    port: Option<u16>,
}

impl ServerAddress {
    /// Creates an address from its parts.
    ///
    /// No validation is performed: `host` must be a bare host without scheme
    /// or path.
    #[must_use]
    pub fn new(use_http: bool, host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            use_http,
            host: host.into(),
            port,
        }
    }

    /// Returns the shared default address, `https://localhost:443`.
    #[must_use]
    pub fn default_server() -> &'static Self {
        &DEFAULT_SERVER
    }

    /// Parses an address from an absolute URL.
    ///
    /// Only the `http` scheme, in any case, sets [`use_http`](Self::use_http);
    /// any other scheme, known or not, is accepted and maps to https. The host
    /// is kept as written. Paths, queries and fragments are discarded.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - The input is not an absolute URL
    /// - The URL has no host
    ///
    /// # Examples
    ///
    /// ```
    /// use gitea_server_address::ServerAddress;
    ///
    /// let address = ServerAddress::parse("ftp://gitea.io").unwrap();
    /// assert!(!address.use_http());
    /// assert_eq!(address.port(), None);
    ///
    /// assert!(ServerAddress::parse("not a url").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let address = Self::parse_inner(input).map_err(|kind| ParseError::new(input, kind))?;
        tracing::trace!(
            use_http = address.use_http,
            host = %address.host,
            port = ?address.port,
            "parsed server address"
        );
        Ok(address)
    }

    /// Returns true if the server is reached over plain http.
    #[must_use]
    pub const fn use_http(&self) -> bool {
        self.use_http
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the explicit port, if any.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the port in its integer form, with `-1` for "no port".
    #[must_use]
    pub fn port_or_sentinel(&self) -> i32 {
        self.port.map_or(NO_PORT, i32::from)
    }

    /// Returns the URL scheme, `"http"` or `"https"`.
    #[must_use]
    pub const fn schema(&self) -> &'static str {
        if self.use_http { HTTP_SCHEME } else { HTTPS_SCHEME }
    }

    /// Builds a structural URI from the scheme, host and port.
    ///
    /// The URI has an empty path, so its string form is exactly the
    /// [`Display`](fmt::Display) form.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with [`ParseErrorKind::InvalidUri`] if the host is
    /// not a valid URI authority. This can only happen for addresses built with
    /// [`ServerAddress::new`] from an unchecked host.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitea_server_address::ServerAddress;
    ///
    /// let uri = ServerAddress::new(false, "gitea.io", Some(3000)).to_uri().unwrap();
    /// assert_eq!(uri.scheme_str(), "https");
    /// assert_eq!(uri.as_str(), "https://gitea.io:3000");
    /// ```
    pub fn to_uri(&self) -> Result<UriString, ParseError> {
        let rendered = self.to_string();
        UriString::try_from(rendered.clone()).map_err(|e| {
            ParseError::new(
                &rendered,
                ParseErrorKind::InvalidUri {
                    reason: e.to_string(),
                },
            )
        })
    }

    /// Returns the page where users create personal access tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitea_server_address::ServerAddress;
    ///
    /// let address = ServerAddress::new(false, "gitea.io", None);
    /// assert_eq!(
    ///     address.to_access_token_settings_url(),
    ///     "https://gitea.io/user/settings/applications"
    /// );
    /// ```
    #[must_use]
    pub fn to_access_token_settings_url(&self) -> String {
        format!("{self}{ACCESS_TOKEN_SETTINGS_PATH}")
    }

    /// Compares host and port only, ignoring http vs https.
    ///
    /// This relation is not consistent with [`Hash`]: two addresses equal
    /// under it may hash differently. Never use it to key a `HashMap` or
    /// `HashSet`; use [`ServerAddress::find_ignoring_protocol`] for lookups.
    #[must_use]
    pub fn equals_ignoring_protocol(&self, other: &Self) -> bool {
        self.host == other.host && self.port == other.port
    }

    /// Finds the first candidate that addresses the same server as `target`,
    /// regardless of protocol.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitea_server_address::ServerAddress;
    ///
    /// let known = vec![
    ///     ServerAddress::new(false, "a.example", None),
    ///     ServerAddress::new(true, "gitea.io", Some(3000)),
    /// ];
    /// let target = ServerAddress::new(false, "gitea.io", Some(3000));
    /// let found = ServerAddress::find_ignoring_protocol(&known, &target);
    /// assert_eq!(found, Some(&known[1]));
    /// ```
    #[must_use]
    pub fn find_ignoring_protocol<'a, I>(candidates: I, target: &Self) -> Option<&'a Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        candidates
            .into_iter()
            .find(|candidate| candidate.equals_ignoring_protocol(target))
    }

    /// Returns a new address with the given port.
    #[must_use]
    pub fn with_port(&self, port: u16) -> Self {
        Self::new(self.use_http, self.host.clone(), Some(port))
    }

    /// Returns a new address without an explicit port.
    #[must_use]
    pub fn without_port(&self) -> Self {
        Self::new(self.use_http, self.host.clone(), None)
    }

    /// Returns a new address with the given protocol flag.
    #[must_use]
    pub fn with_http(&self, use_http: bool) -> Self {
        Self::new(use_http, self.host.clone(), self.port)
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        if input.is_empty() {
            return Err(ParseErrorKind::Empty);
        }

        // Same cleanup the URL parser applies before reading the input
        let cleaned: String = input
            .trim_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect();

        let url = match Url::parse(&cleaned) {
            Err(url::ParseError::InvalidIpv4Address) => {
                Self::parse_opaque_host(&cleaned).ok_or(url::ParseError::InvalidIpv4Address)
            }
            other => other,
        }
        .map_err(|e| ParseErrorKind::InvalidUrl {
            reason: e.to_string(),
        })?;

        if url.host_str().is_none_or(str::is_empty) {
            return Err(ParseErrorKind::MissingHost);
        }

        // `Url` lowercases and IDNA-encodes hosts and hides default ports,
        // so both are read back from the authority as written
        let (scheme, after_scheme) = cleaned
            .split_once(':')
            .ok_or(ParseErrorKind::MissingHost)?;
        let (host, port_text) = Self::split_authority(after_scheme);
        if host.is_empty() {
            return Err(ParseErrorKind::MissingHost);
        }
        let port = port_text.and_then(|text| text.parse::<u16>().ok());

        Ok(Self::new(scheme.eq_ignore_ascii_case(HTTP_SCHEME), host, port))
    }

    /// Re-reads a URL whose host ends in a numeric label but is not IPv4,
    /// such as `gitea.1`. Special schemes reject those hosts outright.
    fn parse_opaque_host(cleaned: &str) -> Option<Url> {
        let (_, after_scheme) = cleaned.split_once(':')?;
        let authority = after_scheme.trim_start_matches(|c: char| c == '/' || c == '\\');
        Url::parse(&format!("{OPAQUE_HOST_SCHEME}{SCHEME_SEPARATOR}{authority}")).ok()
    }

    /// Splits the text after `scheme:` into the host and the port text.
    fn split_authority(after_scheme: &str) -> (&str, Option<&str>) {
        let start = after_scheme.trim_start_matches(|c: char| c == '/' || c == '\\');
        let end = start
            .find(|c: char| matches!(c, '/' | '\\' | '?' | '#'))
            .unwrap_or(start.len());
        let authority = &start[..end];
        let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);

        if host_port.starts_with('[') {
            let (host, tail) = match host_port.find(']') {
                Some(idx) => host_port.split_at(idx + 1),
                None => (host_port, ""),
            };
            return (host, tail.strip_prefix(':'));
        }

        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    }
}

impl Default for ServerAddress {
    fn default() -> Self {
        DEFAULT_SERVER.clone()
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SCHEME_SEPARATOR}{}", self.schema(), self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl FromStr for ServerAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ServerAddress {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ServerAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("server", 3)?;
        state.serialize_field("useHttp", &self.use_http)?;
        state.serialize_field("host", &self.host)?;
        state.serialize_field("port", &self.port_or_sentinel())?;
        state.end()
    }
}

/// Persisted layout; absent keys fall back to the default server.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct PersistedServer {
    #[serde(rename = "useHttp")]
    use_http: bool,
    host: String,
    port: i64,
}

#[cfg(feature = "serde")]
impl Default for PersistedServer {
    fn default() -> Self {
        Self {
            use_http: false,
            host: DEFAULT_HOST.to_string(),
            port: i64::from(DEFAULT_PORT),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ServerAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <PersistedServer as serde::Deserialize>::deserialize(deserializer)?;
        let port = if raw.port == i64::from(NO_PORT) {
            None
        } else {
            let port = u16::try_from(raw.port).map_err(|_| {
                <D::Error as serde::de::Error>::custom(format!(
                    "invalid port {}; expected {NO_PORT} or 0-65535",
                    raw.port
                ))
            })?;
            Some(port)
        };
        Ok(Self::new(raw.use_http, raw.host, port))
    }
}
