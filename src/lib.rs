//! Server address value type for Gitea instances.
//!
//! A [`ServerAddress`] identifies one Gitea server by protocol, host and an
//! optional port. It is the key higher-level code uses to tell servers apart:
//! account stores, API clients and token flows all address a server this way.
//!
//! # Quick Start
//!
//! ```rust
//! use gitea_server_address::ServerAddress;
//!
//! let address = ServerAddress::parse("https://gitea.example.com:3000/org/repo").unwrap();
//!
//! assert_eq!(address.to_string(), "https://gitea.example.com:3000");
//! assert_eq!(
//!     address.to_access_token_settings_url(),
//!     "https://gitea.example.com:3000/user/settings/applications"
//! );
//!
//! // Protocol-insensitive comparison
//! let plain = ServerAddress::new(true, "gitea.example.com", Some(3000));
//! assert_ne!(address, plain);
//! assert!(address.equals_ignoring_protocol(&plain));
//! ```
//!
//! # Ports
//!
//! A port of `None` means the URL carried no explicit port; rendering omits
//! it. Persisted configuration stores that as `-1` ([`NO_PORT`]).
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` using the keys `useHttp`, `host`, `port` |
//! | `kani`  | Proof harnesses for the Kani model checker |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod server_path;

pub use address::ServerAddress;
pub use constants::{
    ACCESS_TOKEN_SETTINGS_PATH, DEFAULT_HOST, DEFAULT_PORT, HTTPS_SCHEME, HTTP_SCHEME, NO_PORT,
    SCHEME_SEPARATOR,
};
pub use error::{ParseError, ParseErrorKind};
pub use server_path::ServerPath;
