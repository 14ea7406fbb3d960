//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{NO_PORT, ServerAddress};

/// Valid characters for domain labels: alphanumeric and hyphen
const HOST_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

/// Generate a host character; boundaries exclude the hyphen
fn arbitrary_host_char(is_boundary: bool) -> char {
    let chars = if is_boundary {
        &HOST_CHARS[..HOST_CHARS.len() - 1]
    } else {
        HOST_CHARS
    };
    let idx: usize = kani::any();
    chars[idx % chars.len()] as char
}

impl kani::Arbitrary for ServerAddress {
    fn any() -> Self {
        // 1-6 char host for tractability
        let len: usize = kani::any();
        let len = 1 + (len % 6);

        let host: String = (0..len)
            .map(|i| arbitrary_host_char(i == 0 || i == len - 1))
            .collect();

        let has_port: bool = kani::any();
        let port = if has_port { Some(kani::any()) } else { None };

        ServerAddress::new(kani::any(), host, port)
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: exact equality implies protocol-insensitive equality
#[kani::proof]
#[kani::unwind(8)]
fn proof_equality_implies_ignoring_protocol() {
    let a: ServerAddress = kani::any();
    let b: ServerAddress = kani::any();
    kani::assume(a == b);
    assert!(a.equals_ignoring_protocol(&b));
}

/// Proof: flipping the protocol never changes protocol-insensitive identity
#[kani::proof]
#[kani::unwind(8)]
fn proof_protocol_flip_is_same_server() {
    let a: ServerAddress = kani::any();
    let flipped = a.with_http(!a.use_http());
    assert!(a != flipped);
    assert!(a.equals_ignoring_protocol(&flipped));
}

/// Proof: the integer port form is -1 exactly when no port is set
#[kani::proof]
#[kani::unwind(8)]
fn proof_port_sentinel() {
    let a: ServerAddress = kani::any();
    match a.port() {
        Some(port) => assert_eq!(a.port_or_sentinel(), i32::from(port)),
        None => assert_eq!(a.port_or_sentinel(), NO_PORT),
    }
}

/// Proof: schema follows the protocol flag
#[kani::proof]
#[kani::unwind(8)]
fn proof_schema_matches_flag() {
    let a: ServerAddress = kani::any();
    assert_eq!(a.schema() == "http", a.use_http());
}
