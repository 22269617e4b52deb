//! Short code generation.
//!
//! Codes are produced from OS entropy and carry no state: uniqueness is
//! enforced by the store's constraint plus the allocation retry loop in
//! [`crate::application::services::ShortenService`], not by the generator.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 6 bytes encode to exactly [`CODE_LENGTH`] characters of unpadded
/// URL-safe base64.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of a generated short code in characters.
pub const CODE_LENGTH: usize = 8;

/// Path segments that must never resolve as short codes.
///
/// These collide with system routes and are rejected before any store
/// lookup.
const RESERVED_CODES: &[&str] = &["api", "health", "favicon.ico"];

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character code over `[A-Za-z0-9_-]`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns `true` if `code` is a reserved path segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
