//! Shopstack HMAC — SHA-256 message authentication codes.
//!
//! Generates a keyed HMAC-SHA256 over a content string and verifies
//! candidate codes with a constant-time comparison. Typical use is
//! authenticating webhook or app-proxy requests signed with a shared
//! secret.
//!
//! ```
//! use shopstack_hmac::{Encoding, HmacGenerator, HmacVerifier};
//!
//! # fn main() -> Result<(), shopstack_hmac::HmacError> {
//! let generator = HmacGenerator::with_encoding("shpss_secret", Encoding::Base16)?;
//! let code = generator.generate(r#"{"id":1}"#)?;
//!
//! let verifier = HmacVerifier::with_encoding("shpss_secret", Encoding::Base16)?;
//! assert!(verifier.verify(code.as_str(), r#"{"id":1}"#)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Map
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`constants`] | Algorithm name, tag and encoded lengths |
//! | [`errors`] | [`HmacError`] and the error-code registry |
//! | [`secret`] | [`Secret`] key material (zeroized on drop) |
//! | [`encoding`] | [`Encoding`] — Base64 / Base16 rendering |
//! | [`generator`] | [`HmacGenerator`] |
//! | [`verifier`] | [`HmacVerifier`] |
//! | [`vectors`] | Golden vector generator (test-only, `vectors` feature) |
//!
//! # Absent input
//!
//! `generate` and `verify` take `impl Into<Option<&str>>`. A plain `&str`
//! is the normal call; `None` is the absent value and fails with
//! [`HmacError::InvalidInput`] rather than verifying as `false`.

/// Algorithm and length constants.
pub mod constants;

/// Error types for HMAC operations.
pub mod errors;

/// Secret key material.
pub mod secret;

/// Output encodings — base64 and hex.
pub mod encoding;

/// HMAC generation.
pub mod generator;

/// HMAC verification.
pub mod verifier;

/// Deterministic golden vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use encoding::Encoding;
pub use errors::HmacError;
pub use generator::HmacGenerator;
pub use secret::Secret;
pub use verifier::HmacVerifier;
