//! Error types for shopstack-hmac.
//!
//! One enum tags the cause of every failure so callers can tell a
//! misconfigured system (`Initialization`) apart from a caller bug
//! (`InvalidInput`) or a rendering fault (`Encoding`).
//!
//! An authentication mismatch is NOT an error. `verify` reports it as
//! `Ok(false)`.
//!
//! Messages never include secret material.

/// Unified error type for all shopstack-hmac operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HmacError {
    /// A required argument was absent, or a value could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The keyed-hash primitive could not be created or keyed.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Rendering the tag to (or from) text failed.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl HmacError {
    /// Shorthand for an absent required argument.
    pub(crate) fn missing(operation: &str, argument: &str) -> Self {
        HmacError::InvalidInput(format!("{operation} requires {argument}"))
    }

    /// Stable code for this error, one of [`ERROR_CODES`].
    pub fn code(&self) -> &'static str {
        match self {
            HmacError::InvalidInput(_) => "INVALID_INPUT",
            HmacError::Initialization(_) => "INITIALIZATION_FAILED",
            HmacError::Encoding(_) => "ENCODING_FAILED",
        }
    }
}

// ── Error Code Registry ──────────────────────────────────────────────

/// Canonical error code registry.
///
/// Codes are stable across releases and safe to emit in logs or API
/// responses. Order matches the `HmacError` variant order.
pub const ERROR_CODES: [&str; 3] = ["INVALID_INPUT", "INITIALIZATION_FAILED", "ENCODING_FAILED"];

/// Returns `true` if the given string is a canonical error code.
pub fn is_valid_error_code(code: &str) -> bool {
    ERROR_CODES.contains(&code)
}
