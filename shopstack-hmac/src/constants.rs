//! Algorithm and length constants.

/// Name of the keyed-hash algorithm, as reported in diagnostics.
pub const HMAC_ALGORITHM: &str = "HmacSHA256";

/// Raw HMAC-SHA256 tag length in bytes.
pub const TAG_LENGTH: usize = 32;

/// Length of a Base64 (padded) encoded tag in characters.
pub const BASE64_TAG_LENGTH: usize = 44;

/// Length of a Base16 (lowercase hex) encoded tag in characters.
pub const BASE16_TAG_LENGTH: usize = 64;
