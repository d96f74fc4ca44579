//! Encoding utilities — base64 and hex.
//!
//! The raw 32-byte tag is rendered as text before it leaves the crate.
//! Base64 uses the `base64` crate's STANDARD engine (RFC 4648 alphabet,
//! `=` padding). Base16 uses the `hex` crate (lowercase, no separators,
//! no prefix).
//!
//! Both renderings write into a sized buffer through the crates'
//! slice APIs, so a short buffer surfaces as `HmacError::Encoding`
//! instead of a panic.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::HmacError;

/// Text rendering for an HMAC tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    /// RFC 4648 standard alphabet with `=` padding.
    #[default]
    Base64,
    /// Lowercase hexadecimal, two characters per byte.
    #[cfg_attr(feature = "serde", serde(alias = "hex"))]
    Base16,
}

impl Encoding {
    /// All supported encodings, in declaration order.
    pub const ALL: [Encoding; 2] = [Encoding::Base64, Encoding::Base16];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Base64 => "base64",
            Encoding::Base16 => "base16",
        }
    }

    /// Number of characters produced for `len` input bytes.
    pub fn encoded_len(self, len: usize) -> usize {
        match self {
            Encoding::Base64 => len.div_ceil(3) * 4,
            Encoding::Base16 => len * 2,
        }
    }

    /// Render `data` into `out`, returning the number of bytes written.
    ///
    /// # Errors
    /// Returns `HmacError::Encoding` if `out` is shorter than
    /// [`encoded_len`](Self::encoded_len).
    pub fn encode_to_slice(self, data: &[u8], out: &mut [u8]) -> Result<usize, HmacError> {
        match self {
            Encoding::Base64 => STANDARD
                .encode_slice(data, out)
                .map_err(|e| HmacError::Encoding(format!("base64: {e}"))),
            Encoding::Base16 => {
                let len = self.encoded_len(data.len());
                let available = out.len();
                let target = out.get_mut(..len).ok_or_else(|| {
                    HmacError::Encoding(format!(
                        "base16: output buffer too small ({available} < {len})"
                    ))
                })?;
                hex::encode_to_slice(data, target)
                    .map_err(|e| HmacError::Encoding(format!("base16: {e}")))?;
                Ok(len)
            }
        }
    }

    /// Render `data` as text.
    ///
    /// # Errors
    /// Returns `HmacError::Encoding` if rendering fails.
    pub fn encode(self, data: &[u8]) -> Result<String, HmacError> {
        let mut buf = vec![0u8; self.encoded_len(data.len())];
        let written = self.encode_to_slice(data, &mut buf)?;
        buf.truncate(written);
        String::from_utf8(buf).map_err(|e| HmacError::Encoding(format!("{self}: {e}")))
    }

    /// Parse text produced by [`encode`](Self::encode) back to bytes.
    ///
    /// Base16 input must be lowercase; uppercase hex is not what this
    /// encoding produces and is rejected.
    ///
    /// # Errors
    /// Returns `HmacError::Encoding` on malformed input.
    pub fn decode(self, encoded: &str) -> Result<Vec<u8>, HmacError> {
        match self {
            Encoding::Base64 => STANDARD
                .decode(encoded)
                .map_err(|e| HmacError::Encoding(format!("invalid base64: {e}"))),
            Encoding::Base16 => {
                if encoded.bytes().any(|b| b.is_ascii_uppercase()) {
                    return Err(HmacError::Encoding("invalid hex: uppercase digits".into()));
                }
                hex::decode(encoded).map_err(|e| HmacError::Encoding(format!("invalid hex: {e}")))
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = HmacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base64" => Ok(Encoding::Base64),
            "base16" | "hex" => Ok(Encoding::Base16),
            other => Err(HmacError::InvalidInput(format!("unknown encoding '{other}'"))),
        }
    }
}
