//! HMAC generation — keyed SHA-256 over UTF-8 content.
//!
//! The HMAC state is keyed once, in the constructor, so a bad secret is
//! reported when the generator is built rather than on first use. Each
//! `generate` call clones that pre-keyed state and finalizes the clone,
//! which keeps the generator free of shared mutable state and usable
//! from many threads at once.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::constants::{HMAC_ALGORITHM, TAG_LENGTH};
use crate::encoding::Encoding;
use crate::errors::HmacError;
use crate::secret::Secret;

type HmacSha256 = Hmac<Sha256>;

/// Generates SHA-256 HMAC codes for a fixed secret and encoding.
#[derive(Clone)]
pub struct HmacGenerator {
    mac: HmacSha256,
    encoding: Encoding,
}

impl HmacGenerator {
    /// Build a generator that renders codes as Base64.
    ///
    /// # Errors
    /// Returns `HmacError::Initialization` if the key is rejected.
    pub fn new(secret: impl Into<Secret>) -> Result<Self, HmacError> {
        Self::with_encoding(secret, Encoding::default())
    }

    /// Build a generator with an explicit output encoding.
    ///
    /// An empty secret is rejected key material.
    ///
    /// # Errors
    /// Returns `HmacError::Initialization` if the key is rejected.
    pub fn with_encoding(secret: impl Into<Secret>, encoding: Encoding) -> Result<Self, HmacError> {
        let secret = secret.into();
        let mac = init_mac(&secret)?;
        tracing::debug!(%encoding, "hmac generator initialized");
        Ok(HmacGenerator { mac, encoding })
    }

    /// The configured output encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Compute the raw HMAC-SHA256 tag of `content`.
    ///
    /// # Errors
    /// Returns `HmacError::InvalidInput` if `content` is `None`.
    pub fn generate_tag<'a>(
        &self,
        content: impl Into<Option<&'a str>>,
    ) -> Result<[u8; TAG_LENGTH], HmacError> {
        let content = content
            .into()
            .ok_or_else(|| HmacError::missing("generate", "content"))?;

        let mut mac = self.mac.clone();
        mac.update(content.as_bytes());
        Ok(mac.finalize().into_bytes().into())
    }

    /// Generate the encoded HMAC code for `content`.
    ///
    /// Deterministic: the same secret, encoding and content always yield
    /// the same code. Empty content is valid.
    ///
    /// # Errors
    /// - `HmacError::InvalidInput` if `content` is `None`.
    /// - `HmacError::Encoding` if the tag cannot be rendered.
    pub fn generate<'a>(&self, content: impl Into<Option<&'a str>>) -> Result<String, HmacError> {
        let tag = self.generate_tag(content)?;
        self.encoding.encode(&tag).inspect_err(|e| {
            tracing::error!(
                encoding = %self.encoding,
                error = %e,
                "unable to encode the hmac"
            );
        })
    }
}

impl fmt::Debug for HmacGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacGenerator")
            .field("algorithm", &HMAC_ALGORITHM)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

fn init_mac(secret: &Secret) -> Result<HmacSha256, HmacError> {
    if secret.is_empty() {
        tracing::error!(
            algorithm = HMAC_ALGORITHM,
            "unable to initialize the hmac generator: empty key"
        );
        return Err(HmacError::Initialization(format!("{HMAC_ALGORITHM}: empty key")));
    }
    HmacSha256::new_from_slice(secret.expose()).map_err(|e| {
        tracing::error!(
            algorithm = HMAC_ALGORITHM,
            error = %e,
            "unable to initialize the hmac generator"
        );
        HmacError::Initialization(format!("{HMAC_ALGORITHM}: {e}"))
    })
}
