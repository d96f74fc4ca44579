//! HMAC verification — recompute, then compare in constant time.
//!
//! The candidate is compared against the freshly generated code with
//! `subtle::ConstantTimeEq`, which reveals only whether the lengths
//! differ, never how many leading bytes matched.
//!
//! A wrong code is `Ok(false)`. Only an absent argument is an error.

use subtle::ConstantTimeEq;

use crate::encoding::Encoding;
use crate::errors::HmacError;
use crate::generator::HmacGenerator;
use crate::secret::Secret;

/// Verifies HMAC codes for a fixed secret and encoding.
///
/// Codes produced with a different encoding never verify, even when
/// the secret and content match.
#[derive(Debug, Clone)]
pub struct HmacVerifier {
    generator: HmacGenerator,
}

impl HmacVerifier {
    /// Build a verifier for Base64 codes.
    ///
    /// # Errors
    /// Returns `HmacError::Initialization` if the key is rejected.
    pub fn new(secret: impl Into<Secret>) -> Result<Self, HmacError> {
        Self::with_encoding(secret, Encoding::default())
    }

    /// Build a verifier for codes in the given encoding.
    ///
    /// # Errors
    /// Returns `HmacError::Initialization` if the key is rejected.
    pub fn with_encoding(secret: impl Into<Secret>, encoding: Encoding) -> Result<Self, HmacError> {
        Ok(HmacVerifier {
            generator: HmacGenerator::with_encoding(secret, encoding)?,
        })
    }

    /// Wrap an existing generator.
    pub fn from_generator(generator: HmacGenerator) -> Self {
        HmacVerifier { generator }
    }

    /// The generator used to recompute codes.
    pub fn generator(&self) -> &HmacGenerator {
        &self.generator
    }

    /// The encoding candidates are expected in.
    pub fn encoding(&self) -> Encoding {
        self.generator.encoding()
    }

    /// Check whether `candidate` authenticates `content`.
    ///
    /// # Errors
    /// Returns `HmacError::InvalidInput` if either argument is `None`.
    /// A mismatched, malformed or differently encoded candidate is
    /// `Ok(false)`, not an error.
    pub fn verify<'a, 'b>(
        &self,
        candidate: impl Into<Option<&'a str>>,
        content: impl Into<Option<&'b str>>,
    ) -> Result<bool, HmacError> {
        let candidate = candidate
            .into()
            .ok_or_else(|| HmacError::missing("verify", "candidate code"))?;
        let content = content
            .into()
            .ok_or_else(|| HmacError::missing("verify", "content"))?;

        let expected = self.generator.generate(content)?;
        let matched: bool = candidate.as_bytes().ct_eq(expected.as_bytes()).into();

        if !matched {
            tracing::debug!(encoding = %self.encoding(), "hmac verification failed");
        }
        Ok(matched)
    }
}

impl From<HmacGenerator> for HmacVerifier {
    fn from(generator: HmacGenerator) -> Self {
        HmacVerifier::from_generator(generator)
    }
}
