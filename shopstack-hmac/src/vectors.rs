//! Golden vector generator.
//!
//! Renders the fixed HMAC cases as JSON in the same shape as the
//! committed `tests/vectors/hmac.vectors.json`. The equivalence test
//! regenerates them and compares against the committed file, so any
//! drift in hashing or encoding shows up as a diff.
//!
//! Test-only surface: compiled with the `vectors` feature.

use serde::Serialize;

use crate::encoding::Encoding;
use crate::errors::HmacError;
use crate::generator::HmacGenerator;

const WARNING: &str =
    "GENERATED — do not edit. Regenerate with vectors::generate_hmac_json().";

const DESCRIPTION: &str =
    "HMAC-SHA256 over UTF-8 content, rendered as base64 (padded) and lowercase base16";

/// Fixed (name, secret, content) inputs.
const CASES: &[(&str, &str, &str)] = &[
    ("json-object", "shpss_testsecret1234567890123456", r#"{"test":"abc"}"#),
    (
        "json-object-one-char-changed",
        "shpss_testsecret1234567890123456",
        r#"{"test":"abd"}"#,
    ),
    ("empty-content", "shpss_testsecret1234567890123456", ""),
    (
        "non-ascii-content",
        "shpss_testsecret1234567890123456",
        r#"{ "test": "héllo wörld ✓" }"#,
    ),
    ("rfc4231-case-2", "Jefe", "what do ya want for nothing?"),
];

#[derive(Serialize)]
struct HmacVectors {
    #[serde(rename = "_WARNING")]
    warning: &'static str,
    description: &'static str,
    algorithm: &'static str,
    vectors: Vec<HmacVector>,
}

#[derive(Serialize)]
struct HmacVector {
    id: &'static str,
    secret_utf8: &'static str,
    content_utf8: &'static str,
    base64: String,
    base16: String,
}

fn build_vector(
    id: &'static str,
    secret: &'static str,
    content: &'static str,
) -> Result<HmacVector, HmacError> {
    let base64 = HmacGenerator::with_encoding(secret, Encoding::Base64)?.generate(content)?;
    let base16 = HmacGenerator::with_encoding(secret, Encoding::Base16)?.generate(content)?;
    Ok(HmacVector {
        id,
        secret_utf8: secret,
        content_utf8: content,
        base64,
        base16,
    })
}

/// Generate the HMAC golden vectors as pretty-printed JSON.
///
/// # Errors
/// Propagates any generator failure; serialization errors surface as
/// `HmacError::Encoding`.
pub fn generate_hmac_json() -> Result<String, HmacError> {
    let vectors = CASES
        .iter()
        .map(|&(id, secret, content)| build_vector(id, secret, content))
        .collect::<Result<Vec<_>, _>>()?;

    let doc = HmacVectors {
        warning: WARNING,
        description: DESCRIPTION,
        algorithm: crate::constants::HMAC_ALGORITHM,
        vectors,
    };
    serde_json::to_string_pretty(&doc)
        .map_err(|e| HmacError::Encoding(format!("vectors json: {e}")))
}
