//! Conformance: Error Code Mapping
//!
//! Each failure kind maps to a distinct, registered code so callers can
//! tell a misconfigured system from a bad request.
//! - InvalidInput   — absent argument, unknown encoding name
//! - Initialization — rejected key material
//! - Encoding       — tag rendering failure

use shopstack_hmac::errors::{is_valid_error_code, ERROR_CODES};
use shopstack_hmac::{Encoding, HmacError, HmacGenerator, HmacVerifier};

#[test]
fn conformance_error_display_format_stable() {
    let cases: Vec<(HmacError, &str)> = vec![
        (
            HmacError::InvalidInput("verify requires content".into()),
            "Invalid input: verify requires content",
        ),
        (
            HmacError::Initialization("HmacSHA256: empty key".into()),
            "Initialization error: HmacSHA256: empty key",
        ),
        (
            HmacError::Encoding("base64: buffer too small".into()),
            "Encoding error: base64: buffer too small",
        ),
    ];

    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "HmacError display drift detected");
    }
}

#[test]
fn conformance_error_is_std_error() {
    let err = HmacError::Initialization("test".into());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn conformance_kinds_are_distinct() {
    let invalid = HmacGenerator::new("k")
        .unwrap()
        .generate(None::<&str>)
        .unwrap_err();
    let init = HmacVerifier::new("").unwrap_err();
    let mut short = [0u8; 4];
    let encoding = Encoding::Base64
        .encode_to_slice(&[0u8; 32], &mut short)
        .unwrap_err();

    let codes = [invalid.code(), init.code(), encoding.code()];
    assert_eq!(codes, ERROR_CODES);
    for code in codes {
        assert!(is_valid_error_code(code));
    }
}

#[test]
fn conformance_errors_never_echo_secret() {
    let secret = "shpss_must_not_appear_anywhere_00";
    let generator = HmacGenerator::new(secret).unwrap();
    let err = generator.generate(None::<&str>).unwrap_err();
    assert!(!err.to_string().contains(secret));
    assert!(!format!("{err:?}").contains(secret));
    assert!(!format!("{generator:?}").contains(secret));

    let verifier = HmacVerifier::new(secret).unwrap();
    assert!(!format!("{verifier:?}").contains(secret));
}

#[test]
fn conformance_unknown_encoding_name_is_invalid_input() {
    let err = "rot13".parse::<Encoding>().unwrap_err();
    assert_eq!(err.code(), "INVALID_INPUT");
}
