//! Conformance: Encoding Mismatch
//!
//! A verifier configured with encoding E2 MUST reject a code generated
//! with E1 != E2 by returning `Ok(false)`. It MUST NOT error and MUST
//! NOT pass.

use shopstack_hmac::{Encoding, HmacGenerator, HmacVerifier};

use crate::fixtures::{generate_content, generate_secret, init_tracing};

fn check(gen_encoding: Encoding, ver_encoding: Encoding) {
    let secret = generate_secret();
    let content = generate_content();

    let generator = HmacGenerator::with_encoding(secret.as_str(), gen_encoding).unwrap();
    let verifier = HmacVerifier::with_encoding(secret.as_str(), ver_encoding).unwrap();

    let code = generator.generate(content.as_str()).unwrap();
    tracing::info!(%gen_encoding, %code, "generated hmac");

    let result = verifier.verify(code.as_str(), content.as_str());
    assert_eq!(
        result,
        Ok(false),
        "{gen_encoding} code under {ver_encoding} verifier"
    );
}

#[test]
fn conformance_base16_code_rejected_by_base64_verifier() {
    init_tracing();
    check(Encoding::Base16, Encoding::Base64);
}

#[test]
fn conformance_base64_code_rejected_by_base16_verifier() {
    init_tracing();
    check(Encoding::Base64, Encoding::Base16);
}

#[test]
fn conformance_default_verifier_expects_base64() {
    let secret = generate_secret();
    let content = generate_content();
    let hex_code = HmacGenerator::with_encoding(secret.as_str(), Encoding::Base16)
        .unwrap()
        .generate(content.as_str())
        .unwrap();
    let b64_code = HmacGenerator::new(secret.as_str())
        .unwrap()
        .generate(content.as_str())
        .unwrap();

    let verifier = HmacVerifier::new(secret.as_str()).unwrap();
    assert_eq!(verifier.encoding(), Encoding::Base64);
    assert!(verifier.verify(b64_code.as_str(), content.as_str()).unwrap());
    assert!(!verifier.verify(hex_code.as_str(), content.as_str()).unwrap());
}
