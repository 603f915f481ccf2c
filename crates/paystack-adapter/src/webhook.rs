/*
[INPUT]:  Secret key, raw webhook request body, x-paystack-signature header
[OUTPUT]: Hex HMAC-SHA512 signatures and verification results
[POS]:    Webhook layer - authenticity checks for incoming events
[UPDATE]: When the signing scheme changes
*/

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::http::{PaystackError, Result};

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the signature of a webhook body
pub const SIGNATURE_HEADER: &str = "x-paystack-signature";

fn keyed(secret: &str) -> Result<HmacSha512> {
    HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|err| PaystackError::Config(format!("invalid webhook key: {err}")))
}

/// Lowercase hex HMAC-SHA512 of `body` keyed with `secret`
pub fn sign(secret: &str, body: &[u8]) -> Result<String> {
    let mut mac = keyed(secret)?;
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check a signature header against the raw body.
///
/// Comparison is constant time. Surrounding whitespace and uppercase hex are
/// accepted; anything that is not hex fails verification.
pub fn verify(secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };
    let Ok(mut mac) = keyed(secret) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SECRET: &str = "sk_test_webhook";
    const BODY: &[u8] = br#"{"event":"charge.success","data":{"id":302961,"amount":10000}}"#;

    #[test]
    fn sign_is_lowercase_hex_sha512() {
        let signature = sign(SECRET, BODY).expect("sign");
        assert_eq!(signature.len(), 128);
        assert!(signature.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn known_vector() {
        // RFC 4231 test case 2
        let signature = sign("Jefe", b"what do ya want for nothing?").expect("sign");
        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn verifies_own_signature() {
        let signature = sign(SECRET, BODY).expect("sign");
        assert!(verify(SECRET, BODY, &signature));
        assert!(verify(SECRET, BODY, &format!("  {}\n", signature.to_uppercase())));
    }

    #[rstest]
    #[case::tampered_body(SECRET, br#"{"event":"charge.success","data":{"id":302961,"amount":1}}"#)]
    #[case::wrong_secret("sk_test_other", BODY)]
    fn rejects_mismatch(#[case] secret: &str, #[case] body: &[u8]) {
        let signature = sign(SECRET, BODY).expect("sign");
        assert!(!verify(secret, body, &signature));
    }

    #[rstest]
    #[case("")]
    #[case("not-hex")]
    #[case("abc")]
    fn rejects_malformed_signature(#[case] signature: &str) {
        assert!(!verify(SECRET, BODY, signature));
    }

    #[test]
    fn rejects_flipped_digit() {
        let mut signature = sign(SECRET, BODY).expect("sign");
        let last = if signature.ends_with('0') { "1" } else { "0" };
        signature.replace_range(127.., last);
        assert!(!verify(SECRET, BODY, &signature));
    }
}
