//! Typeform-style payload signatures.
//!
//! The header has the form `sha256=<base64 HMAC-SHA256 digest>`. The digest is
//! computed over the raw request bytes, before any JSON decoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// The only accepted algorithm token.
pub const SIGNATURE_ALGORITHM: &str = "sha256";

/// Compute the base64-encoded HMAC-SHA256 of `raw_body` keyed by `secret`.
pub fn sign(secret: &[u8], raw_body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(raw_body);
    BASE64.encode(mac.finalize().into_bytes())
}

/// Build the full header value, e.g. `sha256=q1w2...=`.
pub fn signature_header(secret: &[u8], raw_body: &[u8]) -> String {
    format!("{}={}", SIGNATURE_ALGORITHM, sign(secret, raw_body))
}

/// Split a header into `(algorithm, signature)`.
///
/// Only the first `=` separates; base64 padding stays with the signature.
pub fn parse_header(header: Option<&str>) -> Result<(&str, &str), AuthError> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Err(AuthError::MissingSignature),
    };

    let (algorithm, signature) = header
        .split_once('=')
        .ok_or(AuthError::MalformedHeader)?;

    if algorithm != SIGNATURE_ALGORITHM {
        return Err(AuthError::UnsupportedAlgorithm(algorithm.to_string()));
    }

    Ok((algorithm, signature))
}

/// Verify `header` against the HMAC of `raw_body`.
///
/// The comparison is constant-time over the base64 text, so neither the
/// position of the first differing byte nor a length mismatch short-circuits.
pub fn verify(secret: &[u8], raw_body: &[u8], header: Option<&str>) -> Result<(), AuthError> {
    let (_, provided) = parse_header(header)?;
    let expected = sign(secret, raw_body);

    if bool::from(expected.as_bytes().ct_eq(provided.as_bytes())) {
        Ok(())
    } else {
        Err(AuthError::InvalidSignature)
    }
}
