//! Webhook authentication via HMAC-SHA256 payload signatures.

pub mod signature;

use secrecy::{ExposeSecret, SecretString};

use crate::error::AuthError;

pub use signature::{SIGNATURE_ALGORITHM, sign, signature_header};

/// Wrapper type for the secret shared with the form provider.
/// Uses `SecretString` to prevent accidental logging and zeroize on drop.
///
/// # Security features
/// - `Debug` prints `[REDACTED]` instead of the actual value
/// - Memory is zeroed when dropped (via `zeroize`)
/// - Explicit `.expose_secret()` required to access the value
#[derive(Clone)]
pub struct WebhookSecret(SecretString);

impl WebhookSecret {
    /// Create a new WebhookSecret from a string.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(SecretString::from(secret.into()))
    }

    /// Verify a `Typeform-Signature` header value against the raw request body.
    ///
    /// `header` is `None` when the request carried no signature header.
    pub fn verify(&self, raw_body: &[u8], header: Option<&str>) -> Result<(), AuthError> {
        signature::verify(self.0.expose_secret().as_bytes(), raw_body, header)
    }

    /// Compute the header value the provider would send for `raw_body`.
    pub fn header_for(&self, raw_body: &[u8]) -> String {
        signature_header(self.0.expose_secret().as_bytes(), raw_body)
    }
}

impl From<SecretString> for WebhookSecret {
    fn from(secret: SecretString) -> Self {
        Self(secret)
    }
}

impl std::fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WebhookSecret([REDACTED])")
    }
}
