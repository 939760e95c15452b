//! HMAC-SHA256 request signing for `SIGNED` endpoints.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::error::BinanceError;

type HmacSha256 = Hmac<Sha256>;

/// Signs query strings with the account secret.
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    /// Create a signer for the given secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Lowercase hex HMAC-SHA256 of `payload`.
    pub fn sign(&self, payload: &str) -> Result<String, BinanceError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| BinanceError::Signing(e.to_string()))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Append `&signature=` to an already-encoded query string.
    pub fn signed_query(&self, query: &str) -> Result<String, BinanceError> {
        let signature = self.sign(query)?;
        Ok(format!("{query}&signature={signature}"))
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Milliseconds since the Unix epoch, as the `timestamp` parameter expects.
#[must_use]
pub fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}
