//! Revalidation webhook signature verification.
//!
//! The CMS signs each delivery with HMAC-SHA256 over the raw request body
//! using a shared secret, hex-encoded into the `x-vidamed-signature`
//! header. Verification recomputes the digest over the exact bytes received;
//! any single-byte mutation of the body invalidates the signature.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex HMAC-SHA256 digest of the request body.
pub const SIGNATURE_HEADER: &str = "x-vidamed-signature";

/// Verify a webhook delivery signature.
///
/// # Arguments
///
/// * `secret` - The shared webhook secret
/// * `body` - The raw request body, byte for byte as received
/// * `signature` - The hex digest from the signature header
///
/// # Returns
///
/// `true` if the signature matches, `false` otherwise.
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    if secret.is_empty() || signature.is_empty() {
        warn!(
            has_secret = !secret.is_empty(),
            has_signature = !signature.is_empty(),
            "webhook_signature_missing_fields"
        );
        return false;
    }

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("webhook_signature_invalid_key");
            return false;
        }
    };

    mac.update(body);

    let expected_signature = hex::encode(mac.finalize().into_bytes());

    // Constant-time comparison to prevent timing attacks
    let valid = constant_time_compare(&expected_signature, signature);

    if !valid {
        warn!(
            expected_length = expected_signature.len(),
            actual_length = signature.len(),
            "webhook_signature_mismatch"
        );
    }

    valid
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Whether a usable webhook secret is configured.
pub fn is_secret_configured(secret: &Option<String>) -> bool {
    secret
        .as_ref()
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}

/// Compute the hex signature for a body. Used by tests and by operators
/// signing manual deliveries.
pub fn sign_body(secret: &str, body: &[u8]) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(body);
    Some(hex::encode(mac.finalize().into_bytes()))
}
