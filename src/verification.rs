use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex HMAC of the raw body.
pub const SIGNATURE_HEADER: &str = "x-nylas-signature";

/// Lowercase hex HMAC-SHA256 of `body` keyed with `secret`.
pub fn sign(body: &[u8], secret: &[u8]) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(body);
    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a Nylas signature over the exact request bytes.
///
/// The digest is compared byte-for-byte in constant time, so the time taken
/// does not depend on where the first mismatch sits.
pub fn verify(body: &[u8], secret: &[u8], signature: &str) -> bool {
    let computed_hex = match sign(body, secret) {
        Some(h) => h,
        None => return false,
    };
    computed_hex.as_bytes().ct_eq(signature.as_bytes()).into()
}
