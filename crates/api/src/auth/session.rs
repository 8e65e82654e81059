//! HMAC-signed session tokens carried in the admin cookie.
//!
//! A token is `"{user_id}:{RFC3339 timestamp}|{hex(HMAC-SHA256)}"`. The
//! plaintext grammar cannot produce `|`, and verification splits on the last
//! occurrence regardless, so the signature boundary is unambiguous. The
//! signing secret lives only in process memory: restarting the server
//! invalidates every outstanding session, which is intentional.

use std::sync::Arc;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use gazette_core::types::DbId;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie, scoped to the `/admin` path prefix.
pub const SESSION_COOKIE: &str = "gazette_session";

/// Issues and verifies signed session tokens.
///
/// Cheaply cloneable; constructed once at startup and shared via `AppState`.
#[derive(Clone)]
pub struct SessionSigner {
    secret: Arc<[u8; 32]>,
    ttl: Duration,
}

impl SessionSigner {
    pub fn new(secret: [u8; 32], ttl_days: i64) -> Self {
        SessionSigner {
            secret: Arc::new(secret),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Generate a fresh process-lifetime signing secret.
    pub fn generate_secret() -> [u8; 32] {
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        secret
    }

    /// Issue a token for a user id, stamped with the current time.
    pub fn issue(&self, user_id: DbId) -> String {
        self.issue_at(user_id, Utc::now())
    }

    fn issue_at(&self, user_id: DbId, issued: DateTime<Utc>) -> String {
        let plaintext = format!(
            "{user_id}:{}",
            issued.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let signature = self.sign(&plaintext);
        format!("{plaintext}|{signature}")
    }

    /// Verify a token and return the embedded user id.
    ///
    /// `None` on any defect: missing separator, bad hex, signature mismatch,
    /// unparseable principal or timestamp, or an expired issue time. The
    /// cookie's own max-age already bounds the lifetime on cooperating
    /// clients; the embedded timestamp is enforced here as well so a
    /// replayed cookie cannot outlive the TTL.
    pub fn verify(&self, token: &str) -> Option<DbId> {
        self.verify_at(token, Utc::now())
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Option<DbId> {
        let (plaintext, signature) = token.rsplit_once('|')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = HmacSha256::new_from_slice(self.secret.as_ref())
            .expect("HMAC accepts any key length");
        mac.update(plaintext.as_bytes());
        // verify_slice compares in constant time.
        mac.verify_slice(&signature).ok()?;

        let (user_id, issued) = plaintext.split_once(':')?;
        let user_id: DbId = user_id.parse().ok()?;
        let issued = DateTime::parse_from_rfc3339(issued)
            .ok()?
            .with_timezone(&Utc);

        if issued + self.ttl < now {
            return None;
        }

        Some(user_id)
    }

    fn sign(&self, plaintext: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_ref())
            .expect("HMAC accepts any key length");
        mac.update(plaintext.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> SessionSigner {
        SessionSigner::new([42u8; 32], 7)
    }

    #[test]
    fn issue_verify_roundtrip() {
        let signer = signer();
        let token = signer.issue(17);
        assert_eq!(signer.verify(&token), Some(17));
    }

    #[test]
    fn every_tampered_signature_byte_is_rejected() {
        let signer = signer();
        let token = signer.issue(1);
        let sep = token.rfind('|').expect("token has a separator");

        for pos in sep + 1..token.len() {
            let mut bytes = token.clone().into_bytes();
            // Replace with a different hex digit so the string stays valid hex.
            bytes[pos] = if bytes[pos] == b'0' { b'1' } else { b'0' };
            let tampered = String::from_utf8(bytes).unwrap();
            assert_eq!(signer.verify(&tampered), None, "byte {pos} accepted");
        }
    }

    #[test]
    fn tampered_plaintext_is_rejected() {
        let signer = signer();
        let token = signer.issue(1);
        // Claim a different principal while keeping the old signature.
        let forged = format!("2{}", &token[1..]);
        assert_eq!(signer.verify(&forged), None);
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let other = SessionSigner::new([7u8; 32], 7);
        let token = other.issue(1);
        assert_eq!(signer().verify(&token), None);
    }

    #[test]
    fn expired_token_is_rejected() {
        let signer = signer();
        let issued = Utc::now() - Duration::days(8);
        let token = signer.issue_at(5, issued);
        assert_eq!(signer.verify(&token), None);

        // The same token is fine when checked within the TTL window.
        assert_eq!(signer.verify_at(&token, issued + Duration::days(6)), Some(5));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let signer = signer();
        for garbage in ["", "no-separator", "1:2020-01-01T00:00:00Z|nothex!", "|", "abc|"] {
            assert_eq!(signer.verify(garbage), None, "{garbage:?} accepted");
        }
    }

    #[test]
    fn nonnumeric_principal_is_rejected() {
        let signer = signer();
        // Sign a plaintext whose principal is not a number; the signature is
        // valid but parsing must still fail closed.
        let plaintext = format!("root:{}", Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        let token = format!("{plaintext}|{}", signer.sign(&plaintext));
        assert_eq!(signer.verify(&token), None);
    }
}
