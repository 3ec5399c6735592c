//! CSRF token provider consumed by `render_form`.

use std::fmt;

use hex::encode as hex_encode;
use rand::RngCore;
use sha2::{Digest, Sha256};

#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Fresh random token: 32 bytes from the OS RNG, hex encoded.
    pub fn generate() -> Self {
        let mut b = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut b);
        CsrfToken(hex_encode(b))
    }

    /// Stable token for a session, so it can be recomputed on submit
    /// without storing it.
    pub fn for_session(secret: &str, session_id: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hasher.update(b":");
        hasher.update(session_id.as_bytes());
        CsrfToken(hex_encode(hasher.finalize()))
    }

    pub fn from_string(token: impl Into<String>) -> Self {
        CsrfToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time comparison against a submitted value.
    pub fn verify(&self, candidate: &str) -> bool {
        let expected = self.0.as_bytes();
        let candidate = candidate.as_bytes();
        if expected.len() != candidate.len() {
            return false;
        }
        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(..)")
    }
}
