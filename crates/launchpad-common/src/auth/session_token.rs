//! Opaque session token generation
//!
//! Tokens carry no claims; they are random keys into the session store.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// 256 bits of entropy
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Encoded length of a token (unpadded base64 of 32 bytes)
const ENCODED_LEN: usize = 43;

/// Generate a fresh URL-safe session token
#[must_use]
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Cheap shape check before hitting the session store
#[must_use]
pub fn looks_like_session_token(token: &str) -> bool {
    token.len() == ENCODED_LEN
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_session_token();
        assert_eq!(token.len(), ENCODED_LEN);
        assert!(looks_like_session_token(&token));
        assert_eq!(URL_SAFE_NO_PAD.decode(&token).unwrap().len(), SESSION_TOKEN_BYTES);
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_session_token(), generate_session_token());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!looks_like_session_token(""));
        assert!(!looks_like_session_token("short"));
        assert!(!looks_like_session_token(&"+".repeat(ENCODED_LEN)));
    }
}
