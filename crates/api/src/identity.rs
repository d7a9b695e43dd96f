//! Unverified identity decoding
//!
//! The stored token is a compact JWT. The client only needs its display
//! claims, so the payload is decoded without signature verification; the
//! server remains the authority on token validity.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from decoding a stored token into an [`Identity`].
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("token is not in compact JWT form")]
    Malformed,

    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("claims are not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decoded, unverified claims from the stored token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Subject (user ID)
    pub sub: String,
    /// User's display name
    #[serde(default)]
    pub name: Option<String>,
    /// Expiration time (as UTC timestamp)
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued at (as UTC timestamp)
    #[serde(default)]
    pub iat: Option<i64>,
    /// Any claims we don't model explicitly
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Identity {
    /// Decode the payload segment of a compact JWT without verifying it.
    pub fn decode_unverified(token: &str) -> Result<Self, IdentityError> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next()) {
            (Some(_header), Some(payload)) => payload,
            _ => return Err(IdentityError::Malformed),
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_with_claims(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.unverified-signature")
    }

    #[test]
    fn decodes_known_claims() {
        let token = token_with_claims(&json!({
            "sub": "user-1",
            "name": "Aya",
            "exp": 1_900_000_000i64,
            "iat": 1_800_000_000i64,
            "role": "admin",
        }));

        let identity = Identity::decode_unverified(&token).unwrap();
        assert_eq!(identity.sub, "user-1");
        assert_eq!(identity.name.as_deref(), Some("Aya"));
        assert_eq!(identity.exp, Some(1_900_000_000));
        assert_eq!(identity.iat, Some(1_800_000_000));
        assert_eq!(identity.extra.get("role"), Some(&json!("admin")));
    }

    #[test]
    fn minimal_claims_decode() {
        let token = token_with_claims(&json!({"sub": "user-2"}));
        let identity = Identity::decode_unverified(&token).unwrap();
        assert_eq!(identity.sub, "user-2");
        assert_eq!(identity.name, None);
        assert_eq!(identity.exp, None);
    }

    #[test]
    fn rejects_non_jwt_strings() {
        assert!(matches!(
            Identity::decode_unverified("abc"),
            Err(IdentityError::Malformed)
        ));
        assert!(matches!(
            Identity::decode_unverified(""),
            Err(IdentityError::Malformed)
        ));
    }

    #[test]
    fn rejects_garbage_payloads() {
        assert!(matches!(
            Identity::decode_unverified("aGVhZGVy.!!!not-base64!!!.sig"),
            Err(IdentityError::Base64(_))
        ));

        let not_json = URL_SAFE_NO_PAD.encode(b"plain text");
        assert!(matches!(
            Identity::decode_unverified(&format!("aGVhZGVy.{not_json}.sig")),
            Err(IdentityError::Claims(_))
        ));
    }
}
