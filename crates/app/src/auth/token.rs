//! Identity token signing and verification.

use std::fmt;

use jiff::Timestamp;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::users::records::UserUuid;

/// Algorithm used for every identity token.
pub const IDENTITY_TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Shared secret used to sign and verify identity tokens.
#[derive(Clone)]
pub struct TokenSecret {
    bytes: Vec<u8>,
}

impl TokenSecret {
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: secret.into(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(**redacted**)")
    }
}

impl Drop for TokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Claims embedded in an identity token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Storage-assigned user identifier.
    pub id: Uuid,

    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
}

/// Sign an identity token for `user`. No expiry claim is emitted.
///
/// # Errors
///
/// Returns an error if the claims cannot be serialised or signed.
pub fn encode_identity_token(
    user: UserUuid,
    issued_at: Timestamp,
    secret: &TokenSecret,
) -> Result<String, Error> {
    let claims = IdentityClaims {
        id: user.into_uuid(),
        iat: issued_at.as_second(),
    };

    encode(
        &Header::new(IDENTITY_TOKEN_ALGORITHM),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify the signature of `token` and decode its claims.
///
/// Tokens never expire; `exp` is neither required nor checked.
///
/// # Errors
///
/// Returns an error when the token is malformed or signed with another secret.
pub fn decode_identity_token(token: &str, secret: &TokenSecret) -> Result<IdentityClaims, Error> {
    let mut validation = Validation::new(IDENTITY_TOKEN_ALGORITHM);

    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}
