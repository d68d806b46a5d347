//! Auth service.

use jiff::Timestamp;
use mockall::automock;

use crate::{
    auth::{AuthServiceError, TokenSecret, decode_identity_token, encode_identity_token},
    domain::users::records::UserUuid,
};

/// Issues and verifies identity tokens with a shared secret.
#[derive(Debug, Clone)]
pub struct JwtAuthService {
    secret: TokenSecret,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(secret: TokenSecret) -> Self {
        Self { secret }
    }
}

impl AuthService for JwtAuthService {
    fn issue_token(&self, user: UserUuid) -> Result<String, AuthServiceError> {
        encode_identity_token(user, Timestamp::now(), &self.secret)
            .map_err(AuthServiceError::Signing)
    }

    fn authenticate(&self, token: &str) -> Result<UserUuid, AuthServiceError> {
        decode_identity_token(token, &self.secret)
            .map(|claims| UserUuid::from_uuid(claims.id))
            .map_err(AuthServiceError::InvalidToken)
    }
}

#[automock]
pub trait AuthService: Send + Sync {
    /// Sign a new identity token for `user`.
    fn issue_token(&self, user: UserUuid) -> Result<String, AuthServiceError>;

    /// Verify `token` and return the identity it carries.
    fn authenticate(&self, token: &str) -> Result<UserUuid, AuthServiceError>;
}
