//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("identity token is invalid")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("failed to sign identity token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}
