//! Carts service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("user not found")]
    UserNotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::UserNotFound;
        }

        Self::Sql(error)
    }
}
