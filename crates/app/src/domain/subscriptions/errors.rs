//! Subscriptions service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubscriptionsServiceError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("email is already subscribed")]
    AlreadySubscribed,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SubscriptionsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadySubscribed,
            Some(ErrorKind::CheckViolation) => Self::InvalidEmail,
            _ => Self::Sql(error),
        }
    }
}
