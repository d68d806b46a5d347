//! Users service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{
    auth::{AuthServiceError, PasswordError},
    domain::users::validation::FieldViolation,
};

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("invalid signup payload")]
    Invalid(Vec<FieldViolation>),

    #[error("user already exists")]
    AlreadyExists,

    #[error("wrong email or password")]
    WrongCredentials,

    #[error("password storage error")]
    Password(#[from] PasswordError),

    #[error("token error")]
    Token(#[from] AuthServiceError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            _ => Self::Sql(error),
        }
    }
}
