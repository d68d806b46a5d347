//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// Another product already holds the allocated id.
    #[error("a product with this id already exists")]
    AlreadyExists,

    #[error("product is missing a required field")]
    MissingRequiredData,

    /// A column constraint rejected the product, such as a non-positive id.
    #[error("product data was rejected by storage")]
    InvalidData,

    #[error("product storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        let kind = error.as_database_error().map(DatabaseError::kind);

        match kind {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
