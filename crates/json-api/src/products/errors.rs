//! Product Errors

use salvo::http::StatusCode;
use tracing::error;

use shopfront_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError, context: &str) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists => {
            ApiError::error(StatusCode::BAD_REQUEST, "Product already exists")
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            ApiError::error(StatusCode::BAD_REQUEST, "Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("{context}: {source}");

            ApiError::internal()
        }
    }
}
