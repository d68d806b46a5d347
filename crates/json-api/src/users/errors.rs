//! User Errors

use salvo::http::StatusCode;
use serde_json::json;
use tracing::error;

use shopfront_app::domain::users::UsersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: UsersServiceError) -> ApiError {
    match error {
        UsersServiceError::Invalid(violations) => ApiError::new(
            StatusCode::BAD_REQUEST,
            json!({ "success": false, "errors": violations }),
        ),
        UsersServiceError::AlreadyExists => ApiError::new(
            StatusCode::BAD_REQUEST,
            json!({ "success": false, "error": "User already exists" }),
        ),
        UsersServiceError::WrongCredentials => ApiError::new(
            StatusCode::BAD_REQUEST,
            json!({ "success": false, "errors": "Wrong email or password" }),
        ),
        UsersServiceError::Password(source) => {
            error!("failed to process password: {source}");

            ApiError::internal()
        }
        UsersServiceError::Token(source) => {
            error!("failed to issue identity token: {source}");

            ApiError::internal()
        }
        UsersServiceError::Sql(source) => {
            error!("failed to access users: {source}");

            ApiError::internal()
        }
    }
}
