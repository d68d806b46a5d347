//! Depot helper extensions.

use std::any::Any;

use salvo::{http::StatusCode, prelude::Depot};
use serde_json::json;
use tracing::error;

use shopfront_app::domain::users::records::UserUuid;

use crate::errors::ApiError;

/// Helpers for reading request-scoped values out of the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_user_uuid(&mut self, user: UserUuid);

    fn user_uuid_or_401(&self) -> Result<UserUuid, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(
                "missing {} in request depot",
                std::any::type_name::<T>()
            );

            ApiError::internal()
        })
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.inject(user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, ApiError> {
        self.obtain::<UserUuid>().copied().map_err(|_missing| {
            ApiError::new(
                StatusCode::UNAUTHORIZED,
                json!({ "errors": "Please authenticate" }),
            )
        })
    }
}
