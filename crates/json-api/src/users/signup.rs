//! Signup Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::users::data::NewUser;

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    users::{TokenResponse, errors::into_api_error},
};

/// Signup Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<SignupRequest> for NewUser {
    fn from(request: SignupRequest) -> Self {
        NewUser {
            username: request.username,
            email: request.email,
            password: request.password,
        }
    }
}

/// Signup Handler
///
/// Creates a user with an empty cart and returns an identity token.
#[endpoint(
    tags("users"),
    summary = "Sign Up",
    responses(
        (status_code = StatusCode::OK, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid fields or existing user"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SignupRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let issued = state
        .app
        .users
        .signup(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(TokenResponse {
        success: true,
        token: issued.token,
    }))
}
