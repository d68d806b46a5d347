//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::users::data::Credentials;

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    users::{TokenResponse, errors::into_api_error},
};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

/// Login Handler
///
/// Exchanges an email and password for an identity token.
#[endpoint(
    tags("users"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::BAD_REQUEST, description = "Wrong email or password"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let LoginRequest { email, password } = json.into_inner();

    let issued = state
        .app
        .users
        .login(Credentials { email, password })
        .await
        .map_err(into_api_error)?;

    Ok(Json(TokenResponse {
        success: true,
        token: issued.token,
    }))
}
