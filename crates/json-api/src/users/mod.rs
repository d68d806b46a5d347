//! Users

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

mod errors;
pub(crate) mod login;
pub(crate) mod signup;

/// Identity token issued on signup or login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenResponse {
    pub success: bool,

    /// Value to send back in the `auth-token` header
    pub token: String,
}
