//! Add To Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::{
        CartItemRequest, CartQuantityResponse,
        errors::{into_api_error, parse_slot},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Add To Cart Handler
///
/// Adds one unit to the requested slot of the caller's cart.
#[endpoint(
    tags("carts"),
    summary = "Add To Cart",
    security(("auth_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid cart slot"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartQuantityResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let slot = parse_slot(json.into_inner().item_id)?;

    let quantity = state
        .app
        .carts
        .add_to_cart(user, slot)
        .await
        .map_err(into_api_error)?;

    Ok(Json(CartQuantityResponse {
        success: true,
        quantity,
    }))
}
