//! Cart Errors

use salvo::http::StatusCode;
use tracing::error;

use shopfront_app::domain::carts::{
    CartsServiceError,
    models::{CartSlot, CartSlotError},
};

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::UserNotFound => ApiError::error(StatusCode::NOT_FOUND, "User not found"),
        CartsServiceError::Sql(source) => {
            error!("failed to access cart: {source}");

            ApiError::internal()
        }
    }
}

/// Parse a client-supplied item id into a cart slot.
pub(crate) fn parse_slot(item_id: Option<i64>) -> Result<CartSlot, ApiError> {
    item_id
        .ok_or(CartSlotError(0))
        .and_then(CartSlot::try_from)
        .map_err(|_invalid| ApiError::error(StatusCode::BAD_REQUEST, "Invalid cart slot"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_outside_the_cart_are_rejected() {
        for item_id in [None, Some(0), Some(-1), Some(301)] {
            let error = parse_slot(item_id).err();

            assert_eq!(
                error.map(|error| error.status()),
                Some(StatusCode::BAD_REQUEST),
                "expected {item_id:?} to be rejected"
            );
        }
    }

    #[test]
    fn slots_inside_the_cart_are_accepted() {
        assert_eq!(parse_slot(Some(1)).ok(), Some(CartSlot::FIRST));
        assert_eq!(parse_slot(Some(300)).ok(), Some(CartSlot::LAST));
    }
}
