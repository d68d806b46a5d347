//! Remove From Cart Handler

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

/// Remove From Cart Handler
///
/// Removes one unit from the requested slot; quantities never drop below zero.
#[endpoint(
    tags("carts"),
    summary = "Remove From Cart",
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
        .remove_from_cart(user, slot)
        .await
        .map_err(into_api_error)?;

    Ok(Json(CartQuantityResponse {
        success: true,
        quantity,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use shopfront_app::domain::carts::{CartsServiceError, MockCartsService, models::CartSlot};

    use crate::test_helpers::{Mocks, TEST_USER_UUID};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        Mocks {
            carts,
            ..Mocks::default()
        }
        .authenticated_service(Router::with_path("removefromcart").post(handler))
    }

    #[tokio::test]
    async fn test_remove_from_cart_returns_new_quantity() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .withf(|user, slot| *user == TEST_USER_UUID && *slot == CartSlot::FIRST)
            .return_once(|_, _| Ok(0));

        let mut res = TestClient::post("http://example.com/removefromcart")
            .json(&json!({ "itemId": 1 }))
            .send(&make_service(carts))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!({ "success": true, "quantity": 0 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_cart_missing_item_id_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_remove_from_cart().never();

        let res = TestClient::post("http://example.com/removefromcart")
            .json(&json!({}))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_cart_storage_error_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::post("http://example.com/removefromcart")
            .json(&json!({ "itemId": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
