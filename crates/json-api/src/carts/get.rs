//! Get Cart Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::prelude::*;

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Get Cart Handler
///
/// Returns every slot of the caller's cart, keyed by slot number.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("auth_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Slot to quantity map"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BTreeMap<String, u32>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(
        cart.iter()
            .map(|(slot, quantity)| (slot.to_string(), quantity))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use shopfront_app::domain::carts::{
        CartsServiceError, MockCartsService,
        models::{CartData, CartSlot},
    };

    use crate::test_helpers::{Mocks, TEST_USER_UUID};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        Mocks {
            carts,
            ..Mocks::default()
        }
        .authenticated_service(Router::with_path("getcart").post(handler))
    }

    #[tokio::test]
    async fn test_get_cart_returns_every_slot() -> TestResult {
        let mut cart = CartData::empty();
        cart.increment(CartSlot::FIRST);
        cart.increment(CartSlot::FIRST);

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(cart));

        let mut res = TestClient::post("http://example.com/getcart")
            .send(&make_service(carts))
            .await;

        let body: Value = res.take_json().await?;
        let slots = body.as_object().ok_or("expected a JSON object")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(slots.len(), 300);
        assert_eq!(slots.get("1"), Some(&json!(2)));
        assert_eq!(slots.get("300"), Some(&json!(0)));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_cart_unknown_user_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::UserNotFound));

        let res = TestClient::post("http://example.com/getcart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
