//! Remove Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::products::records::ProductId;

use crate::{errors::ApiError, extensions::*, products::errors::into_api_error, state::State};

/// Remove Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemoveProductRequest {
    /// Id of the product to remove
    pub id: i64,
}

/// Product Removed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRemovedResponse {
    pub success: bool,
    pub message: String,
}

/// Remove Product Handler
///
/// Succeeds whether or not a product with the id existed.
#[endpoint(
    tags("products"),
    summary = "Remove Product",
    responses(
        (status_code = StatusCode::OK, description = "Product removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RemoveProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductRemovedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .remove_product(ProductId::new(json.into_inner().id))
        .await
        .map_err(|error| into_api_error(error, "failed to remove product"))?;

    Ok(Json(ProductRemovedResponse {
        success: true,
        message: "Product removed".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use shopfront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::Mocks;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        Mocks {
            products,
            ..Mocks::default()
        }
        .service(Router::with_path("removeproduct").post(handler))
    }

    #[tokio::test]
    async fn test_remove_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_remove_product()
            .once()
            .withf(|id| *id == ProductId::new(3))
            .return_once(|_| Ok(1));

        let mut res = TestClient::post("http://example.com/removeproduct")
            .json(&json!({ "id": 3 }))
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!({ "success": true, "message": "Product removed" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_unknown_product_still_succeeds() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_remove_product()
            .once()
            .return_once(|_| Ok(0));

        let res = TestClient::post("http://example.com/removeproduct")
            .json(&json!({ "id": 99 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_product_storage_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_remove_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::post("http://example.com/removeproduct")
            .json(&json!({ "id": 3 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
