//! Create Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::products::data::NewProduct;

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error,
    products::handlers::ProductResponse, state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,
    pub image1: String,
    pub image2: String,
    pub image3: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            image1: request.image1,
            image2: request.image2,
            image3: request.image3,
            category: request.category,
            new_price: request.new_price,
            old_price: request.old_price,
        }
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    pub success: bool,

    /// The stored product, including its assigned id
    pub product: ProductResponse,
}

/// Create Product Handler
///
/// Stores the product under the next sequential id.
#[endpoint(
    tags("products"),
    summary = "Add Product",
    responses(
        (status_code = StatusCode::OK, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, "failed to create product"))?;

    Ok(Json(ProductCreatedResponse {
        success: true,
        product: product.into(),
    }))
}
