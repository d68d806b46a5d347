//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error,
    products::handlers::ProductResponse, state::State,
};

/// Product Index Handler
///
/// Returns every product, ordered by id.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(|error| into_api_error(error, "failed to fetch products"))?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
