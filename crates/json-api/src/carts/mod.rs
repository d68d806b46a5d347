//! Carts

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

mod errors;
pub(crate) mod add;
pub(crate) mod get;
pub(crate) mod remove;

/// Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemRequest {
    /// Cart slot (product id) in `1..=300`
    #[serde(rename = "itemId")]
    pub item_id: Option<i64>,
}

/// Quantity held in a slot after an update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartQuantityResponse {
    pub success: bool,
    pub quantity: u32,
}
