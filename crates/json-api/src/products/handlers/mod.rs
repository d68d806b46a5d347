//! Product Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::products::records::ProductRecord;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;

/// A catalog product as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Sequential product id
    pub id: i64,
    pub name: String,
    pub image1: String,
    pub image2: String,
    pub image3: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,

    /// Creation time (RFC 3339)
    pub date: String,
    pub available: bool,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.get(),
            name: product.name,
            image1: product.image1,
            image2: product.image2,
            image3: product.image3,
            category: product.category,
            new_price: product.new_price,
            old_price: product.old_price,
            date: product.date.to_string(),
            available: product.available,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use shopfront_app::domain::products::records::{ProductId, ProductRecord};

    pub(super) fn make_product(id: i64, name: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id),
            name: name.to_owned(),
            image1: "http://localhost:4000/images/product_1.png".to_owned(),
            image2: "http://localhost:4000/images/product_2.png".to_owned(),
            image3: "http://localhost:4000/images/product_3.png".to_owned(),
            category: "kid".to_owned(),
            new_price: 50.0,
            old_price: 80.5,
            date: Timestamp::UNIX_EPOCH,
            available: true,
        }
    }
}
