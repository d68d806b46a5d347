//! Products Data

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub image1: String,
    pub image2: String,
    pub image3: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,
}
