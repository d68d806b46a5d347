//! Storefront Domain Concerns

pub mod carts;
pub mod images;
pub mod products;
pub mod subscriptions;
pub mod users;
