//! Images

pub mod errors;
pub mod models;
pub mod service;

pub use errors::ImagesServiceError;
pub use service::*;
