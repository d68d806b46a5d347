//! Product Records

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Sequential numeric product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// The id assigned to the first product of an empty catalog.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub image1: String,
    pub image2: String,
    pub image3: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,
    pub date: Timestamp,
    pub available: bool,
}
