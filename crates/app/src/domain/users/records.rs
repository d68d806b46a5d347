//! User Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::carts::models::CartData;

/// Storage-assigned user identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserUuid(Uuid);

impl UserUuid {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for UserUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for UserUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for UserUuid {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,

    /// Stored password: an Argon2 PHC string, or the raw password when
    /// plaintext storage is enabled.
    pub password: String,
    pub cart_data: CartData,
    pub date: Timestamp,
}
