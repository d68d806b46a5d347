//! Password storage.
//!
//! Plaintext storage only exists for compatibility with rows written by the
//! legacy backend and must be opted into explicitly.

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    },
};
use rand::rngs::OsRng;
use thiserror::Error;

/// How user passwords are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PasswordStorage {
    /// Argon2id PHC strings.
    #[default]
    Argon2,

    /// INSECURE: passwords stored exactly as submitted (legacy compatibility).
    Plaintext,
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(password_hash::Error),
}

/// Hashes and verifies passwords according to the configured storage mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passwords {
    storage: PasswordStorage,
}

impl Passwords {
    #[must_use]
    pub const fn new(storage: PasswordStorage) -> Self {
        Self { storage }
    }

    #[must_use]
    pub const fn storage(&self) -> PasswordStorage {
        self.storage
    }

    /// Produce the value to persist for `password`.
    ///
    /// # Errors
    ///
    /// Returns an error if Argon2 hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        match self.storage {
            PasswordStorage::Plaintext => Ok(password.to_owned()),
            PasswordStorage::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);

                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(PasswordError::Hash)
            }
        }
    }

    /// Check `password` against a stored value.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        match self.storage {
            PasswordStorage::Plaintext => password == stored,
            PasswordStorage::Argon2 => PasswordHash::new(stored).is_ok_and(|hash| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &hash)
                    .is_ok()
            }),
        }
    }
}
