//! User Data

/// Signup submission. Fields stay optional so validation can report every
/// missing value at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Identity token issued at signup or login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub user: super::records::UserUuid,
    pub token: String,
}
