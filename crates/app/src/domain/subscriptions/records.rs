//! Subscription Records

use jiff::Timestamp;

/// Subscription Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRecord {
    pub email: String,
    pub date: Timestamp,
}

/// Newsletter addresses only need an `@` somewhere in them.
#[must_use]
pub fn is_subscribable(email: &str) -> bool {
    email.contains('@')
}
