//! Newsletter Subscriptions

pub(crate) mod subscribe;
