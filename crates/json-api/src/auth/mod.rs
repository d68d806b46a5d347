//! Authentication

pub(crate) mod middleware;

/// Header clients send their identity token in.
pub(crate) const AUTH_TOKEN_HEADER: &str = "auth-token";
