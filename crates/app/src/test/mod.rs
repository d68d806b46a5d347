//! Shared infrastructure for storage-backed tests.

pub(crate) mod helpers;

pub(crate) use context::{TEST_TOKEN_SECRET, TestContext};
