//! Root Handler

use salvo::prelude::*;

/// Plain-text confirmation that the server is up.
pub(crate) const RUNNING_MESSAGE: &str = "Shopfront API is running";

/// Root handler
#[endpoint(tags("health"), summary = "Server running confirmation")]
pub(crate) async fn handler() -> &'static str {
    RUNNING_MESSAGE
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_root_reports_running() -> TestResult {
        let router = Router::new().get(handler);

        let body = TestClient::get("http://example.com/")
            .send(&Service::new(router))
            .await
            .take_string()
            .await?;

        assert_eq!(body, RUNNING_MESSAGE);

        Ok(())
    }
}
