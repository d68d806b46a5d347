//! JSON error responses.

use salvo::{
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation},
    prelude::{Json, Response},
    writing::Scribe,
};
use serde_json::{Value, json};

/// Body rendered for unexpected server-side failures.
pub(crate) const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// An error response: a status code plus the JSON body clients expect for it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    #[must_use]
    pub(crate) fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// `{"error": message}` with the given status.
    #[must_use]
    pub(crate) fn error(status: StatusCode, message: &str) -> Self {
        Self::new(status, json!({ "error": message }))
    }

    #[must_use]
    pub(crate) fn internal() -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub(crate) fn body(&self) -> &Value {
        &self.body
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(self.body));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(_components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::UNAUTHORIZED, "Unauthorized"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR),
        ] {
            operation
                .responses
                .insert(status.as_str(), oapi::Response::new(description));
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn failing() -> Result<&'static str, ApiError> {
        Err(ApiError::error(StatusCode::BAD_REQUEST, "Invalid cart slot"))
    }

    #[tokio::test]
    async fn error_renders_status_and_json_body() -> TestResult {
        let router = Router::with_path("fail").get(failing);

        let mut res = TestClient::get("http://example.com/fail")
            .send(&Service::new(router))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body, json!({ "error": "Invalid cart slot" }));

        Ok(())
    }

    #[test]
    fn internal_error_uses_the_generic_message() {
        let error = ApiError::internal();

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body(), &json!({ "error": "Internal Server Error" }));
    }
}
