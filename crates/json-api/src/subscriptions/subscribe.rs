//! Subscribe Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use shopfront_app::domain::subscriptions::SubscriptionsServiceError;

use crate::{errors::ApiError, extensions::*, state::State};

/// Subscribe Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscribeRequest {
    pub email: Option<String>,
}

/// Subscribe Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscribedResponse {
    pub message: String,
}

fn into_api_error(error: SubscriptionsServiceError) -> ApiError {
    match error {
        SubscriptionsServiceError::InvalidEmail => {
            ApiError::error(StatusCode::BAD_REQUEST, "Invalid email address")
        }
        SubscriptionsServiceError::AlreadySubscribed => {
            ApiError::error(StatusCode::BAD_REQUEST, "Email is already subscribed")
        }
        SubscriptionsServiceError::Sql(source) => {
            error!("failed to store subscription: {source}");

            ApiError::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred. Please try again later.",
            )
        }
    }
}

/// Subscribe Handler
///
/// Registers an email address for the newsletter, once.
#[endpoint(
    tags("subscriptions"),
    summary = "Subscribe",
    responses(
        (status_code = StatusCode::OK, description = "Subscribed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid or duplicate email"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SubscribeRequest>,
    depot: &mut Depot,
) -> Result<Json<SubscribedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(email) = json.into_inner().email else {
        return Err(into_api_error(SubscriptionsServiceError::InvalidEmail));
    };

    state
        .app
        .subscriptions
        .subscribe(email)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SubscribedResponse {
        message: "Thank you for subscribing!".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use shopfront_app::domain::subscriptions::{
        MockSubscriptionsService, records::SubscriptionRecord,
    };

    use crate::test_helpers::Mocks;

    use super::*;

    fn make_service(subscriptions: MockSubscriptionsService) -> Service {
        Mocks {
            subscriptions,
            ..Mocks::default()
        }
        .service(Router::with_path("subscribe").post(handler))
    }

    async fn subscribe(subscriptions: MockSubscriptionsService, body: Value) -> (StatusCode, Value) {
        let mut res = TestClient::post("http://example.com/subscribe")
            .json(&body)
            .send(&make_service(subscriptions))
            .await;

        let status = res.status_code.unwrap_or(StatusCode::OK);
        let body = res.take_json().await.unwrap_or(Value::Null);

        (status, body)
    }

    #[tokio::test]
    async fn test_subscribe_success() -> TestResult {
        let mut subscriptions = MockSubscriptionsService::new();

        subscriptions
            .expect_subscribe()
            .once()
            .withf(|email| email == "a@x.com")
            .return_once(|email| {
                Ok(SubscriptionRecord {
                    email,
                    date: Timestamp::UNIX_EPOCH,
                })
            });

        let (status, body) = subscribe(subscriptions, json!({ "email": "a@x.com" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Thank you for subscribing!" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_missing_email_returns_400() -> TestResult {
        let mut subscriptions = MockSubscriptionsService::new();

        subscriptions.expect_subscribe().never();

        let (status, body) = subscribe(subscriptions, json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid email address" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_invalid_email_returns_400() -> TestResult {
        let mut subscriptions = MockSubscriptionsService::new();

        subscriptions
            .expect_subscribe()
            .once()
            .return_once(|_| Err(SubscriptionsServiceError::InvalidEmail));

        let (status, body) = subscribe(subscriptions, json!({ "email": "not-an-email" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid email address" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_duplicate_returns_400() -> TestResult {
        let mut subscriptions = MockSubscriptionsService::new();

        subscriptions
            .expect_subscribe()
            .once()
            .return_once(|_| Err(SubscriptionsServiceError::AlreadySubscribed));

        let (status, body) = subscribe(subscriptions, json!({ "email": "a@x.com" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Email is already subscribed" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_storage_error_returns_500() -> TestResult {
        let mut subscriptions = MockSubscriptionsService::new();

        subscriptions
            .expect_subscribe()
            .once()
            .return_once(|_| Err(SubscriptionsServiceError::Sql(sqlx::Error::PoolClosed)));

        let (status, body) = subscribe(subscriptions, json!({ "email": "a@x.com" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "An error occurred. Please try again later." })
        );

        Ok(())
    }
}
