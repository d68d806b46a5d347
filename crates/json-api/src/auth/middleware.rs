//! Auth middleware.

use std::sync::Arc;

use salvo::{http::StatusCode, prelude::*};
use serde_json::json;
use tracing::{debug, error};

use shopfront_app::auth::AuthServiceError;

use crate::{
    auth::AUTH_TOKEN_HEADER,
    errors::ApiError,
    extensions::*,
    observability::{AuthRejection, record_auth_rejection},
    state::State,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_auth_token(req) else {
        record_auth_rejection(AuthRejection::MissingToken);
        res.render(unauthorized("Please authenticate using a valid token"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let user = match state.app.auth.authenticate(token) {
        Ok(user) => user,
        Err(AuthServiceError::InvalidToken(source)) => {
            debug!("rejected identity token: {source}");
            record_auth_rejection(AuthRejection::InvalidToken);

            res.render(unauthorized("Please authenticate"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Signing(source)) => {
            error!("failed to process identity token: {source}");

            res.render(ApiError::internal());
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_user_uuid(user);

    ctrl.call_next(req, depot, res).await;
}

fn extract_auth_token(req: &Request) -> Option<&str> {
    let token = req.headers().get(AUTH_TOKEN_HEADER)?.to_str().ok()?.trim();

    (!token.is_empty()).then_some(token)
}

fn unauthorized(message: &str) -> ApiError {
    ApiError::new(StatusCode::UNAUTHORIZED, json!({ "errors": message }))
}
