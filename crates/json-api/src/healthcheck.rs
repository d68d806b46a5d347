//! Healthcheck Handler

use std::sync::Arc;

use salvo::{http::StatusCode, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State};

/// Database connectivity as seen by the healthcheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DatabaseHealth {
    Up,
    Down,
    Unconfigured,
}

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable
    pub status: String,

    pub database: DatabaseHealth,
}

/// Healthcheck handler
///
/// Responds 503 while the database cannot be reached.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Service healthy"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Database unreachable"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let database = match state.app.database_reachable().await {
        Some(true) => DatabaseHealth::Up,
        Some(false) => DatabaseHealth::Down,
        None => DatabaseHealth::Unconfigured,
    };

    let status = if database == DatabaseHealth::Down {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        "degraded"
    } else {
        "ok"
    };

    Ok(Json(HealthResponse {
        status: status.to_owned(),
        database,
    }))
}
