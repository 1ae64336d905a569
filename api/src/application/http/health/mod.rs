use axum::extract::State;
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use larder_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub ping_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub database: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let ping_ms = state.service.health().await.map_err(ApiError::from)?;
    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        ping_ms,
    }))
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 500, description = "Database unreachable"),
    ),
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<ReadinessResponse>, ApiError> {
    let database = state.service.readiness().await.map_err(ApiError::from)?;
    if !database.connected {
        return Err(ApiError::InternalServerError(
            "database not ready".to_string(),
        ));
    }
    Ok(Response::OK(ReadinessResponse { database }))
}

#[derive(OpenApi)]
#[openapi(paths(health, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health", state.args.server.root_path),
            get(health),
        )
        .route(
            &format!("{}/health/ready", state.args.server.root_path),
            get(readiness),
        )
}
