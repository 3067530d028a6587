use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{AppState, database, error::Result};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    match &state.db {
        Some(pool) => {
            database::check_health(pool).await?;
            Ok((
                StatusCode::OK,
                Json(json!({
                    "status": "ready",
                    "database": "connected"
                })),
            ))
        }
        None => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "degraded",
                "database": "not_configured"
            })),
        )),
    }
}
