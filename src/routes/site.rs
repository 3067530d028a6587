use axum::{Json, extract::State};

use crate::{AppState, error::Result, services::site_service};

pub async fn get_site(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let site = site_service::get_site(&state).await?;

    Ok(Json(site))
}
