use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{clamp_page, clamp_public_limit, News, Page},
    services::news_service,
};

#[derive(Debug, Deserialize)]
pub struct NewsListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<NewsListParams>,
) -> Result<Json<Page<News>>> {
    let page = clamp_page(params.page.unwrap_or(1));
    let limit = clamp_public_limit(params.limit.unwrap_or(6));

    let listing = news_service::list(&state, page, limit).await?;

    Ok(Json(listing))
}

pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<News>> {
    let news = news_service::get(&state, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;

    Ok(Json(news))
}
