use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{AppState, services::news_service, views::seo};

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub news: Option<String>,
}

/// The storefront template, SEO-rendered in place when `?news={id}` resolves
/// to an article.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<IndexParams>,
) -> Response {
    if let Some(raw_id) = params.news.as_deref() {
        if let Ok(id) = raw_id.parse::<i32>() {
            match news_service::get(&state, id).await {
                Ok(Some(news)) => {
                    if let Some(template) = &state.template {
                        let url = request_url(&headers, &uri);
                        return Html(seo::render_detail(template, &news, &url)).into_response();
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::error!("Failed to load article {}: {}", raw_id, e),
            }
        }
    }

    match &state.template {
        Some(template) => Html(template.as_ref().clone()).into_response(),
        None => Html("Mountain Harvest - Add public/index.html".to_string()).into_response(),
    }
}

/// SEO-rendered article page. Missing articles go back to the storefront;
/// a missing template falls back to the query-string variant of `/`.
pub async fn news_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> Response {
    let news = match news_service::get(&state, id).await {
        Ok(Some(news)) => news,
        Ok(None) => return Redirect::to("/").into_response(),
        Err(e) => {
            tracing::error!("Failed to render news page {}: {}", id, e);
            return Redirect::to("/").into_response();
        }
    };

    match &state.template {
        Some(template) => {
            let url = request_url(&headers, &uri);
            Html(seo::render_detail(template, &news, &url)).into_response()
        }
        None => Redirect::to(&format!("/?news={}", id)).into_response(),
    }
}

/// Reconstructs the externally visible request URL, honoring the proxy
/// scheme header when present.
fn request_url(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    format!("{}://{}{}", scheme, host, uri)
}
