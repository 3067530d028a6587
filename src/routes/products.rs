use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{clamp_page, clamp_public_limit, Page, Product, ProductFilter},
    services::product_service,
};

#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    pub category: Option<String>,
    pub price: Option<String>,
    /// Tag filter, named after the certification badge it selects.
    pub standard: Option<String>,
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Result<Json<Page<Product>>> {
    let filter = ProductFilter::from_params(
        params.category,
        params.price,
        params.standard,
        params.sort,
    );
    let page = clamp_page(params.page.unwrap_or(1));
    let limit = clamp_public_limit(params.limit.unwrap_or(8));

    let listing = product_service::list(&state, &filter, page, limit).await?;

    Ok(Json(listing))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = product_service::get(&state, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;

    Ok(Json(product))
}
