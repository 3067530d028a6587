use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::Result,
    models::{
        AdminSortKey, BrandForm, BrochureForm, FooterForm, HeroForm, NewsForm, ProductForm,
        TopbarForm, clamp_admin_per_page, clamp_page, total_pages,
    },
    services::{news_service, product_service, site_service},
    views::admin,
};

const DEFAULT_PER_PAGE: i64 = 10;

fn opt(raw: &str) -> Option<&str> {
    if raw.is_empty() { None } else { Some(raw) }
}

pub async fn index() -> Html<String> {
    Html(admin::dashboard())
}

#[derive(Debug, Deserialize)]
pub struct ProductAdminParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

pub async fn products(
    State(state): State<AppState>,
    Query(params): Query<ProductAdminParams>,
) -> Result<Response> {
    if state.db.is_none() {
        return Ok(Html(admin::db_notice(
            "Products",
            "/admin/products",
            "Kết nối database để quản lý sản phẩm.",
        ))
        .into_response());
    }

    let category = params.category.unwrap_or_default().trim().to_string();
    let search = params.q.unwrap_or_default().trim().to_string();
    let sort = AdminSortKey::parse(params.sort.as_deref().unwrap_or_default());
    let page = clamp_page(params.page.unwrap_or(1));
    let per_page = clamp_admin_per_page(params.per_page.unwrap_or(DEFAULT_PER_PAGE));

    let categories = product_service::categories(&state).await?;
    let (rows, total) =
        product_service::admin_search(&state, opt(&category), opt(&search), sort, page, per_page)
            .await?;

    let view = admin::ProductListView {
        rows: &rows,
        categories: &categories,
        total,
        page,
        total_pages: total_pages(total, per_page),
        per_page,
        category: &category,
        search: &search,
        sort,
    };

    Ok(Html(admin::products_page(&view)).into_response())
}

pub async fn product_create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    product_service::create(&state, &form.into_fields()).await?;
    Ok(Redirect::to("/admin/products"))
}

pub async fn product_edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    match product_service::get_for_edit(&state, id).await? {
        Some(product) => Ok(Html(admin::product_edit_page(&product)).into_response()),
        None => Ok(Redirect::to("/admin/products").into_response()),
    }
}

pub async fn product_update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    product_service::update(&state, id, &form.into_fields()).await?;
    Ok(Redirect::to("/admin/products"))
}

pub async fn product_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    product_service::delete(&state, id).await?;
    Ok(Redirect::to("/admin/products"))
}

#[derive(Debug, Deserialize)]
pub struct NewsAdminParams {
    pub q: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

pub async fn news(
    State(state): State<AppState>,
    Query(params): Query<NewsAdminParams>,
) -> Result<Response> {
    if state.db.is_none() {
        return Ok(Html(admin::db_notice(
            "News",
            "/admin/news",
            "Kết nối database để quản lý tin tức.",
        ))
        .into_response());
    }

    let search = params.q.unwrap_or_default().trim().to_string();
    let page = clamp_page(params.page.unwrap_or(1));
    let per_page = clamp_admin_per_page(params.per_page.unwrap_or(DEFAULT_PER_PAGE));

    let (rows, total) = news_service::admin_search(&state, opt(&search), page, per_page).await?;

    let view = admin::NewsListView {
        rows: &rows,
        total,
        page,
        total_pages: total_pages(total, per_page),
        per_page,
        search: &search,
    };

    Ok(Html(admin::news_page(&view)).into_response())
}

pub async fn news_add_form() -> Html<String> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    Html(admin::news_add_page(&today))
}

pub async fn news_create(
    State(state): State<AppState>,
    Form(form): Form<NewsForm>,
) -> Result<Redirect> {
    news_service::create(&state, form).await?;
    Ok(Redirect::to("/admin/news"))
}

pub async fn news_edit(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    match news_service::get_for_edit(&state, id).await? {
        Some(news) => Ok(Html(admin::news_edit_page(&news)).into_response()),
        None => Ok(Redirect::to("/admin/news").into_response()),
    }
}

pub async fn news_update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<NewsForm>,
) -> Result<Redirect> {
    news_service::update(&state, id, form).await?;
    Ok(Redirect::to("/admin/news"))
}

pub async fn news_delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    news_service::delete(&state, id).await?;
    Ok(Redirect::to("/admin/news"))
}

pub async fn hero(State(state): State<AppState>) -> Result<Response> {
    if state.db.is_none() {
        return Ok(Html(admin::db_notice(
            "Hero",
            "/admin/hero",
            "Kết nối database để sửa Hero.",
        ))
        .into_response());
    }

    let hero = site_service::hero_for_edit(&state).await?;
    Ok(Html(admin::hero_page(&hero)).into_response())
}

pub async fn hero_save(
    State(state): State<AppState>,
    Form(form): Form<HeroForm>,
) -> Result<Redirect> {
    site_service::update_hero(&state, &form).await?;
    Ok(Redirect::to("/admin/hero"))
}

pub async fn site(State(state): State<AppState>) -> Result<Response> {
    if state.db.is_none() {
        return Ok(Html(admin::db_notice(
            "Site Config",
            "/admin/site",
            "Kết nối database để sửa cấu hình.",
        ))
        .into_response());
    }

    let brand = site_service::config_section(&state, "brand").await?;
    let topbar = site_service::config_section(&state, "topbar").await?;
    let footer = site_service::config_section(&state, "footer").await?;
    let brochures = site_service::brochures_for_admin(&state).await?;

    Ok(Html(admin::site_page(&brand, &topbar, &footer, &brochures)).into_response())
}

pub async fn site_brand(
    State(state): State<AppState>,
    Form(form): Form<BrandForm>,
) -> Result<Redirect> {
    site_service::update_brand(&state, &form).await?;
    Ok(Redirect::to("/admin/site"))
}

pub async fn site_topbar(
    State(state): State<AppState>,
    Form(form): Form<TopbarForm>,
) -> Result<Redirect> {
    site_service::update_topbar(&state, &form).await?;
    Ok(Redirect::to("/admin/site"))
}

pub async fn site_footer(
    State(state): State<AppState>,
    Form(form): Form<FooterForm>,
) -> Result<Redirect> {
    site_service::update_footer(&state, &form).await?;
    Ok(Redirect::to("/admin/site"))
}

pub async fn site_brochure(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<BrochureForm>,
) -> Result<Redirect> {
    site_service::update_brochure(&state, &slug, &form).await?;
    Ok(Redirect::to("/admin/site"))
}
