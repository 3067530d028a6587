mod admin;
mod health;
mod news;
mod pages;
mod products;
mod site;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::AppState;

pub fn create_router(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/admin", get(admin::index))
        .route("/admin/products", get(admin::products))
        .route("/admin/products/new", post(admin::product_create))
        .route("/admin/products/{id}/edit", get(admin::product_edit))
        .route("/admin/products/{id}", post(admin::product_update))
        .route("/admin/products/{id}/delete", post(admin::product_delete))
        .route("/admin/news", get(admin::news))
        .route(
            "/admin/news/add",
            get(admin::news_add_form).post(admin::news_create),
        )
        .route("/admin/news/{id}/edit", get(admin::news_edit))
        .route("/admin/news/{id}", post(admin::news_update))
        .route("/admin/news/{id}/delete", post(admin::news_delete))
        .route("/admin/hero", get(admin::hero))
        .route("/admin/hero/save", post(admin::hero_save))
        .route("/admin/site", get(admin::site))
        .route("/admin/site/brand", post(admin::site_brand))
        .route("/admin/site/topbar", post(admin::site_topbar))
        .route("/admin/site/footer", post(admin::site_footer))
        .route("/admin/site/brochure/{slug}", post(admin::site_brochure))
        .layer(middleware::from_fn_with_state(
            state,
            crate::middleware::admin_auth,
        ));

    Router::new()
        .route("/", get(pages::index))
        .route("/news/{id}", get(pages::news_detail))
        .route("/api/products", get(products::list_products))
        .route("/api/products/{id}", get(products::get_product))
        .route("/api/news", get(news::list_news))
        .route("/api/news/{id}", get(news::get_news))
        .route("/api/site", get(site::get_site))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .merge(admin_routes)
}
