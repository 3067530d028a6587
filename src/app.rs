use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{config::AppConfig, database, error::Result, routes};

/// Shared per-request state, constructed once at startup. `db` is `None` in
/// mock/degraded mode; the template is read from disk once and held for the
/// process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<PgPool>,
    pub template: Option<Arc<String>>,
    pub admin_credentials: Option<Arc<(String, String)>>,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests() -> Self {
        Self {
            db: None,
            template: None,
            admin_credentials: None,
        }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;

    let template_path = config.assets.public_dir.join("index.html");
    let template = match std::fs::read_to_string(&template_path) {
        Ok(content) => Some(Arc::new(content)),
        Err(e) => {
            tracing::warn!(
                "Could not read {}: {}; news pages fall back to the query-string variant",
                template_path.display(),
                e
            );
            None
        }
    };

    let state = AppState {
        db: pool,
        template,
        admin_credentials: config.admin.credentials().map(Arc::new),
    };

    let mut app = routes::create_router(state.clone())
        .fallback_service(ServeDir::new(&config.assets.public_dir))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(TraceLayer::new_for_http());

    if !config.cors.allowed_origins.is_empty() {
        let allowed_origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
            .allow_origin(allowed_origins);

        app = app.layer(cors);
    }

    Ok(app.with_state(state))
}
