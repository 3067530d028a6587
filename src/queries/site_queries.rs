use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Brochure, BrochureForm, Category, SiteConfigEntry},
};

pub async fn config_all(pool: &PgPool) -> Result<HashMap<String, serde_json::Value>> {
    let rows = sqlx::query_as::<_, SiteConfigEntry>("SELECT key, value FROM site_config")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|r| (r.key, r.value)).collect())
}

pub async fn config_get(pool: &PgPool, key: &str) -> Result<Option<serde_json::Value>> {
    let value = sqlx::query_scalar("SELECT value FROM site_config WHERE key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(value)
}

pub async fn config_set(pool: &PgPool, key: &str, value: &serde_json::Value) -> Result<()> {
    sqlx::query(
        "INSERT INTO site_config (key, value) VALUES ($1, $2) \
         ON CONFLICT (key) DO UPDATE SET value = $2",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn categories(pool: &PgPool) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, sort_order FROM categories ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

pub async fn brochures(pool: &PgPool) -> Result<Vec<Brochure>> {
    let brochures = sqlx::query_as::<_, Brochure>(
        "SELECT slug, title, \"desc\", image, button_text FROM category_brochures ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(brochures)
}

pub async fn update_brochure(pool: &PgPool, slug: &str, form: &BrochureForm) -> Result<()> {
    sqlx::query(
        "UPDATE category_brochures SET title = $1, \"desc\" = $2, image = $3, button_text = $4 \
         WHERE slug = $5",
    )
    .bind(&form.title)
    .bind(&form.desc)
    .bind(&form.image)
    .bind(&form.button_text)
    .bind(slug)
    .execute(pool)
    .await?;

    Ok(())
}
