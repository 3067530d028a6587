use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Hero, HeroForm},
};

pub async fn get(pool: &PgPool) -> Result<Option<Hero>> {
    let hero = sqlx::query_as::<_, Hero>(
        "SELECT promo, title, subtitle, image, button_text FROM hero LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    Ok(hero)
}

/// The hero table holds exactly one row, created by the seed migration.
pub async fn update(pool: &PgPool, form: &HeroForm) -> Result<()> {
    sqlx::query(
        "UPDATE hero SET promo = $1, title = $2, subtitle = $3, image = $4, button_text = $5 \
         WHERE id = 1",
    )
    .bind(&form.promo)
    .bind(&form.title)
    .bind(&form.subtitle)
    .bind(&form.image)
    .bind(&form.button_text)
    .execute(pool)
    .await?;

    Ok(())
}
