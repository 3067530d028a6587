use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{page_offset, News, NewsFields},
};

const NEWS_COLUMNS: &str = "id, title, image, content, author, date, sort_order, meta_title, \
     meta_description, h1_custom, h2_custom, h3_custom";

/// Public listing: manual sort order first, then insertion order.
pub async fn list(pool: &PgPool, page: i64, limit: i64) -> Result<(Vec<News>, i64)> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
        .fetch_one(pool)
        .await?;

    let news = sqlx::query_as::<_, News>(&format!(
        "SELECT {} FROM news ORDER BY sort_order, id LIMIT $1 OFFSET $2",
        NEWS_COLUMNS
    ))
    .bind(limit)
    .bind(page_offset(page, limit))
    .fetch_all(pool)
    .await?;

    Ok((news, total))
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<News>> {
    let news = sqlx::query_as::<_, News>(&format!(
        "SELECT {} FROM news WHERE id = $1",
        NEWS_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(news)
}

/// Admin search: case-insensitive substring across title, content and author.
pub async fn search(
    pool: &PgPool,
    search: Option<&str>,
    page: i64,
    per_page: i64,
) -> Result<(Vec<News>, i64)> {
    fn push_search(query: &mut QueryBuilder<'_, Postgres>, search: Option<&str>) {
        if let Some(q) = search {
            let pattern = format!("%{}%", q);
            query.push(" AND (title ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR content ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR author ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }
    }

    let mut count: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT COUNT(*) FROM news WHERE 1=1");
    push_search(&mut count, search);
    let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {} FROM news WHERE 1=1", NEWS_COLUMNS));
    push_search(&mut query, search);
    query.push(" ORDER BY sort_order, id DESC LIMIT ");
    query.push_bind(per_page);
    query.push(" OFFSET ");
    query.push_bind(page_offset(page, per_page));

    let news = query.build_query_as::<News>().fetch_all(pool).await?;

    Ok((news, total))
}

pub async fn create(pool: &PgPool, fields: &NewsFields) -> Result<()> {
    sqlx::query(
        "INSERT INTO news (title, image, content, author, date, meta_title, meta_description, \
         h1_custom, h2_custom, h3_custom) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(&fields.title)
    .bind(&fields.image)
    .bind(&fields.content)
    .bind(&fields.author)
    .bind(&fields.date)
    .bind(&fields.meta_title)
    .bind(&fields.meta_description)
    .bind(&fields.h1_custom)
    .bind(&fields.h2_custom)
    .bind(&fields.h3_custom)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn update(pool: &PgPool, id: i32, fields: &NewsFields) -> Result<()> {
    sqlx::query(
        "UPDATE news SET title = $1, image = $2, content = $3, author = $4, date = $5, \
         meta_title = $6, meta_description = $7, h1_custom = $8, h2_custom = $9, \
         h3_custom = $10 WHERE id = $11",
    )
    .bind(&fields.title)
    .bind(&fields.image)
    .bind(&fields.content)
    .bind(&fields.author)
    .bind(&fields.date)
    .bind(&fields.meta_title)
    .bind(&fields.meta_description)
    .bind(&fields.h1_custom)
    .bind(&fields.h2_custom)
    .bind(&fields.h3_custom)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<()> {
    sqlx::query("DELETE FROM news WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
