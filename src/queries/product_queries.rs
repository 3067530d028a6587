use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{
        page_offset, AdminSortKey, PriceBucket, Product, ProductFields, ProductFilter,
        PRICE_BUCKET_HIGH, PRICE_BUCKET_LOW,
    },
};

const PRODUCT_COLUMNS: &str = "id, name, category, price, original_price, unit, image, rating, \
     reviews, is_hot, discount, tags, description, sort_order, meta_title, meta_description, \
     h1_custom, h2_custom, h3_custom";

/// Translates the structured filter into parameterized WHERE fragments.
/// Shared by the COUNT and the page query so they always agree.
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    if let Some(category) = &filter.category {
        query.push(" AND category = ");
        query.push_bind(category.clone());
    }
    match filter.price {
        Some(PriceBucket::Under50) => {
            query.push(" AND price < ");
            query.push_bind(PRICE_BUCKET_LOW);
        }
        Some(PriceBucket::From50To200) => {
            query.push(" AND price >= ");
            query.push_bind(PRICE_BUCKET_LOW);
            query.push(" AND price <= ");
            query.push_bind(PRICE_BUCKET_HIGH);
        }
        Some(PriceBucket::Over200) => {
            query.push(" AND price > ");
            query.push_bind(PRICE_BUCKET_HIGH);
        }
        None => {}
    }
    if let Some(tag) = &filter.tag {
        query.push(" AND ");
        query.push_bind(tag.clone());
        query.push(" = ANY(tags)");
    }
}

/// Public listing: count under the filter first, then fetch one page.
pub async fn list(
    pool: &PgPool,
    filter: &ProductFilter,
    page: i64,
    limit: i64,
) -> Result<(Vec<Product>, i64)> {
    let mut count: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT COUNT(*) FROM products WHERE 1=1");
    push_filters(&mut count, filter);
    let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {} FROM products WHERE 1=1", PRODUCT_COLUMNS));
    push_filters(&mut query, filter);
    query.push(filter.sort.order_sql());
    query.push(" LIMIT ");
    query.push_bind(limit);
    query.push(" OFFSET ");
    query.push_bind(page_offset(page, limit));

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok((products, total))
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE id = $1",
        PRODUCT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Distinct category names, for the admin filter dropdown.
pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<String>> {
    let categories =
        sqlx::query_scalar("SELECT DISTINCT category FROM products ORDER BY category")
            .fetch_all(pool)
            .await?;

    Ok(categories)
}

/// Admin search: exact category match plus case-insensitive name substring.
pub async fn search(
    pool: &PgPool,
    category: Option<&str>,
    search: Option<&str>,
    sort: AdminSortKey,
    page: i64,
    per_page: i64,
) -> Result<(Vec<Product>, i64)> {
    fn push_admin_filters(
        query: &mut QueryBuilder<'_, Postgres>,
        category: Option<&str>,
        search: Option<&str>,
    ) {
        if let Some(category) = category {
            query.push(" AND category = ");
            query.push_bind(category.to_string());
        }
        if let Some(q) = search {
            query.push(" AND name ILIKE ");
            query.push_bind(format!("%{}%", q));
        }
    }

    let mut count: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT COUNT(*) FROM products WHERE 1=1");
    push_admin_filters(&mut count, category, search);
    let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {} FROM products WHERE 1=1", PRODUCT_COLUMNS));
    push_admin_filters(&mut query, category, search);
    query.push(sort.order_sql());
    query.push(" LIMIT ");
    query.push_bind(per_page);
    query.push(" OFFSET ");
    query.push_bind(page_offset(page, per_page));

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok((products, total))
}

pub async fn create(pool: &PgPool, fields: &ProductFields) -> Result<()> {
    sqlx::query(
        "INSERT INTO products (name, category, price, original_price, unit, image, description, \
         tags, meta_title, meta_description, h1_custom, h2_custom, h3_custom) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
    )
    .bind(&fields.name)
    .bind(&fields.category)
    .bind(fields.price)
    .bind(fields.original_price)
    .bind(&fields.unit)
    .bind(&fields.image)
    .bind(&fields.description)
    .bind(&fields.tags)
    .bind(&fields.meta_title)
    .bind(&fields.meta_description)
    .bind(&fields.h1_custom)
    .bind(&fields.h2_custom)
    .bind(&fields.h3_custom)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn update(pool: &PgPool, id: i32, fields: &ProductFields) -> Result<()> {
    sqlx::query(
        "UPDATE products SET name = $1, category = $2, price = $3, original_price = $4, \
         unit = $5, image = $6, description = $7, tags = $8, meta_title = $9, \
         meta_description = $10, h1_custom = $11, h2_custom = $12, h3_custom = $13 \
         WHERE id = $14",
    )
    .bind(&fields.name)
    .bind(&fields.category)
    .bind(fields.price)
    .bind(fields.original_price)
    .bind(&fields.unit)
    .bind(&fields.image)
    .bind(&fields.description)
    .bind(&fields.tags)
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
    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
