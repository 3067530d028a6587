use crate::{
    error::Result,
    models::{AdminSortKey, Page, Product, ProductFields, ProductFilter, SortKey},
    queries::product_queries,
    services::mock,
    AppState,
};

/// In-memory twin of the SQL WHERE clause. Order matters for the listing:
/// filter first, take the total, then sort and slice.
pub fn apply_filters(items: Vec<Product>, filter: &ProductFilter) -> Vec<Product> {
    items
        .into_iter()
        .filter(|p| {
            filter
                .category
                .as_deref()
                .map_or(true, |category| p.category == category)
        })
        .filter(|p| filter.price.map_or(true, |bucket| bucket.matches(p.price)))
        .filter(|p| {
            filter
                .tag
                .as_deref()
                .map_or(true, |tag| p.tags.iter().any(|t| t == tag))
        })
        .collect()
}

/// Ties always break on id descending, in both price directions.
pub fn sort_products(items: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::Newest => items.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::Bestseller => {
            items.sort_by(|a, b| b.reviews.cmp(&a.reviews).then(b.id.cmp(&a.id)))
        }
        SortKey::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price).then(b.id.cmp(&a.id))),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price).then(b.id.cmp(&a.id))),
    }
}

pub fn paginate(items: Vec<Product>, page: i64, limit: i64) -> Vec<Product> {
    items
        .into_iter()
        .skip(((page - 1) * limit) as usize)
        .take(limit as usize)
        .collect()
}

/// Public listing. `page` and `limit` are expected pre-clamped by the route.
pub async fn list(
    state: &AppState,
    filter: &ProductFilter,
    page: i64,
    limit: i64,
) -> Result<Page<Product>> {
    match &state.db {
        Some(pool) => {
            let (items, total) = product_queries::list(pool, filter, page, limit).await?;
            Ok(Page::new(items, total, page, limit))
        }
        None => {
            tracing::debug!("serving product list from mock data");
            let mut items = apply_filters(mock::products(), filter);
            let total = items.len() as i64;
            sort_products(&mut items, filter.sort);
            let items = paginate(items, page, limit);
            Ok(Page::new(items, total, page, limit))
        }
    }
}

pub async fn get(state: &AppState, id: i32) -> Result<Option<Product>> {
    match &state.db {
        Some(pool) => product_queries::find_by_id(pool, id).await,
        None => Ok(mock::products().into_iter().find(|p| p.id == id)),
    }
}

/// Category names for the admin filter dropdown.
pub async fn categories(state: &AppState) -> Result<Vec<String>> {
    match &state.db {
        Some(pool) => product_queries::distinct_categories(pool).await,
        None => Ok(Vec::new()),
    }
}

pub async fn admin_search(
    state: &AppState,
    category: Option<&str>,
    search: Option<&str>,
    sort: AdminSortKey,
    page: i64,
    per_page: i64,
) -> Result<(Vec<Product>, i64)> {
    match &state.db {
        Some(pool) => product_queries::search(pool, category, search, sort, page, per_page).await,
        None => Ok((Vec::new(), 0)),
    }
}

pub async fn get_for_edit(state: &AppState, id: i32) -> Result<Option<Product>> {
    match &state.db {
        Some(pool) => product_queries::find_by_id(pool, id).await,
        None => Ok(None),
    }
}

pub async fn create(state: &AppState, fields: &ProductFields) -> Result<()> {
    match &state.db {
        Some(pool) => product_queries::create(pool, fields).await,
        None => {
            tracing::warn!("mock mode: discarding product create");
            Ok(())
        }
    }
}

pub async fn update(state: &AppState, id: i32, fields: &ProductFields) -> Result<()> {
    match &state.db {
        Some(pool) => product_queries::update(pool, id, fields).await,
        None => {
            tracing::warn!(id, "mock mode: discarding product update");
            Ok(())
        }
    }
}

pub async fn delete(state: &AppState, id: i32) -> Result<()> {
    match &state.db {
        Some(pool) => product_queries::delete(pool, id).await,
        None => {
            tracing::warn!(id, "mock mode: discarding product delete");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceBucket, ProductForm};

    fn product(id: i32, price: i32, reviews: i32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category: "Rau củ quả".to_string(),
            price,
            original_price: None,
            unit: None,
            image: None,
            rating: 0.0,
            reviews,
            is_hot: false,
            discount: None,
            tags: vec![],
            description: None,
            sort_order: 0,
            meta_title: None,
            meta_description: None,
            h1_custom: None,
            h2_custom: None,
            h3_custom: None,
        }
    }

    fn seed() -> Vec<Product> {
        vec![
            product(1, 45_000, 45),
            product(2, 80_000, 128),
            product(3, 150_000, 89),
            product(4, 120_000, 210),
        ]
    }

    #[test]
    fn under50_with_price_desc_returns_single_item() {
        let filter = ProductFilter {
            price: Some(PriceBucket::Under50),
            sort: SortKey::PriceDesc,
            category: None,
            tag: None,
        };
        let mut items = apply_filters(seed(), &filter);
        let total = items.len() as i64;
        sort_products(&mut items, filter.sort);
        let page = Page::new(paginate(items, 1, 8), total, 1, 8);

        assert_eq!(page.total, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].price, 45_000);
    }

    #[test]
    fn tag_filter_is_exact_and_case_sensitive() {
        let mut tagged = product(5, 60_000, 0);
        tagged.tags = vec!["Organic".to_string()];
        let items = vec![tagged, product(6, 60_000, 0)];

        let filter = ProductFilter {
            tag: Some("Organic".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_filters(items.clone(), &filter).len(), 1);

        let filter = ProductFilter {
            tag: Some("organic".to_string()),
            ..Default::default()
        };
        assert!(apply_filters(items, &filter).is_empty());
    }

    #[test]
    fn price_sorts_reverse_except_id_tiebreak() {
        // Two items share a price; the tie stays id-descending both ways.
        let items = vec![
            product(1, 80_000, 0),
            product(2, 45_000, 0),
            product(3, 80_000, 0),
        ];

        let mut asc = items.clone();
        sort_products(&mut asc, SortKey::PriceAsc);
        let asc_ids: Vec<i32> = asc.iter().map(|p| p.id).collect();
        assert_eq!(asc_ids, vec![2, 3, 1]);

        let mut desc = items;
        sort_products(&mut desc, SortKey::PriceDesc);
        let desc_ids: Vec<i32> = desc.iter().map(|p| p.id).collect();
        assert_eq!(desc_ids, vec![3, 1, 2]);
    }

    #[test]
    fn bestseller_orders_by_reviews_then_id() {
        let mut items = seed();
        sort_products(&mut items, SortKey::Bestseller);
        let ids: Vec<i32> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn count_is_taken_before_pagination() {
        let filter = ProductFilter::default();
        let mut items = apply_filters(seed(), &filter);
        let total = items.len() as i64;
        sort_products(&mut items, filter.sort);
        let page = Page::new(paginate(items, 1, 2), total, 1, 2);

        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn mock_reads_are_deterministic_and_writes_noop() {
        let state = AppState::for_tests();

        let before = list(&state, &ProductFilter::default(), 1, 8).await.unwrap();
        assert_eq!(before.total, 2);

        let fields = ProductForm {
            name: "Trà Ô Long".into(),
            category: "Đồ uống".into(),
            price: "95000".into(),
            ..Default::default()
        }
        .into_fields();
        create(&state, &fields).await.unwrap();
        delete(&state, 1).await.unwrap();

        let after = list(&state, &ProductFilter::default(), 1, 8).await.unwrap();
        assert_eq!(after.total, 2);
        assert_eq!(after.items[0].id, before.items[0].id);
    }
}
