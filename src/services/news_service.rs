use crate::{
    error::Result,
    models::{self, News, NewsFields, NewsForm, Page, DEFAULT_AUTHOR},
    queries::news_queries,
    services::mock,
    views::seo,
    AppState,
};

/// Auto-derived meta description length, in characters.
const META_DESCRIPTION_LEN: usize = 100;

pub async fn list(state: &AppState, page: i64, limit: i64) -> Result<Page<News>> {
    match &state.db {
        Some(pool) => {
            let (items, total) = news_queries::list(pool, page, limit).await?;
            Ok(Page::new(items, total, page, limit))
        }
        None => {
            tracing::debug!("serving news list from mock data");
            let all = mock::news();
            let total = all.len() as i64;
            let items = all
                .into_iter()
                .skip(((page - 1) * limit) as usize)
                .take(limit as usize)
                .collect();
            Ok(Page::new(items, total, page, limit))
        }
    }
}

pub async fn get(state: &AppState, id: i32) -> Result<Option<News>> {
    match &state.db {
        Some(pool) => news_queries::find_by_id(pool, id).await,
        None => Ok(mock::news().into_iter().find(|n| n.id == id)),
    }
}

pub async fn admin_search(
    state: &AppState,
    search: Option<&str>,
    page: i64,
    per_page: i64,
) -> Result<(Vec<News>, i64)> {
    match &state.db {
        Some(pool) => news_queries::search(pool, search, page, per_page).await,
        None => Ok((Vec::new(), 0)),
    }
}

pub async fn get_for_edit(state: &AppState, id: i32) -> Result<Option<News>> {
    match &state.db {
        Some(pool) => news_queries::find_by_id(pool, id).await,
        None => Ok(None),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Normalizes an admin submission: the date input converts to the stored
/// display form, and the SEO meta pair is derived from title and content.
fn fields_from_form(form: NewsForm, default_author: bool) -> NewsFields {
    let content = form.content.unwrap_or_default();
    let stripped = seo::strip_tags(&content);
    let meta_description = if stripped.is_empty() {
        None
    } else {
        Some(stripped.chars().take(META_DESCRIPTION_LEN).collect())
    };

    let author = match non_empty(form.author) {
        Some(author) => Some(author),
        None if default_author => Some(DEFAULT_AUTHOR.to_string()),
        None => None,
    };

    NewsFields {
        meta_title: Some(form.title.clone()),
        meta_description,
        title: form.title,
        image: non_empty(form.image),
        content: if content.is_empty() { None } else { Some(content) },
        author,
        date: non_empty(form.date).map(|d| models::to_display_date(&d)),
        h1_custom: non_empty(form.h1_custom),
        h2_custom: non_empty(form.h2_custom),
        h3_custom: non_empty(form.h3_custom),
    }
}

pub async fn create(state: &AppState, form: NewsForm) -> Result<()> {
    let fields = fields_from_form(form, true);
    match &state.db {
        Some(pool) => news_queries::create(pool, &fields).await,
        None => {
            tracing::warn!("mock mode: discarding news create");
            Ok(())
        }
    }
}

pub async fn update(state: &AppState, id: i32, form: NewsForm) -> Result<()> {
    let fields = fields_from_form(form, false);
    match &state.db {
        Some(pool) => news_queries::update(pool, id, &fields).await,
        None => {
            tracing::warn!(id, "mock mode: discarding news update");
            Ok(())
        }
    }
}

pub async fn delete(state: &AppState, id: i32) -> Result<()> {
    match &state.db {
        Some(pool) => news_queries::delete(pool, id).await,
        None => {
            tracing::warn!(id, "mock mode: discarding news delete");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_derives_meta_and_converts_date() {
        let form = NewsForm {
            title: "Mùa Thu Hoạch".to_string(),
            content: Some("<p>Bơ sáp <b>034</b> đã lên kệ.</p>".to_string()),
            date: Some("2026-02-03".to_string()),
            ..Default::default()
        };
        let fields = fields_from_form(form, true);

        assert_eq!(fields.meta_title.as_deref(), Some("Mùa Thu Hoạch"));
        assert_eq!(fields.meta_description.as_deref(), Some("Bơ sáp 034 đã lên kệ."));
        assert_eq!(fields.date.as_deref(), Some("03/02/2026"));
        assert_eq!(fields.author.as_deref(), Some(DEFAULT_AUTHOR));
    }

    #[test]
    fn unparseable_date_is_stored_as_submitted() {
        let form = NewsForm {
            title: "T".to_string(),
            date: Some("next week".to_string()),
            ..Default::default()
        };
        let fields = fields_from_form(form, true);
        assert_eq!(fields.date.as_deref(), Some("next week"));
    }

    #[tokio::test]
    async fn mock_news_reads_are_fixed() {
        let state = AppState::for_tests();
        let page = list(&state, 1, 6).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items[0].id, 1);

        assert!(get(&state, 1).await.unwrap().is_some());
        assert!(get(&state, 99).await.unwrap().is_none());
    }
}
