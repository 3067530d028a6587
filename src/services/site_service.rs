use serde_json::{json, Map, Value};

use crate::{
    error::Result,
    models::{BrandForm, Brochure, BrochureForm, FooterForm, Hero, HeroForm, TopbarForm},
    queries::{hero_queries, site_queries},
    services::mock,
    AppState,
};

/// Assembles the `/api/site` payload: hero, category names, brochures and the
/// JSONB config sections. `header` mirrors `brand` for older frontends.
pub async fn get_site(state: &AppState) -> Result<Value> {
    let Some(pool) = &state.db else {
        tracing::debug!("serving site config from mock data");
        return Ok(mock::site());
    };

    let hero = hero_queries::get(pool).await?;
    let categories = site_queries::categories(pool).await?;
    let brochures = site_queries::brochures(pool).await?;
    let config = site_queries::config_all(pool).await?;

    let hero_json = match hero {
        Some(h) => json!({
            "promo": h.promo.unwrap_or_default(),
            "title": h.title.unwrap_or_default(),
            "subtitle": h.subtitle.unwrap_or_default(),
            "image": h.image.unwrap_or_default(),
            "buttonText": h.button_text.unwrap_or_default(),
        }),
        None => json!({
            "promo": "Summer Sale",
            "title": "Fresh Produce For Green Living",
            "subtitle": "Up to 20% off on vegetables and fruits this week.",
            "image": "",
            "buttonText": "Shop Now",
        }),
    };

    let brand = config_object(config.get("brand"));
    let header = if brand.is_empty() {
        config_object(config.get("header"))
    } else {
        brand.clone()
    };

    Ok(json!({
        "hero": hero_json,
        "categories": categories.iter().map(|c| c.name.clone()).collect::<Vec<_>>(),
        "brochures": brochures,
        "brand": brand,
        "header": header,
        "topbar": config_object(config.get("topbar")),
        "footer": config_object(config.get("footer")),
    }))
}

/// Config values are JSONB objects, but tolerate double-encoded strings.
fn config_object(value: Option<&Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map.clone(),
        Some(Value::String(raw)) => serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(|v| v.as_object().cloned())
            .unwrap_or_default(),
        _ => Map::new(),
    }
}

pub async fn hero_for_edit(state: &AppState) -> Result<Hero> {
    match &state.db {
        Some(pool) => Ok(hero_queries::get(pool).await?.unwrap_or_default()),
        None => Ok(Hero::default()),
    }
}

pub async fn update_hero(state: &AppState, form: &HeroForm) -> Result<()> {
    match &state.db {
        Some(pool) => hero_queries::update(pool, form).await,
        None => {
            tracing::warn!("mock mode: discarding hero update");
            Ok(())
        }
    }
}

pub async fn config_section(state: &AppState, key: &str) -> Result<Map<String, Value>> {
    match &state.db {
        Some(pool) => Ok(config_object(
            site_queries::config_get(pool, key).await?.as_ref(),
        )),
        None => Ok(Map::new()),
    }
}

pub async fn brochures_for_admin(state: &AppState) -> Result<Vec<Brochure>> {
    match &state.db {
        Some(pool) => site_queries::brochures(pool).await,
        None => Ok(Vec::new()),
    }
}

pub async fn update_brochure(state: &AppState, slug: &str, form: &BrochureForm) -> Result<()> {
    match &state.db {
        Some(pool) => site_queries::update_brochure(pool, slug, form).await,
        None => {
            tracing::warn!(slug, "mock mode: discarding brochure update");
            Ok(())
        }
    }
}

/// Submitted values overwrite; blank submissions keep what is stored. Keys
/// outside the form (e.g. footer links/social lists) always survive.
fn set_if_filled(target: &mut Map<String, Value>, key: &str, value: &str) {
    if value.is_empty() {
        target.entry(key.to_string()).or_insert_with(|| json!(""));
    } else {
        target.insert(key.to_string(), json!(value));
    }
}

pub fn merge_brand(existing: Map<String, Value>, form: &BrandForm) -> Value {
    let mut merged = existing;
    set_if_filled(&mut merged, "siteName", &form.site_name);
    set_if_filled(&mut merged, "tagline", &form.tagline);
    set_if_filled(&mut merged, "icon", &form.icon);
    Value::Object(merged)
}

pub fn merge_topbar(existing: Map<String, Value>, form: &TopbarForm) -> Value {
    let mut merged = existing;
    set_if_filled(&mut merged, "freeShipping", &form.free_shipping);
    set_if_filled(&mut merged, "hotline", &form.hotline);
    set_if_filled(&mut merged, "support", form.support.as_deref().unwrap_or(""));
    Value::Object(merged)
}

pub fn merge_footer(existing: Map<String, Value>, form: &FooterForm) -> Value {
    let mut merged = existing;
    set_if_filled(&mut merged, "address", &form.address);
    set_if_filled(&mut merged, "phone", &form.phone);
    set_if_filled(&mut merged, "email", &form.email);
    set_if_filled(
        &mut merged,
        "description",
        form.description.as_deref().unwrap_or(""),
    );
    set_if_filled(
        &mut merged,
        "copyright",
        form.copyright.as_deref().unwrap_or(""),
    );
    Value::Object(merged)
}

async fn merge_config_update<F>(state: &AppState, key: &str, merge: F) -> Result<()>
where
    F: FnOnce(Map<String, Value>) -> Value,
{
    let Some(pool) = &state.db else {
        tracing::warn!(key, "mock mode: discarding site config update");
        return Ok(());
    };

    let existing = config_object(site_queries::config_get(pool, key).await?.as_ref());
    let merged = merge(existing);
    site_queries::config_set(pool, key, &merged).await
}

pub async fn update_brand(state: &AppState, form: &BrandForm) -> Result<()> {
    merge_config_update(state, "brand", |existing| merge_brand(existing, form)).await
}

pub async fn update_topbar(state: &AppState, form: &TopbarForm) -> Result<()> {
    merge_config_update(state, "topbar", |existing| merge_topbar(existing, form)).await
}

pub async fn update_footer(state: &AppState, form: &FooterForm) -> Result<()> {
    merge_config_update(state, "footer", |existing| merge_footer(existing, form)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(raw: &str) -> Map<String, Value> {
        serde_json::from_str::<Value>(raw)
            .unwrap()
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn topbar_merge_preserves_unsubmitted_fields() {
        let existing = object(r#"{"freeShipping": "Miễn phí từ 500k", "support": "Hỗ trợ"}"#);
        let form = TopbarForm {
            hotline: "2000".to_string(),
            ..Default::default()
        };

        let merged = merge_topbar(existing, &form);
        assert_eq!(merged["hotline"], "2000");
        assert_eq!(merged["freeShipping"], "Miễn phí từ 500k");
        assert_eq!(merged["support"], "Hỗ trợ");
    }

    #[test]
    fn footer_merge_keeps_unknown_keys() {
        let existing = object(r##"{"address": "Đà Lạt", "links": [{"label": "FAQ", "url": "#"}]}"##);
        let form = FooterForm {
            phone: "1900 1234".to_string(),
            ..Default::default()
        };

        let merged = merge_footer(existing, &form);
        assert_eq!(merged["address"], "Đà Lạt");
        assert_eq!(merged["phone"], "1900 1234");
        assert!(merged["links"].is_array());
        // Canonical keys materialize even when never stored before.
        assert_eq!(merged["copyright"], "");
    }

    #[test]
    fn config_object_tolerates_double_encoding() {
        let value = Value::String(r#"{"siteName": "Mountain Harvest"}"#.to_string());
        let map = config_object(Some(&value));
        assert_eq!(map["siteName"], "Mountain Harvest");

        assert!(config_object(Some(&Value::Null)).is_empty());
        assert!(config_object(None).is_empty());
    }

    #[tokio::test]
    async fn mock_site_is_deterministic() {
        let state = AppState::for_tests();
        let site = get_site(&state).await.unwrap();
        assert_eq!(site["hero"]["buttonText"], "Shop Now");
        assert_eq!(site["topbar"]["hotline"], "1900 1234");

        // Writes in mock mode are dropped without error.
        update_topbar(
            &state,
            &TopbarForm {
                hotline: "2000".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let again = get_site(&state).await.unwrap();
        assert_eq!(again["topbar"]["hotline"], "1900 1234");
    }
}
