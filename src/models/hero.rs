use serde::Deserialize;

/// Singleton hero banner row. Created by the seed migration, update-only.
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct Hero {
    pub promo: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub button_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HeroForm {
    #[serde(default)]
    pub promo: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
}
