use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub sort_order: i32,
}

/// Promotional block tied to a fixed category slug. Seeded, update-only.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Brochure {
    pub slug: String,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "buttonText")]
    pub button_text: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SiteConfigEntry {
    pub key: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct BrandForm {
    #[serde(default, rename = "siteName")]
    pub site_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopbarForm {
    #[serde(default, rename = "freeShipping")]
    pub free_shipping: String,
    #[serde(default)]
    pub hotline: String,
    #[serde(default)]
    pub support: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FooterForm {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BrochureForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
}
