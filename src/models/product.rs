use serde::{Deserialize, Serialize};

/// VND thresholds separating the coarse price buckets.
pub const PRICE_BUCKET_LOW: i32 = 50_000;
pub const PRICE_BUCKET_HIGH: i32 = 200_000;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: i32,
    #[serde(rename = "originalPrice")]
    pub original_price: Option<i32>,
    pub unit: Option<String>,
    pub image: Option<String>,
    pub rating: f64,
    pub reviews: i32,
    #[serde(rename = "isHot")]
    pub is_hot: bool,
    pub discount: Option<String>,
    pub tags: Vec<String>,
    pub description: Option<String>,
    #[serde(skip_serializing)]
    #[sqlx(default)]
    pub sort_order: i32,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub h1_custom: Option<String>,
    pub h2_custom: Option<String>,
    pub h3_custom: Option<String>,
}

/// Named price range recognized by the public listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBucket {
    Under50,
    From50To200,
    Over200,
}

impl PriceBucket {
    /// Unrecognized values mean "no price filter", never an error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "under50" => Some(Self::Under50),
            "50-200" => Some(Self::From50To200),
            "over200" => Some(Self::Over200),
            _ => None,
        }
    }

    /// Buckets partition the price axis; 50_000 belongs to the middle bucket.
    pub fn matches(self, price: i32) -> bool {
        match self {
            Self::Under50 => price < PRICE_BUCKET_LOW,
            Self::From50To200 => (PRICE_BUCKET_LOW..=PRICE_BUCKET_HIGH).contains(&price),
            Self::Over200 => price > PRICE_BUCKET_HIGH,
        }
    }
}

/// Sort vocabulary of the public product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Bestseller,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "bestseller" => Self::Bestseller,
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            _ => Self::Newest,
        }
    }

    pub fn order_sql(self) -> &'static str {
        match self {
            Self::Newest => " ORDER BY id DESC",
            Self::Bestseller => " ORDER BY reviews DESC NULLS LAST, id DESC",
            Self::PriceAsc => " ORDER BY price ASC, id DESC",
            Self::PriceDesc => " ORDER BY price DESC, id DESC",
        }
    }
}

/// Sort vocabulary of the admin product search. Deliberately separate from
/// [`SortKey`]: the admin listing adds `oldest`/`name` and drops `bestseller`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminSortKey {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    Name,
}

impl AdminSortKey {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "oldest" => Self::Oldest,
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "name" => Self::Name,
            _ => Self::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Name => "name",
        }
    }

    pub fn order_sql(self) -> &'static str {
        match self {
            Self::Newest => " ORDER BY id DESC",
            Self::Oldest => " ORDER BY id ASC",
            Self::PriceAsc => " ORDER BY price ASC",
            Self::PriceDesc => " ORDER BY price DESC",
            Self::Name => " ORDER BY name ASC",
        }
    }
}

/// Structured filter specification for the public product listing. Built from
/// raw query parameters once, then translated to SQL or applied in memory.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub price: Option<PriceBucket>,
    pub tag: Option<String>,
    pub sort: SortKey,
}

impl ProductFilter {
    pub fn from_params(
        category: Option<String>,
        price: Option<String>,
        tag: Option<String>,
        sort: Option<String>,
    ) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()),
            price: price.as_deref().and_then(PriceBucket::parse),
            tag: tag.filter(|t| !t.is_empty()),
            sort: sort.as_deref().map(SortKey::parse).unwrap_or_default(),
        }
    }
}

/// Admin product form submission. Numeric fields arrive as strings so an
/// empty input degrades to a default instead of rejecting the whole form.
#[derive(Debug, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub h1_custom: Option<String>,
    #[serde(default)]
    pub h2_custom: Option<String>,
    #[serde(default)]
    pub h3_custom: Option<String>,
}

/// Parsed product fields, as written to storage.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub price: i32,
    pub original_price: Option<i32>,
    pub unit: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub h1_custom: Option<String>,
    pub h2_custom: Option<String>,
    pub h3_custom: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ProductForm {
    pub fn into_fields(self) -> ProductFields {
        ProductFields {
            name: self.name,
            category: self.category,
            price: self.price.trim().parse().unwrap_or(0),
            original_price: self
                .original_price
                .and_then(|v| v.trim().parse().ok()),
            unit: non_empty(self.unit),
            image: non_empty(self.image),
            description: non_empty(self.description),
            tags: self
                .tags
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
            meta_title: non_empty(self.meta_title),
            meta_description: non_empty(self.meta_description),
            h1_custom: non_empty(self.h1_custom),
            h2_custom: non_empty(self.h2_custom),
            h3_custom: non_empty(self.h3_custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_parse_rejects_unknown_values() {
        assert_eq!(PriceBucket::parse("under50"), Some(PriceBucket::Under50));
        assert_eq!(PriceBucket::parse("50-200"), Some(PriceBucket::From50To200));
        assert_eq!(PriceBucket::parse("over200"), Some(PriceBucket::Over200));
        assert_eq!(PriceBucket::parse("cheap"), None);
        assert_eq!(PriceBucket::parse(""), None);
    }

    #[test]
    fn buckets_are_exclusive_at_boundaries() {
        assert!(PriceBucket::Under50.matches(49_999));
        assert!(!PriceBucket::Under50.matches(50_000));
        assert!(PriceBucket::From50To200.matches(50_000));
        assert!(PriceBucket::From50To200.matches(200_000));
        assert!(!PriceBucket::Over200.matches(200_000));
        assert!(PriceBucket::Over200.matches(200_001));
    }

    #[test]
    fn sort_key_falls_back_to_newest() {
        assert_eq!(SortKey::parse("price_asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::parse("BESTSELLER"), SortKey::Bestseller);
        assert_eq!(SortKey::parse("random"), SortKey::Newest);
        assert_eq!(SortKey::parse(""), SortKey::Newest);
    }

    #[test]
    fn admin_sort_is_its_own_vocabulary() {
        assert_eq!(AdminSortKey::parse("oldest"), AdminSortKey::Oldest);
        assert_eq!(AdminSortKey::parse("name"), AdminSortKey::Name);
        // bestseller is a public-only sort key
        assert_eq!(AdminSortKey::parse("bestseller"), AdminSortKey::Newest);
    }

    #[test]
    fn form_parses_numbers_and_tags() {
        let form = ProductForm {
            name: "Tea".into(),
            category: "Đồ uống".into(),
            price: "45000".into(),
            original_price: Some("".into()),
            tags: Some("Organic, , VietGAP".into()),
            ..Default::default()
        };
        let fields = form.into_fields();
        assert_eq!(fields.price, 45_000);
        assert_eq!(fields.original_price, None);
        assert_eq!(fields.tags, vec!["Organic".to_string(), "VietGAP".to_string()]);
    }
}
