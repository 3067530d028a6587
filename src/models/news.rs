use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR: &str = "Mountain Harvest";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub image: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    /// Display string in `dd/mm/yyyy` form, stored as text.
    pub date: Option<String>,
    #[serde(skip_serializing)]
    #[sqlx(default)]
    pub sort_order: i32,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub h1_custom: Option<String>,
    pub h2_custom: Option<String>,
    pub h3_custom: Option<String>,
}

/// Admin news form submission.
#[derive(Debug, Default, Deserialize)]
pub struct NewsForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub h1_custom: Option<String>,
    #[serde(default)]
    pub h2_custom: Option<String>,
    #[serde(default)]
    pub h3_custom: Option<String>,
}

/// Parsed news fields, as written to storage.
#[derive(Debug, Clone)]
pub struct NewsFields {
    pub title: String,
    pub image: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub h1_custom: Option<String>,
    pub h2_custom: Option<String>,
    pub h3_custom: Option<String>,
}

/// Converts the admin date input (`yyyy-mm-dd`) to the stored display form
/// (`dd/mm/yyyy`). Parse failures keep the submitted string untouched.
pub fn to_display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Converts the stored display form back to the `yyyy-mm-dd` value expected
/// by an `<input type="date">`. Unparseable strings pass through.
pub fn to_input_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%d/%m/%Y") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_converts_iso_input() {
        assert_eq!(to_display_date("2026-02-03"), "03/02/2026");
    }

    #[test]
    fn display_date_keeps_unparseable_input() {
        assert_eq!(to_display_date("early spring"), "early spring");
        assert_eq!(to_display_date("03/02/2026"), "03/02/2026");
    }

    #[test]
    fn input_date_round_trips_display_form() {
        assert_eq!(to_input_date("03/02/2026"), "2026-02-03");
        assert_eq!(to_input_date("not a date"), "not a date");
    }
}
