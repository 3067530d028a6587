//! Server-side SEO rendering for news detail pages.
//!
//! The storefront template is a fixed, known shape, so the transforms are
//! targeted string/regex rewrites: replace the first matching tag, otherwise
//! insert before `</head>`. Insertion order is stable across renders.

use regex::{NoExpand, Regex};
use serde_json::json;

use crate::models::{News, DEFAULT_AUTHOR};

pub const SITE_NAME: &str = "Mountain Harvest";
const DESCRIPTION_LEN: usize = 160;
const DEFAULT_DESCRIPTION: &str = "Tin tức từ Mountain Harvest";

/// Hides the storefront hero and listing sections on the detail view.
const HIDE_SHOP_STYLE: &str =
    "<style>header.relative, #main-shop-content { display: none !important; }</style>";

/// Renders the article into the template with content passed through
/// verbatim. The rich text comes from the admin editor and is trusted as-is;
/// deployments that cannot rely on that trust should go through
/// [`render_detail_with`] and supply a sanitizer.
pub fn render_detail(base_html: &str, news: &News, current_url: &str) -> String {
    render_detail_with(base_html, news, current_url, |content| content.to_string())
}

pub fn render_detail_with<F>(
    base_html: &str,
    news: &News,
    current_url: &str,
    sanitize: F,
) -> String
where
    F: Fn(&str) -> String,
{
    let title_source = first_filled(&[news.meta_title.as_deref(), Some(news.title.as_str())]);
    let title = escape_html(&title_source);
    let headline_source = first_filled(&[news.h1_custom.as_deref(), Some(news.title.as_str())]);

    let image = news
        .image
        .as_deref()
        .filter(|i| !i.is_empty())
        .map(|i| absolute_url(i, current_url));
    let content = sanitize(news.content.as_deref().unwrap_or_default().trim());
    let author = news.author.as_deref().unwrap_or_default();
    let date = news.date.as_deref().unwrap_or_default();

    let description_source = description_of(news);
    let description = escape_html(&description_source);

    let mut html = base_html.to_string();

    // 1. Title.
    let title_tag = format!("<title>{} - {}</title>", title, SITE_NAME);
    let title_re = Regex::new(r"(?is)<title>.*?</title>").expect("valid regex");
    if title_re.is_match(&html) {
        html = title_re.replace(&html, NoExpand(&title_tag)).into_owned();
    } else {
        html = insert_before_head_end(html, &title_tag);
    }

    // 2. Meta tags, fixed order; image variants only when an image exists.
    let mut metas: Vec<(&str, &str, String)> = vec![
        ("name", "description", description.clone()),
        ("property", "og:title", title.clone()),
        ("property", "og:description", description.clone()),
        ("property", "og:url", current_url.to_string()),
        ("property", "og:type", "article".to_string()),
        ("name", "twitter:title", title.clone()),
        ("name", "twitter:description", description.clone()),
        ("name", "twitter:card", "summary_large_image".to_string()),
    ];
    if let Some(image) = &image {
        metas.push(("property", "og:image", image.clone()));
        metas.push(("property", "og:image:width", "1200".to_string()));
        metas.push(("property", "og:image:height", "630".to_string()));
        metas.push(("name", "twitter:image", image.clone()));
    }
    for (attr, key, value) in &metas {
        html = upsert_meta(html, attr, key, value);
    }

    // 4. Canonical link.
    html = upsert_link(
        html,
        r#"(?i)<link\s+rel=["']canonical["'][^>]*>"#,
        &format!(r#"<link rel="canonical" href="{}">"#, current_url),
    );

    // 5. Preload the cover image so the largest element paints early.
    if let Some(image) = &image {
        html = upsert_link(
            html,
            r#"(?i)<link\s+rel=["']preload["']\s+as=["']image["'][^>]*>"#,
            &format!(
                r#"<link rel="preload" as="image" href="{}" fetchpriority="high">"#,
                image
            ),
        );
    }

    // 6. Hide the shop chrome.
    if !html.contains(HIDE_SHOP_STYLE) {
        html = insert_before_head_end(html, HIDE_SHOP_STYLE);
    }

    // 7. Article structured data.
    let author_name = if author.is_empty() { DEFAULT_AUTHOR } else { author };
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": headline_source,
        "description": description_source,
        "author": {"@type": "Person", "name": author_name},
        "publisher": {"@type": "Organization", "name": SITE_NAME},
    });
    if let Some(image) = &image {
        schema["image"] = json!(image);
    }
    if !date.is_empty() {
        schema["datePublished"] = json!(date);
    }
    let schema_tag = format!(
        r#"<script type="application/ld+json">{}</script>"#,
        schema
    );
    let schema_re =
        Regex::new(r#"(?s)<script type="application/ld\+json">.*?</script>"#).expect("valid regex");
    if schema_re.is_match(&html) {
        html = schema_re.replace(&html, NoExpand(&schema_tag)).into_owned();
    } else {
        html = insert_before_head_end(html, &schema_tag);
    }

    // 8. Article body.
    let detail = detail_block(news, image.as_deref(), &content);
    let article_re = Regex::new(r#"(?s)<article id="news-detail"[^>]*>.*?</article>"#)
        .expect("valid regex");
    if article_re.is_match(&html) {
        html = article_re.replace(&html, NoExpand(&detail)).into_owned();
    } else if html.contains("</main>") {
        html = html.replacen("</main>", &format!("{}</main>", detail), 1);
    }

    html
}

fn detail_block(news: &News, image: Option<&str>, content: &str) -> String {
    let title = escape_html(&news.title);
    let h1 = escape_html(&first_filled(&[
        news.h1_custom.as_deref(),
        Some(news.title.as_str()),
    ]));
    let date = escape_html(news.date.as_deref().unwrap_or_default());
    let author = escape_html(news.author.as_deref().unwrap_or_default());

    let cover = image
        .map(|image| {
            format!(
                r#"<div class="w-full h-[45vh] min-h-[280px] bg-gray-200 overflow-hidden">
        <img src="{}" alt="{}" class="w-full h-full object-cover">
      </div>"#,
                image, title
            )
        })
        .unwrap_or_default();

    let date_line = if date.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="text-sm text-gray-500 block mb-2">{}</span>"#,
            date
        )
    };
    let author_line = if author.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="text-sm text-gray-500 block mb-4">Tác giả: {}</span>"#,
            author
        )
    };

    let h2_line = news
        .h2_custom
        .as_deref()
        .filter(|h| !h.is_empty())
        .map(|h| {
            format!(
                r#"<h2 class="text-2xl font-bold text-gray-800 mb-4">{}</h2>"#,
                escape_html(h)
            )
        })
        .unwrap_or_default();
    let h3_line = news
        .h3_custom
        .as_deref()
        .filter(|h| !h.is_empty())
        .map(|h| {
            format!(
                r#"<h3 class="text-xl font-bold text-gray-800 mb-4">{}</h3>"#,
                escape_html(h)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article id="news-detail" class="w-full">
      {cover}
      <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-10 md:py-14">
        <a href="/" class="inline-flex items-center gap-2 text-brand-green font-bold hover:underline mb-6">
          <i class="fas fa-arrow-left"></i> Quay lại tin tức
        </a>
        {date_line}
        {author_line}
        <h1 class="text-3xl md:text-4xl font-bold text-gray-900 mb-6 leading-tight">{h1}</h1>
        {h2_line}
        {h3_line}
        <div class="text-gray-600 text-lg leading-relaxed prose prose-lg max-w-none">{content}</div>
      </div>
    </article>"#
    )
}

/// Meta description: the stored override, else stripped content capped at
/// 160 characters, else a fixed fallback.
fn description_of(news: &News) -> String {
    if let Some(meta) = news.meta_description.as_deref() {
        if !meta.is_empty() {
            return meta.to_string();
        }
    }
    let stripped = strip_tags(news.content.as_deref().unwrap_or_default());
    if stripped.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        stripped.chars().take(DESCRIPTION_LEN).collect()
    }
}

fn upsert_meta(html: String, attr: &str, key: &str, value: &str) -> String {
    let pattern = format!(
        r#"(?i)<meta\s+{}=["']{}["'][^>]*>"#,
        attr,
        regex::escape(key)
    );
    let re = Regex::new(&pattern).expect("valid regex");
    let replacement = format!(r#"<meta {}="{}" content="{}">"#, attr, key, value);

    if re.is_match(&html) {
        re.replace(&html, NoExpand(&replacement)).into_owned()
    } else {
        insert_before_head_end(html, &replacement)
    }
}

fn upsert_link(html: String, pattern: &str, replacement: &str) -> String {
    let re = Regex::new(pattern).expect("valid regex");
    if re.is_match(&html) {
        re.replace(&html, NoExpand(replacement)).into_owned()
    } else {
        insert_before_head_end(html, replacement)
    }
}

fn insert_before_head_end(html: String, tag: &str) -> String {
    if html.contains("</head>") {
        html.replacen("</head>", &format!("  {}\n</head>", tag), 1)
    } else {
        format!("{}{}", tag, html)
    }
}

/// Resolves a relative image path against the request origin.
pub fn absolute_url(image: &str, current_url: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        return image.to_string();
    }
    let origin = origin_of(current_url);
    if image.starts_with('/') {
        format!("{}{}", origin, image)
    } else {
        format!("{}/{}", origin, image)
    }
}

/// `scheme://host` prefix of a request URL.
fn origin_of(url: &str) -> &str {
    let Some(scheme_end) = url.find("://") else {
        return url;
    };
    match url[scheme_end + 3..].find('/') {
        Some(path_start) => &url[..scheme_end + 3 + path_start],
        None => url,
    }
}

pub fn strip_tags(html: &str) -> String {
    let re = Regex::new(r"<[^>]+>").expect("valid regex");
    re.replace_all(html, "").trim().to_string()
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn first_filled(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .find(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Mountain Harvest - Thực phẩm sạch</title>
  <meta name="description" content="Cửa hàng thực phẩm sạch">
  <meta property="og:title" content="Mountain Harvest">
</head>
<body>
  <header class="relative">hero</header>
  <main>
    <section id="main-shop-content">shop</section>
    <article id="news-detail" class="hidden"><p>placeholder</p></article>
  </main>
</body>
</html>"#;

    fn article() -> News {
        News {
            id: 7,
            title: "Mùa Thu Hoạch Bơ Sáp".to_string(),
            image: Some("https://img.example/avocado.jpg".to_string()),
            content: Some("<p>Bơ sáp 034 đã lên kệ.</p>".to_string()),
            author: Some("Admin".to_string()),
            date: Some("03/02/2026".to_string()),
            sort_order: 0,
            meta_title: None,
            meta_description: None,
            h1_custom: None,
            h2_custom: None,
            h3_custom: None,
        }
    }

    #[test]
    fn replaces_title_and_existing_metas() {
        let html = render_detail(TEMPLATE, &article(), "https://shop.example/news/7");

        assert!(html.contains("<title>Mùa Thu Hoạch Bơ Sáp - Mountain Harvest</title>"));
        // Existing tags are replaced in place, not duplicated.
        assert_eq!(html.matches(r#"name="description""#).count(), 1);
        assert_eq!(html.matches(r#"property="og:title""#).count(), 1);
        assert!(html.contains(r#"<meta property="og:type" content="article">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://shop.example/news/7">"#));
        assert!(html.contains("header.relative, #main-shop-content"));
    }

    #[test]
    fn meta_title_overrides_title() {
        let mut news = article();
        news.meta_title = Some("Bơ Sáp 034 Chính Vụ".to_string());
        let html = render_detail(TEMPLATE, &news, "https://shop.example/news/7");
        assert!(html.contains("<title>Bơ Sáp 034 Chính Vụ - Mountain Harvest</title>"));
    }

    #[test]
    fn missing_image_emits_no_image_tags() {
        let mut news = article();
        news.image = None;
        let html = render_detail(TEMPLATE, &news, "https://shop.example/news/7");

        assert!(!html.contains("og:image"));
        assert!(!html.contains("twitter:image"));
        assert!(!html.contains(r#"rel="preload""#));
    }

    #[test]
    fn empty_h2_custom_emits_no_h2() {
        let html = render_detail(TEMPLATE, &article(), "https://shop.example/news/7");
        assert!(!html.contains("<h2"));

        let mut news = article();
        news.h2_custom = Some("Chi tiết mùa vụ".to_string());
        let html = render_detail(TEMPLATE, &news, "https://shop.example/news/7");
        assert!(html.contains("<h2"));
        assert!(html.contains("Chi tiết mùa vụ"));
    }

    #[test]
    fn article_anchor_replaced_once_with_content_verbatim() {
        let html = render_detail(TEMPLATE, &article(), "https://shop.example/news/7");

        assert!(!html.contains("placeholder"));
        assert!(html.contains("<p>Bơ sáp 034 đã lên kệ.</p>"));
        assert_eq!(html.matches(r#"<article id="news-detail""#).count(), 1);
    }

    #[test]
    fn missing_anchor_falls_back_to_main_end() {
        let template = TEMPLATE.replace(
            r#"<article id="news-detail" class="hidden"><p>placeholder</p></article>"#,
            "",
        );
        let html = render_detail(&template, &article(), "https://shop.example/news/7");

        let article_at = html.find(r#"<article id="news-detail""#).unwrap();
        let main_end = html.find("</main>").unwrap();
        assert!(article_at < main_end);
    }

    #[test]
    fn relative_image_resolves_against_origin() {
        let mut news = article();
        news.image = Some("/img/avocado.jpg".to_string());
        let html = render_detail(TEMPLATE, &news, "https://shop.example/news/7?a=1");
        assert!(html.contains(r#"content="https://shop.example/img/avocado.jpg""#));

        news.image = Some("img/avocado.jpg".to_string());
        let html = render_detail(TEMPLATE, &news, "https://shop.example/news/7");
        assert!(html.contains(r#"content="https://shop.example/img/avocado.jpg""#));
    }

    #[test]
    fn escaping_is_idempotent_across_renders() {
        let mut news = article();
        news.title = "Bơ & Chanh <Đà Lạt>".to_string();
        let url = "https://shop.example/news/7";

        let once = render_detail(TEMPLATE, &news, url);
        assert!(once.contains("Bơ &amp; Chanh &lt;Đà Lạt&gt;"));

        let twice = render_detail(&once, &news, url);
        assert!(!twice.contains("&amp;amp;"));
        assert_eq!(twice.matches(HIDE_SHOP_STYLE).count(), 1);
    }

    #[test]
    fn description_prefers_meta_then_stripped_content() {
        let mut news = article();
        news.meta_description = Some("Mô tả tùy chỉnh".to_string());
        let html = render_detail(TEMPLATE, &news, "https://shop.example/news/7");
        assert!(html.contains(r#"<meta name="description" content="Mô tả tùy chỉnh">"#));

        news.meta_description = None;
        news.content = Some("  ".to_string());
        let html = render_detail(TEMPLATE, &news, "https://shop.example/news/7");
        assert!(html.contains(&format!(
            r#"<meta name="description" content="{}">"#,
            DEFAULT_DESCRIPTION
        )));
    }

    #[test]
    fn long_content_truncates_to_160_chars() {
        let mut news = article();
        news.content = Some(format!("<p>{}</p>", "ă".repeat(300)));
        let description = description_of(&news);
        assert_eq!(description.chars().count(), 160);
    }

    #[test]
    fn structured_data_uses_custom_headline() {
        let mut news = article();
        news.h1_custom = Some("Tiêu đề H1".to_string());
        let html = render_detail(TEMPLATE, &news, "https://shop.example/news/7");

        assert!(html.contains(r#"application/ld+json"#));
        assert!(html.contains(r#""headline":"Tiêu đề H1""#));
        assert!(html.contains(r#""name":"Mountain Harvest""#));
    }

    #[test]
    fn strip_tags_removes_markup_and_trims() {
        assert_eq!(strip_tags("<p>Xin <b>chào</b></p> "), "Xin chào");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn origin_extraction() {
        assert_eq!(origin_of("https://a.example/x/y?z=1"), "https://a.example");
        assert_eq!(origin_of("http://a.example"), "http://a.example");
    }
}
