//! Server-rendered admin console pages. Plain HTML strings: the console is a
//! single-operator tool and the markup is small enough not to warrant a
//! template engine.

use serde_json::{Map, Value};

use crate::{
    models::{self, AdminSortKey, Brochure, Hero, News, Product},
    views::seo::escape_html as esc,
};

const NAV: &[(&str, &str)] = &[
    ("/admin", "Dashboard"),
    ("/admin/products", "Sản phẩm"),
    ("/admin/news", "Tin tức"),
    ("/admin/hero", "Hero"),
    ("/admin/site", "Site Config"),
];

pub fn layout(title: &str, active: &str, body: &str) -> String {
    layout_with_editor(title, active, body, false)
}

/// `include_editor` pulls in the rich-text editor used by the news forms.
pub fn layout_with_editor(title: &str, active: &str, body: &str, include_editor: bool) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| {
            let cls = if *href == active {
                "block px-4 py-2 rounded-lg bg-blue-600 text-white"
            } else {
                "block px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
            };
            format!(r#"<a href="{}" class="{}">{}</a>"#, href, cls, label)
        })
        .collect();

    let editor = if include_editor {
        r#"<link href="https://cdn.quilljs.com/1.3.7/quill.snow.css" rel="stylesheet">
  <script src="https://cdn.quilljs.com/1.3.7/quill.min.js"></script>
  <script>
    document.addEventListener('DOMContentLoaded', function () {
      var holder = document.getElementById('news-content-editor');
      if (!holder) return;
      var hidden = document.getElementById('news-content');
      var quill = new Quill(holder, { theme: 'snow' });
      if (hidden.value) quill.root.innerHTML = hidden.value;
      holder.closest('form').addEventListener('submit', function () {
        hidden.value = quill.root.innerHTML;
      });
    });
  </script>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="vi">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{} - CMS Mountain Harvest</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css">
  {}
</head>
<body class="bg-gray-50 min-h-screen">
  <div class="flex min-h-screen">
    <aside class="w-56 bg-white border-r border-gray-200 p-4 space-y-1">
      <div class="font-bold text-lg mb-4 text-gray-800"><i class="fas fa-mountain mr-2 text-green-600"></i>CMS</div>
      {}
    </aside>
    <main class="flex-1 p-8">{}</main>
  </div>
</body>
</html>"#,
        esc(title),
        editor,
        nav,
        body
    )
}

pub fn dashboard() -> String {
    layout(
        "Dashboard",
        "/admin",
        r#"<h1 class="text-2xl font-bold mb-4 text-gray-800">Dashboard</h1>
<p class="text-gray-600">Chào mừng đến với CMS Mountain Harvest. Chọn mục trong sidebar để quản lý nội dung.</p>"#,
    )
}

/// Shown instead of a listing when the application runs without a database.
pub fn db_notice(title: &str, active: &str, message: &str) -> String {
    layout(
        title,
        active,
        &format!(r#"<p class="text-amber-600">{}</p>"#, esc(message)),
    )
}

fn query_string(params: &[(&str, &str)]) -> String {
    let parts: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, urlencode(v)))
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

fn urlencode(raw: &str) -> String {
    percent_encoding::utf8_percent_encode(raw, percent_encoding::NON_ALPHANUMERIC).to_string()
}

fn pagination(base: &str, params: &[(&str, &str)], page: i64, total_pages: i64) -> String {
    if total_pages <= 1 {
        return String::new();
    }

    let link = |p: i64| {
        let page = p.to_string();
        let mut merged: Vec<(&str, &str)> = params.to_vec();
        merged.push(("page", page.as_str()));
        format!("{}{}", base, query_string(&merged))
    };

    let mut numbers = String::new();
    for p in 1..=total_pages {
        if p == page {
            numbers.push_str(&format!(
                r#"<span class="inline-flex items-center justify-center w-9 h-9 bg-blue-600 text-white rounded-lg font-medium">{}</span>"#,
                p
            ));
        } else {
            numbers.push_str(&format!(
                r#"<a href="{}" class="inline-flex items-center justify-center w-9 h-9 border border-gray-300 rounded-lg hover:bg-gray-100 text-gray-700">{}</a>"#,
                link(p),
                p
            ));
        }
    }

    format!(
        r#"<nav class="flex items-center gap-2 mt-4">
  <a href="{}" class="p-2 rounded-lg border hover:bg-gray-100{}"><i class="fas fa-chevron-left"></i></a>
  {}
  <a href="{}" class="p-2 rounded-lg border hover:bg-gray-100{}"><i class="fas fa-chevron-right"></i></a>
</nav>"#,
        link(page.saturating_sub(1).max(1)),
        if page <= 1 { " opacity-50 pointer-events-none" } else { "" },
        numbers,
        link((page + 1).min(total_pages)),
        if page >= total_pages { " opacity-50 pointer-events-none" } else { "" },
    )
}

fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<div><label class="block text-sm font-medium mb-1">{}</label>
<input name="{}" value="{}" class="w-full border border-gray-300 rounded px-2 py-1.5"></div>"#,
        esc(label),
        name,
        esc(value)
    )
}

fn seo_fieldset(
    meta_title: &str,
    meta_description: &str,
    h1: &str,
    h2: &str,
    h3: &str,
) -> String {
    format!(
        r#"<div class="border-t pt-4 mt-4">
  <h3 class="text-lg font-bold mb-3 text-gray-800">SEO Settings</h3>
  {}
  <div><label class="block text-sm font-medium mb-1">Meta Description</label>
  <textarea name="meta_description" rows="2" class="w-full border border-gray-300 rounded px-2 py-1.5">{}</textarea></div>
  <div class="grid grid-cols-3 gap-3">
    {}
    {}
    {}
  </div>
</div>"#,
        text_input("Meta Title", "meta_title", meta_title),
        esc(meta_description),
        text_input("H1 Custom", "h1_custom", h1),
        text_input("H2 Custom", "h2_custom", h2),
        text_input("H3 Custom", "h3_custom", h3),
    )
}

pub struct ProductListView<'a> {
    pub rows: &'a [Product],
    pub categories: &'a [String],
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
    pub per_page: i64,
    pub category: &'a str,
    pub search: &'a str,
    pub sort: AdminSortKey,
}

pub fn products_page(view: &ProductListView<'_>) -> String {
    let category_options: String = view
        .categories
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                esc(c),
                if c == view.category { " selected" } else { "" },
                esc(c)
            )
        })
        .collect();

    let sort_options: String = [
        (AdminSortKey::Newest, "Mới nhất"),
        (AdminSortKey::Oldest, "Cũ nhất"),
        (AdminSortKey::PriceAsc, "Giá thấp → cao"),
        (AdminSortKey::PriceDesc, "Giá cao → thấp"),
        (AdminSortKey::Name, "Tên A-Z"),
    ]
    .iter()
    .map(|(key, label)| {
        format!(
            r#"<option value="{}"{}>{}</option>"#,
            key.as_str(),
            if *key == view.sort { " selected" } else { "" },
            label
        )
    })
    .collect();

    let rows: String = view
        .rows
        .iter()
        .map(|p| {
            let image_cell = p
                .image
                .as_deref()
                .filter(|i| !i.is_empty())
                .map(|i| {
                    format!(
                        r#"<img src="{}" class="w-12 h-12 object-cover rounded border">"#,
                        esc(i)
                    )
                })
                .unwrap_or_else(|| r#"<span class="text-gray-400">-</span>"#.to_string());
            format!(
                r#"<tr class="hover:bg-gray-50">
  <td class="px-4 py-3 border-t border-gray-200 font-mono text-gray-500 text-sm">{}</td>
  <td class="px-4 py-3 border-t border-gray-200 font-medium">{}</td>
  <td class="px-4 py-3 border-t border-gray-200 text-gray-600 text-sm">{}</td>
  <td class="px-4 py-3 border-t border-gray-200 font-medium text-gray-800">{}đ</td>
  <td class="px-4 py-3 border-t border-gray-200">{}</td>
  <td class="px-4 py-3 border-t border-gray-200 whitespace-nowrap">
    <a href="/admin/products/{}/edit" class="px-2 py-1 text-blue-600 hover:bg-blue-50 rounded text-sm mr-1"><i class="fas fa-edit"></i></a>
    <form method="post" action="/admin/products/{}/delete" class="inline">
      <button type="submit" class="px-2 py-1 text-red-600 hover:bg-red-50 rounded text-sm" onclick="return confirm('Xóa sản phẩm này?')"><i class="fas fa-trash"></i></button>
    </form>
  </td>
</tr>"#,
                p.id,
                esc(&p.name),
                esc(&p.category),
                p.price,
                image_cell,
                p.id,
                p.id
            )
        })
        .collect();

    let per_page = view.per_page.to_string();
    let base_params: Vec<(&str, &str)> = vec![
        ("category", view.category),
        ("q", view.search),
        ("sort", view.sort.as_str()),
        ("per_page", &per_page),
    ];

    let body = format!(
        r#"<div class="flex flex-wrap justify-between items-center gap-4 mb-4">
  <h1 class="text-2xl font-bold text-gray-800">Sản phẩm</h1>
  <span class="text-sm text-gray-500">{} sản phẩm{}</span>
</div>
<form method="get" action="/admin/products" class="flex flex-wrap gap-3 items-end mb-6 p-4 bg-gray-50 rounded-lg">
  <div class="flex-1 min-w-[200px]">
    <label class="block text-sm font-medium mb-1">Tìm kiếm</label>
    <input name="q" value="{}" placeholder="Tên sản phẩm..." class="w-full border border-gray-300 rounded-lg px-3 py-2 text-sm">
  </div>
  <div class="min-w-[160px]">
    <label class="block text-sm font-medium mb-1">Danh mục</label>
    <select name="category" class="w-full border border-gray-300 rounded-lg px-3 py-2 text-sm">
      <option value="">Tất cả</option>
      {}
    </select>
  </div>
  <div class="min-w-[160px]">
    <label class="block text-sm font-medium mb-1">Sắp xếp</label>
    <select name="sort" class="w-full border border-gray-300 rounded-lg px-3 py-2 text-sm">{}</select>
  </div>
  <input type="hidden" name="per_page" value="{}">
  <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 text-sm font-medium">Lọc</button>
</form>
<form method="post" action="/admin/products/new" class="mb-6 p-4 bg-green-50 border border-green-200 rounded-lg">
  <h2 class="text-lg font-bold mb-3 text-gray-800">Thêm sản phẩm</h2>
  <div class="grid grid-cols-2 gap-4">
    {}
    {}
    {}
    {}
  </div>
  {}
  <button type="submit" class="mt-2 px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700">Thêm</button>
</form>
<div class="overflow-x-auto">
  <table class="w-full border-collapse">
    <thead class="bg-gray-100"><tr>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">ID</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Tên</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Danh mục</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Giá</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Ảnh</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Thao tác</th>
    </tr></thead>
    <tbody>{}</tbody>
  </table>
</div>
{}"#,
        view.total,
        if view.total_pages > 1 {
            format!(" • Trang {}/{}", view.page, view.total_pages)
        } else {
            String::new()
        },
        esc(view.search),
        category_options,
        sort_options,
        view.per_page,
        text_input("Tên", "name", ""),
        text_input("Danh mục", "category", ""),
        text_input("Giá (VNĐ)", "price", ""),
        text_input("Ảnh URL", "image", ""),
        seo_fieldset("", "", "", "", ""),
        rows,
        pagination("/admin/products", &base_params, view.page, view.total_pages),
    );

    layout("Products", "/admin/products", &body)
}

pub fn product_edit_page(p: &Product) -> String {
    let body = format!(
        r#"<h1 class="text-2xl font-bold mb-4">Sửa sản phẩm</h1>
<form method="post" action="/admin/products/{}" class="space-y-4 max-w-2xl">
  {}
  {}
  {}
  {}
  {}
  {}
  <div><label class="block text-sm font-medium mb-1">Mô tả</label>
  <textarea name="description" rows="4" class="w-full border border-gray-300 rounded px-2 py-1.5">{}</textarea></div>
  {}
  {}
  <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded">Lưu</button>
</form>"#,
        p.id,
        text_input("Tên", "name", &p.name),
        text_input("Danh mục", "category", &p.category),
        text_input("Giá", "price", &p.price.to_string()),
        text_input(
            "Giá gốc (để trống nếu không)",
            "original_price",
            &p.original_price.map(|v| v.to_string()).unwrap_or_default()
        ),
        text_input("Đơn vị (vd: /500g)", "unit", p.unit.as_deref().unwrap_or_default()),
        text_input("Ảnh URL", "image", p.image.as_deref().unwrap_or_default()),
        esc(p.description.as_deref().unwrap_or_default()),
        text_input("Tags (phân cách bởi dấu phẩy)", "tags", &p.tags.join(",")),
        seo_fieldset(
            p.meta_title.as_deref().unwrap_or_default(),
            p.meta_description.as_deref().unwrap_or_default(),
            p.h1_custom.as_deref().unwrap_or_default(),
            p.h2_custom.as_deref().unwrap_or_default(),
            p.h3_custom.as_deref().unwrap_or_default(),
        ),
    );

    layout("Sửa sản phẩm", "/admin/products", &body)
}

pub struct NewsListView<'a> {
    pub rows: &'a [News],
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
    pub per_page: i64,
    pub search: &'a str,
}

pub fn news_page(view: &NewsListView<'_>) -> String {
    let rows: String = view
        .rows
        .iter()
        .map(|n| {
            let image_cell = n
                .image
                .as_deref()
                .filter(|i| !i.is_empty())
                .map(|i| {
                    format!(
                        r#"<img src="{}" class="w-12 h-12 object-cover rounded border">"#,
                        esc(i)
                    )
                })
                .unwrap_or_else(|| r#"<span class="text-gray-400">-</span>"#.to_string());
            format!(
                r#"<tr class="hover:bg-gray-50">
  <td class="px-4 py-3 border-t border-gray-200 font-mono text-gray-500 text-sm">{}</td>
  <td class="px-4 py-3 border-t border-gray-200 font-medium">{}</td>
  <td class="px-4 py-3 border-t border-gray-200 text-gray-600 text-sm">{}</td>
  <td class="px-4 py-3 border-t border-gray-200 text-gray-600 text-sm">{}</td>
  <td class="px-4 py-3 border-t border-gray-200">{}</td>
  <td class="px-4 py-3 border-t border-gray-200 whitespace-nowrap">
    <a href="/admin/news/{}/edit" class="px-2 py-1 text-blue-600 hover:bg-blue-50 rounded text-sm mr-1"><i class="fas fa-edit"></i></a>
    <form method="post" action="/admin/news/{}/delete" class="inline">
      <button type="submit" class="px-2 py-1 text-red-600 hover:bg-red-50 rounded text-sm" onclick="return confirm('Xóa tin này?')"><i class="fas fa-trash"></i></button>
    </form>
  </td>
</tr>"#,
                n.id,
                esc(&n.title),
                esc(n.date.as_deref().unwrap_or("-")),
                esc(n.author.as_deref().unwrap_or("-")),
                image_cell,
                n.id,
                n.id
            )
        })
        .collect();

    let per_page = view.per_page.to_string();
    let base_params: Vec<(&str, &str)> = vec![("q", view.search), ("per_page", &per_page)];

    let body = format!(
        r#"<div class="flex flex-wrap justify-between items-center gap-4 mb-4">
  <h1 class="text-2xl font-bold text-gray-800">Tin tức</h1>
  <div class="flex items-center gap-3">
    <a href="/admin/news/add" class="px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 text-sm font-medium">+ Thêm tin mới</a>
    <span class="text-sm text-gray-500">{} tin{}</span>
  </div>
</div>
<form method="get" action="/admin/news" class="flex flex-wrap gap-3 items-end mb-6 p-4 bg-gray-50 rounded-lg">
  <div class="flex-1 min-w-[240px]">
    <label class="block text-sm font-medium mb-1">Tìm kiếm</label>
    <input name="q" value="{}" placeholder="Tiêu đề, nội dung hoặc tác giả..." class="w-full border border-gray-300 rounded-lg px-3 py-2 text-sm">
  </div>
  <input type="hidden" name="per_page" value="{}">
  <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 text-sm font-medium">Lọc</button>
</form>
<div class="overflow-x-auto">
  <table class="w-full border-collapse">
    <thead class="bg-gray-100"><tr>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">ID</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Tiêu đề</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Ngày</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Tác giả</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Ảnh</th>
      <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600">Thao tác</th>
    </tr></thead>
    <tbody>{}</tbody>
  </table>
</div>
{}"#,
        view.total,
        if view.total_pages > 1 {
            format!(" • Trang {}/{}", view.page, view.total_pages)
        } else {
            String::new()
        },
        esc(view.search),
        view.per_page,
        rows,
        pagination("/admin/news", &base_params, view.page, view.total_pages),
    );

    layout("News", "/admin/news", &body)
}

fn news_form(action: &str, n: Option<&News>, date_value: &str) -> String {
    let title = n.map(|n| n.title.as_str()).unwrap_or_default();
    let author = n
        .and_then(|n| n.author.as_deref())
        .unwrap_or(models::DEFAULT_AUTHOR);
    let image = n.and_then(|n| n.image.as_deref()).unwrap_or_default();
    let content = n.and_then(|n| n.content.as_deref()).unwrap_or_default();

    format!(
        r#"<form method="post" action="{}" class="space-y-3 max-w-3xl">
  {}
  <div class="grid grid-cols-2 gap-3">
    {}
    <div><label class="block text-sm font-medium mb-1">Ngày</label>
    <input name="date" type="date" value="{}" class="w-full border border-gray-300 rounded px-2 py-1.5"></div>
  </div>
  {}
  <div>
    <label class="block text-sm font-medium mb-1">Nội dung</label>
    <div id="news-content-editor" class="bg-white" style="height: 400px;"></div>
    <textarea name="content" id="news-content" class="hidden">{}</textarea>
  </div>
  <div class="grid grid-cols-3 gap-3">
    {}
    {}
    {}
  </div>
  <div class="flex gap-2">
    <button type="submit" class="px-4 py-1.5 bg-blue-600 text-white rounded hover:bg-blue-700 font-medium text-sm">Lưu</button>
    <a href="/admin/news" class="px-4 py-1.5 bg-gray-200 text-gray-700 rounded hover:bg-gray-300 font-medium text-sm">Hủy</a>
  </div>
</form>"#,
        action,
        text_input("Tiêu đề", "title", title),
        text_input("Tác giả", "author", author),
        esc(date_value),
        text_input("Ảnh URL", "image", image),
        esc(content),
        text_input("H1 Custom", "h1_custom", n.and_then(|n| n.h1_custom.as_deref()).unwrap_or_default()),
        text_input("H2 Custom", "h2_custom", n.and_then(|n| n.h2_custom.as_deref()).unwrap_or_default()),
        text_input("H3 Custom", "h3_custom", n.and_then(|n| n.h3_custom.as_deref()).unwrap_or_default()),
    )
}

pub fn news_add_page(today: &str) -> String {
    let body = format!(
        r#"<h1 class="text-2xl font-bold mb-6 text-gray-800">Thêm tin mới</h1>{}"#,
        news_form("/admin/news/add", None, today)
    );
    layout_with_editor("Thêm tin mới", "/admin/news", &body, true)
}

pub fn news_edit_page(n: &News) -> String {
    let date_value = n
        .date
        .as_deref()
        .map(models::to_input_date)
        .unwrap_or_default();
    let body = format!(
        r#"<h1 class="text-2xl font-bold mb-6 text-gray-800">Sửa tin</h1>{}"#,
        news_form(&format!("/admin/news/{}", n.id), Some(n), &date_value)
    );
    layout_with_editor("Sửa tin", "/admin/news", &body, true)
}

pub fn hero_page(hero: &Hero) -> String {
    let body = format!(
        r#"<h1 class="text-2xl font-bold mb-4">Hero Banner</h1>
<form method="post" action="/admin/hero/save" class="space-y-4 max-w-2xl">
  {}
  {}
  <div><label class="block text-sm font-medium mb-1">Phụ đề</label>
  <textarea name="subtitle" rows="2" class="w-full border border-gray-300 rounded px-2 py-1.5">{}</textarea></div>
  {}
  {}
  <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded">Lưu</button>
</form>"#,
        text_input("Promo (nhãn nhỏ)", "promo", hero.promo.as_deref().unwrap_or_default()),
        text_input("Tiêu đề", "title", hero.title.as_deref().unwrap_or_default()),
        esc(hero.subtitle.as_deref().unwrap_or_default()),
        text_input("Ảnh URL", "image", hero.image.as_deref().unwrap_or_default()),
        text_input(
            "Nút (text)",
            "button_text",
            hero.button_text.as_deref().unwrap_or("Shop Now")
        ),
    );

    layout("Hero", "/admin/hero", &body)
}

fn config_str<'a>(section: &'a Map<String, Value>, key: &str) -> &'a str {
    section.get(key).and_then(|v| v.as_str()).unwrap_or_default()
}

pub fn site_page(
    brand: &Map<String, Value>,
    topbar: &Map<String, Value>,
    footer: &Map<String, Value>,
    brochures: &[Brochure],
) -> String {
    let icon = {
        let raw = config_str(brand, "icon");
        if raw.is_empty() { "fas fa-mountain" } else { raw }
    };

    let brochure_forms: String = brochures
        .iter()
        .map(|b| {
            format!(
                r#"<div class="mb-6 p-4 border rounded">
  <h2 class="text-lg font-bold mb-2">Brochure: {}</h2>
  <form method="post" action="/admin/site/brochure/{}" class="space-y-2">
    {}
    {}
    {}
    {}
    <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded">Lưu</button>
  </form>
</div>"#,
                esc(&b.slug),
                esc(&b.slug),
                text_input("Tiêu đề", "title", b.title.as_deref().unwrap_or_default()),
                text_input("Mô tả", "desc", b.desc.as_deref().unwrap_or_default()),
                text_input("Ảnh URL", "image", b.image.as_deref().unwrap_or_default()),
                text_input("Nút", "button_text", b.button_text.as_deref().unwrap_or_default()),
            )
        })
        .collect();

    let body = format!(
        r#"<h1 class="text-2xl font-bold mb-4">Cấu hình site</h1>
<div class="mb-8">
  <h2 class="text-lg font-bold mb-2">Thương hiệu (dùng chung Header & Footer)</h2>
  <p class="text-gray-600 text-sm mb-2">Tên app và icon hiển thị ở nav và footer.</p>
  <form method="post" action="/admin/site/brand" class="space-y-2 max-w-2xl">
    {}
    {}
    {}
    <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded">Lưu Thương hiệu</button>
  </form>
</div>
<div class="mb-8">
  <h2 class="text-lg font-bold mb-2">Topbar</h2>
  <form method="post" action="/admin/site/topbar" class="space-y-2 max-w-2xl">
    {}
    {}
    <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded">Lưu Topbar</button>
  </form>
</div>
<div class="mb-8">
  <h2 class="text-lg font-bold mb-2">Footer</h2>
  <form method="post" action="/admin/site/footer" class="space-y-2 max-w-2xl">
    {}
    {}
    {}
    {}
    {}
    <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded">Lưu Footer</button>
  </form>
</div>
{}"#,
        text_input("Tên app", "siteName", config_str(brand, "siteName")),
        text_input("Tagline", "tagline", config_str(brand, "tagline")),
        text_input("Icon (Font Awesome class, VD: fas fa-mountain)", "icon", icon),
        text_input("Free shipping text", "freeShipping", config_str(topbar, "freeShipping")),
        text_input("Hotline", "hotline", config_str(topbar, "hotline")),
        text_input("Địa chỉ", "address", config_str(footer, "address")),
        text_input("Điện thoại", "phone", config_str(footer, "phone")),
        text_input("Email", "email", config_str(footer, "email")),
        text_input("Mô tả công ty", "description", config_str(footer, "description")),
        text_input("Copyright", "copyright", config_str(footer, "copyright")),
        brochure_forms,
    );

    layout("Site Config", "/admin/site", &body)
}
