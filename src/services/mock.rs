//! Fixed datasets served when no database is configured. Reads are
//! deterministic; writes in this mode are discarded by the services.

use serde_json::{json, Value};

use crate::models::{News, Product};

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Cà Chua Cherry Hữu Cơ".to_string(),
            category: "Rau củ quả".to_string(),
            price: 45_000,
            original_price: Some(55_000),
            unit: None,
            image: Some(
                "https://images.unsplash.com/photo-1592924357228-91a4daadcfea?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80"
                    .to_string(),
            ),
            rating: 4.5,
            reviews: 45,
            is_hot: false,
            discount: Some("-15%".to_string()),
            tags: vec!["Organic".to_string()],
            description: Some("Cà chua cherry hữu cơ.".to_string()),
            sort_order: 1,
            meta_title: None,
            meta_description: None,
            h1_custom: None,
            h2_custom: None,
            h3_custom: None,
        },
        Product {
            id: 2,
            name: "Gạo Lứt Đỏ Huyết Rồng".to_string(),
            category: "Thực phẩm khô".to_string(),
            price: 80_000,
            original_price: None,
            unit: Some("/2kg".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1586201375761-83865001e31c?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80"
                    .to_string(),
            ),
            rating: 5.0,
            reviews: 128,
            is_hot: false,
            discount: None,
            tags: vec![],
            description: Some("Gạo lứt đỏ huyết rồng.".to_string()),
            sort_order: 2,
            meta_title: None,
            meta_description: None,
            h1_custom: None,
            h2_custom: None,
            h3_custom: None,
        },
    ]
}

pub fn news() -> Vec<News> {
    vec![News {
        id: 1,
        title: "Mùa Thu Hoạch Bơ Sáp 034".to_string(),
        image: Some(
            "https://images.unsplash.com/photo-1523049673856-35691f096315?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80"
                .to_string(),
        ),
        content: Some("<p>Những trái bơ sáp 034 đầu tiên đã lên kệ.</p>".to_string()),
        author: Some("Admin".to_string()),
        date: Some("03/02/2026".to_string()),
        sort_order: 1,
        meta_title: None,
        meta_description: None,
        h1_custom: None,
        h2_custom: None,
        h3_custom: None,
    }]
}

pub fn site() -> Value {
    json!({
        "hero": {
            "promo": "Summer Sale",
            "title": "Fresh Produce For Green Living",
            "subtitle": "Up to 20% off.",
            "image": "https://images.unsplash.com/photo-1542838132-92c53300491e?w=1920&q=80",
            "buttonText": "Shop Now"
        },
        "categories": ["Rau củ quả", "Hạt & Ngũ cốc", "Gia dụng"],
        "brochures": [
            {"slug": "fresh", "title": "Fresh Produce", "desc": "Harvested from Da Lat farms.", "image": "", "buttonText": "Shop Now"},
            {"slug": "essentials", "title": "Green Essentials", "desc": "Natural home care products.", "image": "", "buttonText": "Explore"}
        ],
        "topbar": {
            "freeShipping": "Free shipping for orders over 500k",
            "hotline": "1900 1234",
            "support": "Customer Support"
        },
        "footer": {
            "address": "123 Đường Mây Núi, Đà Lạt",
            "phone": "1900 1234",
            "email": "cskh@mountainharvest.vn"
        }
    })
}
