pub mod mock;
pub mod news_service;
pub mod product_service;
pub mod site_service;
