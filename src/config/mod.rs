mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AssetsConfig, CorsConfig, DatabaseConfig, ServerConfig,
};
