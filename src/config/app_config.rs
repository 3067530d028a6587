use crate::error::{AppError, Result};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub admin: AdminConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

/// Database access is optional: when neither a connection URL nor discrete
/// host parts are configured, the application runs in mock/degraded mode.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// HTTP Basic credentials for the admin console. The gate is open when
/// either variable is missing.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AssetsConfig {
    pub public_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: env::var("MAX_BODY_SIZE")
                    .unwrap_or_else(|_| "10485760".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            database: DatabaseConfig {
                url: connection_url_from_env(),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid DB_MAX_CONNECTIONS value".to_string())
                    })?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("FRONTEND_URL")
                    .map(|v| {
                        v.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            admin: AdminConfig {
                user: env::var("ADMIN_USER").ok().filter(|v| !v.is_empty()),
                password: env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty()),
            },
            assets: AssetsConfig {
                public_dir: env::var("PUBLIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("public")),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl AdminConfig {
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.user, &self.password) {
            (Some(u), Some(p)) => Some((u.clone(), p.clone())),
            _ => None,
        }
    }
}

/// `POSTGRES_URL`/`DATABASE_URL` win; otherwise a URL is assembled from the
/// discrete `POSTGRES_*` parts. No host configured means no database.
fn connection_url_from_env() -> Option<String> {
    if let Ok(url) = env::var("POSTGRES_URL") {
        if !url.is_empty() {
            return Some(url);
        }
    }
    if let Ok(url) = env::var("DATABASE_URL") {
        if !url.is_empty() {
            return Some(url);
        }
    }

    let host = env::var("POSTGRES_HOST").ok().filter(|h| !h.is_empty())?;
    let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let user = env::var("POSTGRES_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = env::var("POSTGRES_PASSWORD").unwrap_or_default();
    let db = env::var("POSTGRES_DB").unwrap_or_else(|_| "postgres".to_string());

    Some(format!(
        "postgres://{}:{}@{}:{}/{}",
        utf8_percent_encode(&user, NON_ALPHANUMERIC),
        utf8_percent_encode(&password, NON_ALPHANUMERIC),
        host,
        port,
        db
    ))
}
