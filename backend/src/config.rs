use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use dotenvy::dotenv;

use crate::error::AppError;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebConfig {
    pub addr: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors_origin: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StaticConfig {
    /// Root of the built front-end.
    pub public_dir: PathBuf,
    /// Entry document served for `/` and for every unresolved path.
    pub index_file: String,
}

impl StaticConfig {
    pub fn index_path(&self) -> PathBuf {
        self.public_dir.join(&self.index_file)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Answer unknown `/api/*` paths with 404 instead of 200.
    pub strict_not_found: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub web: WebConfig,
    #[serde(rename = "static")]
    pub static_files: StaticConfig,
    pub api: ApiConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            web: WebConfig {
                addr: "127.0.0.1".to_string(),
                port: 8080,
                cors_origin: None,
            },
            static_files: StaticConfig {
                public_dir: PathBuf::from("public"),
                index_file: "index.html".to_string(),
            },
            api: ApiConfig {
                strict_not_found: false,
            },
            log: LogConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        let config: AppConfig = Self::figment().extract()?;
        Ok(config)
    }

    /// Defaults, then `Config.toml`, then `APP_`-prefixed variables
    /// (e.g. `APP_WEB__PORT`, `APP_STATIC__PUBLIC_DIR`).
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("Config.toml"))
            .merge(Env::prefixed("APP_").split("__"))
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.web.addr, self.web.port)
    }
}
