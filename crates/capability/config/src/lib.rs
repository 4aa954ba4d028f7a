//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
///
/// 天气密钥与地图 token 均为可选：缺失时对应能力降级（模拟读数/占位面板），
/// 不阻止服务启动。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub session_ttl_seconds: u64,
    pub openweather_api_key: Option<String>,
    pub map_tile_token: Option<String>,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr =
            env::var("BUOYSENSE_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let session_ttl_seconds =
            read_u64_with_default("BUOYSENSE_SESSION_TTL_SECONDS", 86_400)?;
        let openweather_api_key = read_optional("BUOYSENSE_OPENWEATHER_API_KEY");
        let map_tile_token = read_optional("BUOYSENSE_MAPBOX_TOKEN");

        Ok(Self {
            http_addr,
            session_ttl_seconds,
            openweather_api_key,
            map_tile_token,
        })
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
