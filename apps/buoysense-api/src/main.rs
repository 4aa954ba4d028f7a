//! BuoySense 遥测 API 服务入口。
//!
//! 启动流程：加载 .env → 读取配置 → 初始化日志 → 播种数据集注册表 →
//! 组装 AppState → 挂路由与请求追踪中间件 → 监听。

mod handlers;
mod middleware;
mod routes;
mod utils;

use buoysense_auth::{InMemorySessionStore, SessionService};
use buoysense_config::AppConfig;
use buoysense_storage::{
    AlertStore, BuoyStore, InMemoryAlertStore, InMemoryBuoyStore, InMemoryNotificationStore,
    InMemoryWaterLevelStore, NotificationStore, WaterLevelStore,
};
use buoysense_telemetry::init_tracing;
use buoysense_weather::WeatherClient;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 全局应用状态：会话服务 + 共享存储 + 外部能力客户端。
///
/// 所有存储都是单实例，经 Arc 注入各 handler；变更对全部消费方可见。
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionService>,
    pub buoy_store: Arc<dyn BuoyStore>,
    pub alert_store: Arc<dyn AlertStore>,
    pub notification_store: Arc<dyn NotificationStore>,
    pub water_level_store: Arc<dyn WaterLevelStore>,
    pub weather: Arc<WeatherClient>,
    pub session_ttl_seconds: u64,
    pub map_tile_token: Option<String>,
}

impl AppState {
    /// 按配置组装状态，存储播种 fixture 集合。
    pub fn with_fixtures(config: &AppConfig) -> Self {
        let sessions = Arc::new(SessionService::new(
            Arc::new(InMemorySessionStore::new()),
            config.session_ttl_seconds,
        ));
        Self {
            sessions,
            buoy_store: Arc::new(InMemoryBuoyStore::with_fixtures()),
            alert_store: Arc::new(InMemoryAlertStore::with_fixtures()),
            notification_store: Arc::new(InMemoryNotificationStore::with_fixtures()),
            water_level_store: Arc::new(InMemoryWaterLevelStore::with_fixtures()),
            weather: Arc::new(WeatherClient::new(config.openweather_api_key.clone())),
            session_ttl_seconds: config.session_ttl_seconds,
            map_tile_token: config.map_tile_token.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let state = AppState::with_fixtures(&config);

    let app = routes::create_api_router()
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(axum::middleware::from_fn(middleware::request_context))
        .layer(TraceLayer::new_for_http());

    tracing::info!(addr = %config.http_addr, "buoysense-api listening");
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::AppState;
    use axum::http::{header, HeaderMap, HeaderValue};
    use buoysense_config::AppConfig;

    /// 测试状态：fixture 存储 + 无外部密钥。
    pub fn build_state() -> AppState {
        let config = AppConfig {
            http_addr: "127.0.0.1:0".to_string(),
            session_ttl_seconds: 3600,
            openweather_api_key: None,
            map_tile_token: None,
        };
        AppState::with_fixtures(&config)
    }

    /// 以指定邮箱登录并构造 Bearer 请求头。
    pub fn auth_headers(state: &AppState, email: &str) -> HeaderMap {
        let (_, tokens) = state.sessions.login(email, "secret").expect("login");
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", tokens.token)).expect("header"),
        );
        headers
    }
}
