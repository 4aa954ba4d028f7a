//! 追踪与请求 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub logins: u64,
    pub sessions_revoked: u64,
    pub exports_generated: u64,
    pub weather_live: u64,
    pub weather_mock: u64,
    pub weather_fetch_failure: u64,
}

/// 基础指标。
pub struct TelemetryMetrics {
    logins: AtomicU64,
    sessions_revoked: AtomicU64,
    exports_generated: AtomicU64,
    weather_live: AtomicU64,
    weather_mock: AtomicU64,
    weather_fetch_failure: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            logins: AtomicU64::new(0),
            sessions_revoked: AtomicU64::new(0),
            exports_generated: AtomicU64::new(0),
            weather_live: AtomicU64::new(0),
            weather_mock: AtomicU64::new(0),
            weather_fetch_failure: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            logins: self.logins.load(Ordering::Relaxed),
            sessions_revoked: self.sessions_revoked.load(Ordering::Relaxed),
            exports_generated: self.exports_generated.load(Ordering::Relaxed),
            weather_live: self.weather_live.load(Ordering::Relaxed),
            weather_mock: self.weather_mock.load(Ordering::Relaxed),
            weather_fetch_failure: self.weather_fetch_failure.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录登录成功次数。
pub fn record_login() {
    metrics().logins.fetch_add(1, Ordering::Relaxed);
}

/// 记录会话登出次数。
pub fn record_session_revoked() {
    metrics().sessions_revoked.fetch_add(1, Ordering::Relaxed);
}

/// 记录报表导出次数。
pub fn record_export_generated() {
    metrics().exports_generated.fetch_add(1, Ordering::Relaxed);
}

/// 记录外部天气查询成功次数。
pub fn record_weather_live() {
    metrics().weather_live.fetch_add(1, Ordering::Relaxed);
}

/// 记录模拟天气读数返回次数。
pub fn record_weather_mock() {
    metrics().weather_mock.fetch_add(1, Ordering::Relaxed);
}

/// 记录外部天气查询失败次数（失败后降级为模拟读数）。
pub fn record_weather_fetch_failure() {
    metrics().weather_fetch_failure.fetch_add(1, Ordering::Relaxed);
}
