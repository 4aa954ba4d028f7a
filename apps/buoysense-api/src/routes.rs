//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 会话接口：/login, /logout, /me
//! - 浮标：/buoys/*（列表、创建、详情、单浮标报表/天气）
//! - 告警：/alerts/*
//! - 通知：/notifications/*
//! - 分析：/water-levels, /stats
//! - 导出：/export
//! - 地图配置：/map/config

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .route("/buoys", get(list_buoys).post(create_buoy))
        .route("/buoys/:buoy_id", get(get_buoy))
        .route("/buoys/:buoy_id/report", get(buoy_report))
        .route("/buoys/:buoy_id/weather", get(buoy_weather))
        .route("/alerts", get(list_alerts))
        .route("/alerts/:alert_id/resolve", post(resolve_alert))
        .route("/notifications", get(list_notifications))
        .route("/notifications/read-all", post(mark_all_notifications_read))
        .route("/notifications/:notification_id/read", post(mark_notification_read))
        .route("/water-levels", get(list_water_levels))
        .route("/stats", get(dashboard_stats))
        .route("/export", get(export_report))
        .route("/map/config", get(map_config))
}
