//! 仪表盘统计 handlers
//!
//! - GET /stats（viewDashboard）
//!
//! 统计口径与 PDF 报表共用 ReportStatistics。

use crate::AppState;
use crate::middleware::{require_permission, require_user};
use crate::utils::response::storage_error;
use api_contract::{ApiResponse, StatsDto};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use buoysense_export::ReportStatistics;
use buoysense_storage::{AlertStore, BuoyStore};
use domain::Permission;

pub async fn dashboard_stats(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewDashboard) {
        return response;
    }

    let buoys = match state.buoy_store.list_buoys().await {
        Ok(buoys) => buoys,
        Err(err) => return storage_error(err),
    };
    let alerts = match state.alert_store.list_alerts().await {
        Ok(alerts) => alerts,
        Err(err) => return storage_error(err),
    };

    let stats = ReportStatistics::compute(&buoys, &alerts);
    let body = StatsDto {
        total_buoys: stats.total_buoys,
        active_buoys: stats.active_buoys,
        critical_alerts: stats.critical_alerts,
        avg_water_level: stats.avg_water_level,
    };
    (StatusCode::OK, Json(ApiResponse::success(body))).into_response()
}
