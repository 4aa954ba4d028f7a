//! 天气 handlers
//!
//! - GET /buoys/{id}/weather（viewDashboard）
//!
//! 外部服务失败不暴露给调用方：客户端内部降级为模拟读数，
//! 响应体的 source 字段标明 live/mock。

use crate::AppState;
use crate::middleware::{require_permission, require_user};
use crate::utils::response::{not_found_error, storage_error};
use api_contract::{ApiResponse, WeatherDto};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use buoysense_storage::BuoyStore;
use domain::Permission;

use super::buoys::BuoyPath;

pub async fn buoy_weather(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(path): Path<BuoyPath>,
) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewDashboard) {
        return response;
    }

    let buoy = match state.buoy_store.find_buoy(&path.buoy_id).await {
        Ok(Some(buoy)) => buoy,
        Ok(None) => return not_found_error(),
        Err(err) => return storage_error(err),
    };

    let reading = state.weather.current(buoy.latitude, buoy.longitude).await;
    let body = WeatherDto {
        temp: reading.temp,
        description: reading.description,
        humidity: reading.humidity,
        wind_speed: reading.wind_speed,
        source: reading.source.code().to_string(),
    };
    (StatusCode::OK, Json(ApiResponse::success(body))).into_response()
}
