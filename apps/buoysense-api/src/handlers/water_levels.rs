//! 水位趋势 handlers
//!
//! - GET /water-levels（viewAnalytics）
//!
//! 采样记录本身就是契约形态（time + 每浮标水位的扁平键），直接序列化。

use crate::AppState;
use crate::middleware::{require_permission, require_user};
use crate::utils::response::storage_error;
use api_contract::ApiResponse;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use buoysense_storage::WaterLevelStore;
use domain::Permission;

pub async fn list_water_levels(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewAnalytics) {
        return response;
    }

    match state.water_level_store.list_samples().await {
        Ok(samples) => (StatusCode::OK, Json(ApiResponse::success(samples))).into_response(),
        Err(err) => storage_error(err),
    }
}
