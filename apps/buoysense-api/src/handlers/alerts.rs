//! 告警 handlers
//!
//! - GET /alerts：列表（viewAlerts）
//! - POST /alerts/{id}/resolve：处置（viewAlerts），改动落在共享存储

use crate::AppState;
use crate::middleware::{require_permission, require_user};
use crate::utils::response::{alert_to_dto, not_found_error, storage_error};
use api_contract::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use buoysense_storage::AlertStore;
use domain::Permission;

#[derive(Debug, serde::Deserialize)]
pub struct AlertPath {
    pub alert_id: String,
}

pub async fn list_alerts(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewAlerts) {
        return response;
    }

    match state.alert_store.list_alerts().await {
        Ok(alerts) => {
            let items = alerts.into_iter().map(alert_to_dto).collect::<Vec<_>>();
            (StatusCode::OK, Json(ApiResponse::success(items))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

pub async fn resolve_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(path): Path<AlertPath>,
) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewAlerts) {
        return response;
    }

    match state.alert_store.resolve_alert(&path.alert_id).await {
        Ok(Some(alert)) => {
            (StatusCode::OK, Json(ApiResponse::success(alert_to_dto(alert)))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
