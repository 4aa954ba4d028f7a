//! 通知 handlers
//!
//! - GET /notifications：列表（viewDashboard）
//! - POST /notifications/{id}/read：单条已读
//! - POST /notifications/read-all：全部已读，返回改动条数

use crate::AppState;
use crate::middleware::{require_permission, require_user};
use crate::utils::response::{not_found_error, notification_to_dto, storage_error};
use api_contract::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use buoysense_storage::NotificationStore;
use domain::Permission;

#[derive(Debug, serde::Deserialize)]
pub struct NotificationPath {
    pub notification_id: String,
}

pub async fn list_notifications(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewDashboard) {
        return response;
    }

    match state.notification_store.list_notifications().await {
        Ok(notifications) => {
            let items = notifications
                .into_iter()
                .map(notification_to_dto)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(ApiResponse::success(items))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(path): Path<NotificationPath>,
) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewDashboard) {
        return response;
    }

    match state
        .notification_store
        .mark_read(&path.notification_id)
        .await
    {
        Ok(Some(notification)) => (
            StatusCode::OK,
            Json(ApiResponse::success(notification_to_dto(notification))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewDashboard) {
        return response;
    }

    match state.notification_store.mark_all_read().await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({ "updated": updated }))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}
