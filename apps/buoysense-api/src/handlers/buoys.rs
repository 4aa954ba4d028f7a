//! 浮标 handlers
//!
//! - GET /buoys：列表（viewBuoys）
//! - POST /buoys：创建（editBuoys），表单校验失败返回逐字段消息表
//! - GET /buoys/{id}：详情（viewBuoys）

use crate::AppState;
use crate::middleware::{require_permission, require_user};
use crate::utils::response::{
    bad_request_error, buoy_to_dto, not_found_error, storage_error, validation_error,
};
use crate::utils::validation::validate_new_buoy;
use api_contract::{ApiResponse, CreateBuoyRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use buoysense_storage::BuoyStore;
use domain::Permission;

#[derive(Debug, serde::Deserialize)]
pub struct BuoyPath {
    pub buoy_id: String,
}

pub async fn list_buoys(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewBuoys) {
        return response;
    }

    match state.buoy_store.list_buoys().await {
        Ok(buoys) => {
            let items = buoys.into_iter().map(buoy_to_dto).collect::<Vec<_>>();
            (StatusCode::OK, Json(ApiResponse::success(items))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

pub async fn get_buoy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(path): Path<BuoyPath>,
) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewBuoys) {
        return response;
    }

    match state.buoy_store.find_buoy(&path.buoy_id).await {
        Ok(Some(buoy)) => {
            (StatusCode::OK, Json(ApiResponse::success(buoy_to_dto(buoy)))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

pub async fn create_buoy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateBuoyRequest>,
) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::EditBuoys) {
        return response;
    }

    let buoy = match validate_new_buoy(&req) {
        Ok(buoy) => buoy,
        Err(fields) => return validation_error(fields),
    };

    match state.buoy_store.find_buoy(&buoy.id).await {
        Ok(Some(_)) => return bad_request_error(format!("buoy {} already exists", buoy.id)),
        Ok(None) => {}
        Err(err) => return storage_error(err),
    }

    match state.buoy_store.add_buoy(buoy).await {
        Ok(created) => {
            tracing::info!(buoy_id = %created.id, "buoy added");
            (
                StatusCode::OK,
                Json(ApiResponse::success(buoy_to_dto(created))),
            )
                .into_response()
        }
        Err(err) => storage_error(err),
    }
}
