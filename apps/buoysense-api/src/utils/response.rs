//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：auth_error, forbidden_error, bad_request_error,
//!   not_found_error, validation_error, internal_auth_error, storage_error,
//!   export_error
//! - DTO 转换：user_to_dto, buoy_to_dto, alert_to_dto, notification_to_dto
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与错误码对应
//! - DTO 转换保持领域记录和 DTO 字段一致

use api_contract::{AlertDto, ApiResponse, BuoyDto, NotificationDto, UserDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use buoysense_auth::AuthError;
use buoysense_export::ExportError;
use buoysense_storage::StorageError;
use domain::{Alert, Buoy, Notification, User};
use std::collections::BTreeMap;

/// 认证错误响应
pub fn auth_error(status: StatusCode) -> Response {
    (
        status,
        Json(ApiResponse::<()>::error(
            "AUTH.UNAUTHORIZED",
            "unauthorized",
        )),
    )
        .into_response()
}

/// 禁止访问错误响应
pub fn forbidden_error() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ApiResponse::<()>::error("AUTH.FORBIDDEN", "forbidden")),
    )
        .into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 表单校验错误响应（逐字段消息表）
pub fn validation_error(fields: BTreeMap<String, String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::validation_error(
            "validation failed",
            fields,
        )),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 认证内部错误响应
pub fn internal_auth_error(err: AuthError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 导出错误响应
pub fn export_error(err: ExportError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// User 转 UserDto
pub fn user_to_dto(user: User) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        role: user.role.code().to_string(),
        name: user.name,
    }
}

/// Buoy 转 BuoyDto
pub fn buoy_to_dto(buoy: Buoy) -> BuoyDto {
    BuoyDto {
        id: buoy.id,
        name: buoy.name,
        river: buoy.river,
        latitude: buoy.latitude,
        longitude: buoy.longitude,
        status: buoy.status.code().to_string(),
        battery_level: buoy.battery_level,
        signal_strength: buoy.signal_strength,
        water_level: buoy.water_level,
        temperature: buoy.temperature,
        turbulence: buoy.turbulence,
        tilt: buoy.tilt,
        last_transmission: buoy.last_transmission,
        solar_charging: buoy.solar_charging,
        lora_channel: buoy.lora_channel,
        notes: buoy.notes,
    }
}

/// Alert 转 AlertDto
pub fn alert_to_dto(alert: Alert) -> AlertDto {
    AlertDto {
        id: alert.id,
        buoy_id: alert.buoy_id,
        kind: alert.kind.code().to_string(),
        severity: alert.severity.code().to_string(),
        message: alert.message,
        timestamp: alert.timestamp,
        resolved: alert.resolved,
    }
}

/// Notification 转 NotificationDto
pub fn notification_to_dto(notification: Notification) -> NotificationDto {
    NotificationDto {
        id: notification.id,
        title: notification.title,
        message: notification.message,
        kind: notification.kind.code().to_string(),
        timestamp: notification.timestamp,
        read: notification.read,
        buoy_id: notification.buoy_id,
    }
}
