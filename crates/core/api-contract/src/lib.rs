//! 稳定的 DTO 与 API 响应契约。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
///
/// fields 仅在表单校验失败时出现：字段名 → 校验消息。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
                fields: None,
            }),
        }
    }

    pub fn validation_error(
        message: impl Into<String>,
        fields: BTreeMap<String, String>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: "INVALID.FIELDS".to_string(),
                message: message.into(),
                fields: Some(fields),
            }),
        }
    }
}

/// 登录请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub email: String,
    pub name: String,
    /// 会话过期时间（Unix 毫秒时间戳）。
    pub expires: i64,
}

/// 当前用户返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub role: String,
    pub name: String,
}

/// 浮标返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuoyDto {
    pub id: String,
    pub name: String,
    pub river: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub battery_level: u8,
    pub signal_strength: u8,
    pub water_level: f64,
    pub temperature: f64,
    pub turbulence: u8,
    pub tilt: f64,
    pub last_transmission: String,
    pub solar_charging: u8,
    pub lora_channel: u8,
    pub notes: Option<String>,
}

/// 浮标创建请求体。
///
/// 字段保持表单原样（字符串），由服务端逐字段校验并汇总错误消息。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuoyRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub river: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub battery: Option<String>,
    pub lora_channel: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// 告警返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    pub id: String,
    pub buoy_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub message: String,
    pub timestamp: String,
    pub resolved: bool,
}

/// 通知返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: String,
    pub read: bool,
    pub buoy_id: Option<String>,
}

/// 仪表盘统计返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_buoys: usize,
    pub active_buoys: usize,
    pub critical_alerts: usize,
    pub avg_water_level: f64,
}

/// 天气返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherDto {
    pub temp: f64,
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
    /// "live"（外部服务）或 "mock"（未配置密钥/降级）。
    pub source: String,
}

/// 地图配置返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfigDto {
    pub enabled: bool,
    pub tile_token: Option<String>,
    pub message: Option<String>,
}

/// 导出查询参数。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub format: String,
    pub range: Option<String>,
}
