//! 遥测领域数据模型。
//!
//! 这些记录同时是 JSON 导出契约，字段名按 camelCase 序列化。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 浮标运行状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuoyStatus {
    Normal,
    Rising,
    Alert,
    Offline,
}

impl BuoyStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BuoyStatus::Normal => "normal",
            BuoyStatus::Rising => "rising",
            BuoyStatus::Alert => "alert",
            BuoyStatus::Offline => "offline",
        }
    }

    /// 解析状态代码；未知值返回 None。
    pub fn parse(code: &str) -> Option<BuoyStatus> {
        match code {
            "normal" => Some(BuoyStatus::Normal),
            "rising" => Some(BuoyStatus::Rising),
            "alert" => Some(BuoyStatus::Alert),
            "offline" => Some(BuoyStatus::Offline),
            _ => None,
        }
    }
}

/// 浮标记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buoy {
    pub id: String,
    pub name: String,
    pub river: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: BuoyStatus,
    pub battery_level: u8,
    pub signal_strength: u8,
    pub water_level: f64,
    pub temperature: f64,
    pub turbulence: u8,
    pub tilt: f64,
    pub last_transmission: String,
    pub solar_charging: u8,
    pub lora_channel: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// 告警类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    WaterLevel,
    Communication,
    Battery,
    Tilt,
}

impl AlertKind {
    pub fn code(&self) -> &'static str {
        match self {
            AlertKind::WaterLevel => "water_level",
            AlertKind::Communication => "communication",
            AlertKind::Battery => "battery",
            AlertKind::Tilt => "tilt",
        }
    }
}

/// 告警级别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn code(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }
}

/// 告警记录。buoy_id 为弱引用，不强制存在性校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub buoy_id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: String,
    pub resolved: bool,
}

/// 通知类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    System,
    Battery,
}

impl NotificationKind {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationKind::Alert => "alert",
            NotificationKind::System => "system",
            NotificationKind::Battery => "battery",
        }
    }
}

/// 通知记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timestamp: String,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buoy_id: Option<String>,
}

/// 水位趋势采样：一个时间桶内每个浮标的水位。
///
/// levels 覆盖 fixture 中出现的全部浮标 ID（无稀疏行），
/// 使用 BTreeMap 保证序列化键序稳定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLevelSample {
    pub time: String,
    #[serde(flatten)]
    pub levels: BTreeMap<String, f64>,
}
