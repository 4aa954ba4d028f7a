//! JSON 导出文档。
//!
//! 键序稳定：顶层按结构体字段声明序，趋势行内按 BTreeMap 键序。
//! 文档可反序列化回源集合（round-trip 测试锁定）。

use crate::{ExportOptions, ReportDataset};
use chrono::SecondsFormat;
use domain::{Alert, Buoy, WaterLevelSample};
use serde::{Deserialize, Serialize};

/// 导出文档：完整集合 + 导出元数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub buoys: Vec<Buoy>,
    pub water_level_trends: Vec<WaterLevelSample>,
    pub alerts: Vec<Alert>,
    pub export_date: String,
    pub time_range: String,
}

impl ReportDocument {
    pub fn new(dataset: &ReportDataset, options: &ExportOptions) -> Self {
        Self {
            buoys: dataset.buoys.clone(),
            water_level_trends: dataset.water_level_trends.clone(),
            alerts: dataset.alerts.clone(),
            export_date: options
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            time_range: options
                .time_range
                .clone()
                .unwrap_or_else(|| "all".to_string()),
        }
    }
}
