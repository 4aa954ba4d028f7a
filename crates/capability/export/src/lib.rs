//! 报表导出能力：CSV / JSON / PDF。
//!
//! 输入是数据集注册表的集合快照，输出是可下载的 artifact
//! （文件名 + MIME 类型 + 字节）。三种格式的字段顺序、文件名模式
//! 与统计口径都是对外契约，测试锁定。

mod csv;
mod json;
mod pdf;
mod report;
mod stats;

use chrono::{DateTime, Utc};
use domain::{Alert, Buoy, WaterLevelSample};

pub use json::ReportDocument;
pub use stats::ReportStatistics;

/// 导出错误。
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// 导出格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Pdf,
}

impl ReportFormat {
    /// 解析格式代码（大小写不敏感）；未知值返回 None。
    pub fn parse(code: &str) -> Option<ReportFormat> {
        match code.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ReportFormat::Csv),
            "json" => Some(ReportFormat::Json),
            "pdf" => Some(ReportFormat::Pdf),
            _ => None,
        }
    }
}

/// 导出输入数据集（注册表集合的快照）。
#[derive(Debug, Clone)]
pub struct ReportDataset {
    pub buoys: Vec<Buoy>,
    pub water_level_trends: Vec<WaterLevelSample>,
    pub alerts: Vec<Alert>,
}

/// 导出选项。
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// 时间范围标签；仅回显到导出元数据，不过滤数据。
    pub time_range: Option<String>,
    /// 导出时刻；进入导出元数据与文件名（epoch 毫秒）。
    pub generated_at: DateTime<Utc>,
}

impl ExportOptions {
    pub fn new(time_range: Option<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            time_range,
            generated_at,
        }
    }
}

/// 可下载的导出产物。
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// 导出数据集为指定格式的产物。
pub fn export_report(
    format: ReportFormat,
    dataset: &ReportDataset,
    options: &ExportOptions,
) -> Result<ExportArtifact, ExportError> {
    match format {
        ReportFormat::Csv => Ok(ExportArtifact {
            filename: "buoy-data.csv".to_string(),
            content_type: "text/csv",
            bytes: csv::buoys_csv(&dataset.buoys).into_bytes(),
        }),
        ReportFormat::Json => {
            let document = ReportDocument::new(dataset, options);
            Ok(ExportArtifact {
                filename: "buoy-data.json".to_string(),
                content_type: "application/json",
                bytes: serde_json::to_vec_pretty(&document)?,
            })
        }
        ReportFormat::Pdf => Ok(ExportArtifact {
            filename: format!(
                "buoysense-report-{}.pdf",
                options.generated_at.timestamp_millis()
            ),
            content_type: "application/pdf",
            bytes: report::analytics_report(dataset, options),
        }),
    }
}

/// 单浮标详情报表（PDF）。
pub fn export_buoy_report(
    buoy: &Buoy,
    trend: &[(String, f64)],
    options: &ExportOptions,
) -> ExportArtifact {
    ExportArtifact {
        filename: format!(
            "buoy-{}-report-{}.pdf",
            buoy.id,
            options.generated_at.timestamp_millis()
        ),
        content_type: "application/pdf",
        bytes: report::buoy_report(buoy, trend, options),
    }
}
