//! 报表统计口径。
//!
//! 与仪表盘总览卡共用：总数、在线数（非 offline）、critical 告警数、
//! 平均水位（两位小数）。空集合时平均值为 0，无除零。

use domain::{Alert, AlertSeverity, Buoy, BuoyStatus};

/// 统计块。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportStatistics {
    pub total_buoys: usize,
    pub active_buoys: usize,
    pub critical_alerts: usize,
    pub avg_water_level: f64,
}

impl ReportStatistics {
    /// 从集合计算统计块。
    pub fn compute(buoys: &[Buoy], alerts: &[Alert]) -> Self {
        let total_buoys = buoys.len();
        let active_buoys = buoys
            .iter()
            .filter(|buoy| buoy.status != BuoyStatus::Offline)
            .count();
        let critical_alerts = alerts
            .iter()
            .filter(|alert| alert.severity == AlertSeverity::Critical)
            .count();
        let avg_water_level = if buoys.is_empty() {
            0.0
        } else {
            let sum: f64 = buoys.iter().map(|buoy| buoy.water_level).sum();
            round2(sum / total_buoys as f64)
        };
        Self {
            total_buoys,
            active_buoys,
            critical_alerts,
            avg_water_level,
        }
    }
}

/// 四舍五入到两位小数。
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
