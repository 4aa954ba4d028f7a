//! CSV 导出。
//!
//! 列序固定，值按 Display 原样拼接，不做引号转义；
//! fixture 数据不含逗号/引号，该限制是既定行为。

use domain::Buoy;

const HEADER: &str = "Buoy ID,Name,River,Status,Water Level,Battery,Signal,Last Transmission";

/// 浮标集合 → CSV 文本。空集合时只有表头行。
pub fn buoys_csv(buoys: &[Buoy]) -> String {
    let rows = buoys
        .iter()
        .map(|buoy| {
            format!(
                "{},{},{},{},{},{},{},{}",
                buoy.id,
                buoy.name,
                buoy.river,
                buoy.status.code(),
                buoy.water_level,
                buoy.battery_level,
                buoy.signal_strength,
                buoy.last_transmission
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{HEADER}\n{rows}")
}
