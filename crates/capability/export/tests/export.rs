use buoysense_export::{
    export_buoy_report, export_report, ExportOptions, ReportDataset, ReportDocument,
    ReportFormat, ReportStatistics,
};
use chrono::{TimeZone, Utc};
use domain::{Alert, AlertKind, AlertSeverity, Buoy, BuoyStatus, WaterLevelSample};
use std::collections::BTreeMap;

fn buoy(id: &str, water_level: f64, status: BuoyStatus) -> Buoy {
    Buoy {
        id: id.to_string(),
        name: format!("Station {id}"),
        river: "Pasig River".to_string(),
        latitude: 14.6,
        longitude: 121.5,
        status,
        battery_level: 80,
        signal_strength: 90,
        water_level,
        temperature: 28.0,
        turbulence: 10,
        tilt: 1.0,
        last_transmission: "2026-08-06T08:00:00.000Z".to_string(),
        solar_charging: 40,
        lora_channel: 7,
        notes: None,
    }
}

fn alert(id: &str, severity: AlertSeverity) -> Alert {
    Alert {
        id: id.to_string(),
        buoy_id: "B001".to_string(),
        kind: AlertKind::WaterLevel,
        severity,
        message: "Water level rising".to_string(),
        timestamp: "2026-08-06T07:55:00.000Z".to_string(),
        resolved: false,
    }
}

fn sample(time: &str, levels: &[(&str, f64)]) -> WaterLevelSample {
    WaterLevelSample {
        time: time.to_string(),
        levels: levels
            .iter()
            .map(|(id, level)| ((*id).to_string(), *level))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn options() -> ExportOptions {
    let generated_at = Utc.with_ymd_and_hms(2026, 8, 6, 8, 30, 0).unwrap();
    ExportOptions::new(None, generated_at)
}

fn dataset() -> ReportDataset {
    ReportDataset {
        buoys: vec![
            buoy("B001", 2.3, BuoyStatus::Normal),
            buoy("B002", 3.1, BuoyStatus::Rising),
            buoy("B004", 4.2, BuoyStatus::Offline),
        ],
        water_level_trends: vec![
            sample("00:00", &[("B001", 2.1), ("B002", 2.9), ("B004", 4.0)]),
            sample("04:00", &[("B001", 2.2), ("B002", 3.0), ("B004", 4.1)]),
        ],
        alerts: vec![
            alert("A001", AlertSeverity::Critical),
            alert("A002", AlertSeverity::Warning),
        ],
    }
}

#[test]
fn csv_has_fixed_header_and_one_row_per_buoy() {
    let artifact = export_report(ReportFormat::Csv, &dataset(), &options()).expect("csv");
    assert_eq!(artifact.filename, "buoy-data.csv");
    assert_eq!(artifact.content_type, "text/csv");

    let text = String::from_utf8(artifact.bytes).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Buoy ID,Name,River,Status,Water Level,Battery,Signal,Last Transmission"
    );
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        "B001,Station B001,Pasig River,normal,2.3,80,90,2026-08-06T08:00:00.000Z"
    );
}

// 空集合导出：只有表头行。
#[test]
fn csv_of_empty_collection_is_header_only() {
    let empty = ReportDataset {
        buoys: Vec::new(),
        water_level_trends: Vec::new(),
        alerts: Vec::new(),
    };
    let artifact = export_report(ReportFormat::Csv, &empty, &options()).expect("csv");
    let text = String::from_utf8(artifact.bytes).expect("utf8");
    assert_eq!(
        text,
        "Buoy ID,Name,River,Status,Water Level,Battery,Signal,Last Transmission\n"
    );
    assert_eq!(text.lines().count(), 1);
}

// JSON round-trip：反序列化结果与源集合逐字段一致。
#[test]
fn json_round_trips_field_for_field() {
    let dataset = dataset();
    let artifact = export_report(ReportFormat::Json, &dataset, &options()).expect("json");
    assert_eq!(artifact.filename, "buoy-data.json");
    assert_eq!(artifact.content_type, "application/json");

    let document: ReportDocument = serde_json::from_slice(&artifact.bytes).expect("parse");
    assert_eq!(document.buoys, dataset.buoys);
    assert_eq!(document.water_level_trends, dataset.water_level_trends);
    assert_eq!(document.alerts, dataset.alerts);
    assert_eq!(document.time_range, "all");
    assert_eq!(document.export_date, "2026-08-06T08:30:00.000Z");
}

#[test]
fn json_echoes_requested_time_range() {
    let generated_at = Utc.with_ymd_and_hms(2026, 8, 6, 8, 30, 0).unwrap();
    let options = ExportOptions::new(Some("last-7-days".to_string()), generated_at);
    let artifact = export_report(ReportFormat::Json, &dataset(), &options).expect("json");
    let document: ReportDocument = serde_json::from_slice(&artifact.bytes).expect("parse");
    assert_eq!(document.time_range, "last-7-days");
}

#[test]
fn mean_water_level_rounds_to_two_decimals() {
    let buoys: Vec<Buoy> = [2.3, 3.1, 1.8, 4.2, 3.8, 2.5]
        .iter()
        .enumerate()
        .map(|(index, level)| buoy(&format!("B{:03}", index + 1), *level, BuoyStatus::Normal))
        .collect();
    let stats = ReportStatistics::compute(&buoys, &[]);
    assert_eq!(stats.avg_water_level, 2.95);
}

#[test]
fn statistics_guard_against_empty_collections() {
    let stats = ReportStatistics::compute(&[], &[]);
    assert_eq!(stats.total_buoys, 0);
    assert_eq!(stats.active_buoys, 0);
    assert_eq!(stats.critical_alerts, 0);
    assert_eq!(stats.avg_water_level, 0.0);
}

#[test]
fn statistics_count_active_and_critical() {
    let dataset = dataset();
    let stats = ReportStatistics::compute(&dataset.buoys, &dataset.alerts);
    assert_eq!(stats.total_buoys, 3);
    assert_eq!(stats.active_buoys, 2);
    assert_eq!(stats.critical_alerts, 1);
    assert_eq!(stats.avg_water_level, 3.2);
}

#[test]
fn pdf_report_carries_sections_and_footer() {
    let artifact = export_report(ReportFormat::Pdf, &dataset(), &options()).expect("pdf");
    assert_eq!(artifact.filename, "buoysense-report-1786005000000.pdf");
    assert_eq!(artifact.content_type, "application/pdf");
    assert!(artifact.bytes.starts_with(b"%PDF-1.4"));

    // 内容流未压缩，文本可直接检索
    let text = String::from_utf8_lossy(&artifact.bytes);
    assert!(text.contains("BuoySense Analytics Report"));
    assert!(text.contains("Buoy Status Summary"));
    assert!(text.contains("Recent Alerts"));
    assert!(text.contains("Statistics"));
    assert!(text.contains("Average Water Level: 3.20m"));
    assert!(text.contains("Page 1 of 1"));
    assert!(text.contains("BuoySense Flood Monitoring System"));
}

#[test]
fn pdf_overflows_to_extra_pages() {
    let mut big = dataset();
    big.buoys = (1..=50)
        .map(|index| buoy(&format!("B{index:03}"), 2.0, BuoyStatus::Normal))
        .collect();
    let artifact = export_report(ReportFormat::Pdf, &big, &options()).expect("pdf");
    let text = String::from_utf8_lossy(&artifact.bytes);
    assert!(text.contains("/Count 2"));
    assert!(text.contains("Page 1 of 2"));
    assert!(text.contains("Page 2 of 2"));
}

#[test]
fn buoy_report_uses_per_buoy_filename() {
    let buoy = buoy("B005", 3.8, BuoyStatus::Alert);
    let trend = vec![("00:00".to_string(), 2.8), ("04:00".to_string(), 3.1)];
    let artifact = export_buoy_report(&buoy, &trend, &options());
    assert_eq!(artifact.filename, "buoy-B005-report-1786005000000.pdf");
    let text = String::from_utf8_lossy(&artifact.bytes);
    assert!(text.contains("Buoy B005 - Detailed Report"));
    assert!(text.contains("Current Status"));
    assert!(text.contains("Water Level Trend"));
}

#[test]
fn report_format_parse_is_case_insensitive() {
    assert_eq!(ReportFormat::parse("CSV"), Some(ReportFormat::Csv));
    assert_eq!(ReportFormat::parse(" pdf "), Some(ReportFormat::Pdf));
    assert_eq!(ReportFormat::parse("xlsx"), None);
}
