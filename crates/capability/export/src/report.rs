//! PDF 报表装配。
//!
//! 分析报表：标题块 → 浮标状态汇总表 → 近期告警表（前 10 条）→
//! 统计块；单浮标报表：标题块 → 当前状态表 → 水位趋势表。
//! 纵向空间耗尽时换页，正文完成后统一回填每页页脚
//! （居中 "Page i of n" + 左侧产品名）。

use crate::pdf::{estimate_width, Font, PdfWriter, Rgb};
use crate::stats::ReportStatistics;
use crate::{ExportOptions, ReportDataset};
use chrono::DateTime;
use domain::Buoy;

const PAGE_WIDTH: f64 = 595.0;
const PAGE_HEIGHT: f64 = 842.0;
const MARGIN: f64 = 40.0;
// 页脚保留区：正文不得低于此线
const FOOTER_LINE: f64 = 60.0;
const ROW_HEIGHT: f64 = 18.0;

const BRAND: Rgb = Rgb(40, 116, 166);
const HEADING: Rgb = Rgb(40, 40, 40);
const BODY: Rgb = Rgb(60, 60, 60);
const MUTED: Rgb = Rgb(100, 100, 100);
const FOOTER: Rgb = Rgb(150, 150, 150);
const ALT_ROW: Rgb = Rgb(245, 245, 245);
const WHITE: Rgb = Rgb(255, 255, 255);

/// 自上而下的光标布局，写满即换页。
struct ReportLayout {
    writer: PdfWriter,
    y: f64,
}

impl ReportLayout {
    fn new() -> Self {
        Self {
            writer: PdfWriter::new(PAGE_WIDTH, PAGE_HEIGHT),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// 确保还有 needed 的纵向空间，否则换页。
    fn ensure_room(&mut self, needed: f64) {
        if self.y - needed < FOOTER_LINE {
            self.writer.new_page();
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn line(&mut self, font: Font, size: f64, color: Rgb, content: &str) {
        self.ensure_room(size + 4.0);
        self.y -= size;
        self.writer.text(font, size, color, MARGIN, self.y, content);
        self.y -= 4.0;
    }

    fn gap(&mut self, amount: f64) {
        self.y -= amount;
    }

    /// 渲染表格：可选表头（品牌色底 + 白字）、斑马纹数据行。
    fn table(&mut self, widths: &[f64], header: Option<&[&str]>, rows: &[Vec<String>]) {
        if let Some(cells) = header {
            self.ensure_room(ROW_HEIGHT * 2.0);
            self.y -= ROW_HEIGHT;
            let total: f64 = widths.iter().sum();
            self.writer.fill_rect(BRAND, MARGIN, self.y, total, ROW_HEIGHT);
            self.row_text(widths, cells, Font::Bold, WHITE);
        }
        for (index, row) in rows.iter().enumerate() {
            self.ensure_room(ROW_HEIGHT);
            self.y -= ROW_HEIGHT;
            if index % 2 == 1 {
                let total: f64 = widths.iter().sum();
                self.writer.fill_rect(ALT_ROW, MARGIN, self.y, total, ROW_HEIGHT);
            }
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.row_text(widths, &cells, Font::Regular, HEADING);
        }
    }

    fn row_text(&mut self, widths: &[f64], cells: &[&str], font: Font, color: Rgb) {
        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(widths.iter()) {
            let fitted = fit_text(font, 9.0, *width - 8.0, cell);
            self.writer.text(font, 9.0, color, x + 4.0, self.y + 5.5, &fitted);
            x += width;
        }
    }

    /// 回填页脚并产出字节。
    fn finish(mut self) -> Vec<u8> {
        let pages = self.writer.page_count();
        for page in 0..pages {
            self.writer.text_centered_on_page(
                page,
                Font::Regular,
                8.0,
                FOOTER,
                30.0,
                &format!("Page {} of {}", page + 1, pages),
            );
            self.writer.text_on_page(
                page,
                Font::Regular,
                8.0,
                FOOTER,
                MARGIN,
                30.0,
                "BuoySense Flood Monitoring System",
            );
        }
        self.writer.finish()
    }
}

/// 单元格文本截断（近似宽度，超出以省略号收尾）。
fn fit_text(font: Font, size: f64, max_width: f64, content: &str) -> String {
    if estimate_width(font, size, content) <= max_width {
        return content.to_string();
    }
    let mut fitted = String::new();
    for ch in content.chars() {
        fitted.push(ch);
        if estimate_width(font, size, &fitted) + estimate_width(font, size, "...") > max_width {
            fitted.pop();
            fitted.push_str("...");
            return fitted;
        }
    }
    fitted
}

/// RFC3339 时间戳 → 报表短格式；解析失败时原样输出。
fn short_timestamp(value: &str) -> String {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// 分析报表。
pub fn analytics_report(dataset: &ReportDataset, options: &ExportOptions) -> Vec<u8> {
    let mut layout = ReportLayout::new();

    layout.line(Font::Bold, 20.0, BRAND, "BuoySense Analytics Report");
    layout.gap(2.0);
    let date = options.generated_at.format("%B %-d, %Y");
    layout.line(Font::Regular, 11.0, MUTED, &format!("Generated: {date}"));
    if let Some(range) = &options.time_range {
        layout.line(Font::Regular, 11.0, MUTED, &format!("Time Range: {range}"));
    }

    layout.gap(10.0);
    layout.line(Font::Bold, 14.0, HEADING, "Buoy Status Summary");
    layout.gap(2.0);
    let buoy_rows: Vec<Vec<String>> = dataset
        .buoys
        .iter()
        .map(|buoy| {
            vec![
                buoy.id.clone(),
                buoy.name.clone(),
                buoy.river.clone(),
                buoy.status.code().to_string(),
                format!("{}m", buoy.water_level),
                format!("{}%", buoy.battery_level),
                format!("{}%", buoy.signal_strength),
            ]
        })
        .collect();
    layout.table(
        &[55.0, 110.0, 90.0, 60.0, 75.0, 60.0, 65.0],
        Some(&[
            "Buoy ID",
            "Name",
            "River",
            "Status",
            "Water Level",
            "Battery",
            "Signal",
        ]),
        &buoy_rows,
    );

    layout.gap(14.0);
    layout.line(Font::Bold, 14.0, HEADING, "Recent Alerts");
    layout.gap(2.0);
    let alert_rows: Vec<Vec<String>> = dataset
        .alerts
        .iter()
        .take(10)
        .map(|alert| {
            vec![
                alert.id.clone(),
                alert.kind.code().to_string(),
                alert.severity.code().to_string(),
                alert.buoy_id.clone(),
                short_timestamp(&alert.timestamp),
            ]
        })
        .collect();
    layout.table(
        &[60.0, 95.0, 80.0, 70.0, 210.0],
        Some(&["Alert ID", "Type", "Severity", "Buoy ID", "Timestamp"]),
        &alert_rows,
    );

    layout.gap(14.0);
    layout.line(Font::Bold, 14.0, HEADING, "Statistics");
    layout.gap(2.0);
    let stats = ReportStatistics::compute(&dataset.buoys, &dataset.alerts);
    layout.line(
        Font::Regular,
        10.0,
        BODY,
        &format!("Total Buoys: {}", stats.total_buoys),
    );
    layout.line(
        Font::Regular,
        10.0,
        BODY,
        &format!("Active Buoys: {}", stats.active_buoys),
    );
    layout.line(
        Font::Regular,
        10.0,
        BODY,
        &format!("Critical Alerts: {}", stats.critical_alerts),
    );
    layout.line(
        Font::Regular,
        10.0,
        BODY,
        &format!("Average Water Level: {:.2}m", stats.avg_water_level),
    );

    layout.finish()
}

/// 单浮标详情报表。
pub fn buoy_report(buoy: &Buoy, trend: &[(String, f64)], options: &ExportOptions) -> Vec<u8> {
    let mut layout = ReportLayout::new();

    layout.line(
        Font::Bold,
        22.0,
        BRAND,
        &format!("Buoy {} - Detailed Report", buoy.id),
    );
    layout.gap(2.0);
    let date = options.generated_at.format("%B %-d, %Y %H:%M");
    layout.line(Font::Regular, 10.0, MUTED, &format!("Generated: {date}"));

    layout.gap(10.0);
    layout.line(Font::Bold, 14.0, HEADING, "Current Status");
    layout.gap(2.0);
    let status_rows = vec![
        vec!["Status".to_string(), buoy.status.code().to_string()],
        vec![
            "Signal Strength".to_string(),
            format!("{}%", buoy.signal_strength),
        ],
        vec![
            "Battery Level".to_string(),
            format!("{}%", buoy.battery_level),
        ],
        vec![
            "Current Water Level".to_string(),
            format!("{}m", buoy.water_level),
        ],
        vec![
            "Last Update".to_string(),
            short_timestamp(&buoy.last_transmission),
        ],
    ];
    layout.table(&[160.0, 355.0], None, &status_rows);

    if !trend.is_empty() {
        layout.gap(14.0);
        layout.line(Font::Bold, 14.0, HEADING, "Water Level Trend");
        layout.gap(2.0);
        let trend_rows: Vec<Vec<String>> = trend
            .iter()
            .map(|(time, level)| vec![time.clone(), format!("{level}m")])
            .collect();
        layout.table(&[160.0, 355.0], Some(&["Time", "Water Level"]), &trend_rows);
    }

    layout.finish()
}
