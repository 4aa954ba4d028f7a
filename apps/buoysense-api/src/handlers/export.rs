//! 导出 handlers
//!
//! - GET /export?format=csv|json|pdf[&range=…]：数据集导出（exportData）
//! - GET /buoys/{id}/report：单浮标 PDF 报表（exportData）
//!
//! 产物以附件下载形式返回：Content-Type + Content-Disposition。

use crate::AppState;
use crate::middleware::{require_permission, require_user};
use crate::utils::response::{bad_request_error, export_error, not_found_error, storage_error};
use api_contract::ExportQuery;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use buoysense_export::{
    ExportArtifact, ExportOptions, ReportDataset, ReportFormat, export_buoy_report,
};
use buoysense_storage::{AlertStore, BuoyStore, WaterLevelStore};
use chrono::Utc;
use domain::Permission;

use super::buoys::BuoyPath;

/// 导出产物 → 附件下载响应。
fn artifact_response(artifact: ExportArtifact) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", artifact.filename);
    let mut response = (StatusCode::OK, artifact.bytes).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(artifact.content_type),
    );
    response.headers_mut().insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );
    response
}

pub async fn export_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ExportQuery>,
) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ExportData) {
        return response;
    }

    let Some(format) = ReportFormat::parse(&query.format) else {
        return bad_request_error("format must be csv|json|pdf");
    };

    let buoys = match state.buoy_store.list_buoys().await {
        Ok(buoys) => buoys,
        Err(err) => return storage_error(err),
    };
    let water_level_trends = match state.water_level_store.list_samples().await {
        Ok(samples) => samples,
        Err(err) => return storage_error(err),
    };
    let alerts = match state.alert_store.list_alerts().await {
        Ok(alerts) => alerts,
        Err(err) => return storage_error(err),
    };

    let dataset = ReportDataset {
        buoys,
        water_level_trends,
        alerts,
    };
    let options = ExportOptions::new(query.range.clone(), Utc::now());

    match buoysense_export::export_report(format, &dataset, &options) {
        Ok(artifact) => {
            buoysense_telemetry::record_export_generated();
            tracing::info!(filename = %artifact.filename, "report exported");
            artifact_response(artifact)
        }
        Err(err) => export_error(err),
    }
}

pub async fn buoy_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(path): Path<BuoyPath>,
) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ExportData) {
        return response;
    }

    let buoy = match state.buoy_store.find_buoy(&path.buoy_id).await {
        Ok(Some(buoy)) => buoy,
        Ok(None) => return not_found_error(),
        Err(err) => return storage_error(err),
    };
    let trend = match state.water_level_store.samples_for_buoy(&buoy.id).await {
        Ok(trend) => trend,
        Err(err) => return storage_error(err),
    };

    let options = ExportOptions::new(None, Utc::now());
    let artifact = export_buoy_report(&buoy, &trend, &options);
    buoysense_telemetry::record_export_generated();
    artifact_response(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{auth_headers, build_state};
    use http_body_util::BodyExt;

    fn query(format: &str) -> Query<ExportQuery> {
        Query(ExportQuery {
            format: format.to_string(),
            range: None,
        })
    }

    #[tokio::test]
    async fn unknown_format_is_rejected() {
        let state = build_state();
        let headers = auth_headers(&state, "operator@buoysense.com");
        let response = export_report(State(state), headers, query("xlsx")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn csv_download_carries_attachment_headers() {
        let state = build_state();
        // 操作员持有 exportData
        let headers = auth_headers(&state, "operator@buoysense.com");
        let response = export_report(State(state), headers, query("csv")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).expect("type"),
            "text/csv"
        );
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_DISPOSITION)
                .expect("disposition"),
            "attachment; filename=\"buoy-data.csv\""
        );

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let text = String::from_utf8(bytes.to_vec()).expect("utf8");
        assert!(text.starts_with("Buoy ID,Name,River,Status"));
        // 表头 + 六个 fixture 浮标
        assert_eq!(text.lines().count(), 7);
    }

    #[tokio::test]
    async fn pdf_filename_follows_report_pattern() {
        let state = build_state();
        let headers = auth_headers(&state, "operator@buoysense.com");
        let response = export_report(State(state), headers, query("pdf")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .expect("disposition")
            .to_str()
            .expect("str")
            .to_string();
        assert!(disposition.contains("buoysense-report-"));
        assert!(disposition.ends_with(".pdf\""));
    }

    #[tokio::test]
    async fn buoy_report_handles_unknown_buoy() {
        let state = build_state();
        let headers = auth_headers(&state, "operator@buoysense.com");
        let response = buoy_report(
            State(state),
            headers,
            Path(BuoyPath {
                buoy_id: "B999".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn buoy_report_downloads_pdf() {
        let state = build_state();
        let headers = auth_headers(&state, "admin@buoysense.com");
        let response = buoy_report(
            State(state),
            headers,
            Path(BuoyPath {
                buoy_id: "B005".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).expect("type"),
            "application/pdf"
        );
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }
}
