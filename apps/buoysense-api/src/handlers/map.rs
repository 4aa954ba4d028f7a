//! 地图配置 handlers
//!
//! - GET /map/config（viewDashboard）
//!
//! 未配置瓦片凭据时返回 enabled=false 与提示文案（前端渲染占位面板），
//! 不报错、不中断。

use crate::AppState;
use crate::middleware::{require_permission, require_user};
use api_contract::{ApiResponse, MapConfigDto};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use domain::Permission;

pub async fn map_config(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = require_permission(&user, Permission::ViewDashboard) {
        return response;
    }

    let body = match &state.map_tile_token {
        Some(token) => MapConfigDto {
            enabled: true,
            tile_token: Some(token.clone()),
            message: None,
        },
        None => MapConfigDto {
            enabled: false,
            tile_token: None,
            message: Some(
                "Map tiles are disabled. Set BUOYSENSE_MAPBOX_TOKEN to enable the live map."
                    .to_string(),
            ),
        },
    };
    (StatusCode::OK, Json(ApiResponse::success(body))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{auth_headers, build_state};
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn missing_tile_token_degrades_to_placeholder() {
        let state = build_state();
        let headers = auth_headers(&state, "operator@buoysense.com");
        let response = map_config(State(state), headers).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body["data"]["enabled"], false);
        assert!(body["data"]["message"].as_str().expect("message").contains("BUOYSENSE_MAPBOX_TOKEN"));
    }

    #[tokio::test]
    async fn configured_token_is_returned() {
        let mut state = build_state();
        state.map_tile_token = Some("pk.demo".to_string());
        let headers = auth_headers(&state, "operator@buoysense.com");
        let response = map_config(State(state), headers).await;
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body["data"]["enabled"], true);
        assert_eq!(body["data"]["tileToken"], "pk.demo");
    }
}
