//! 会话相关 handlers：登录、登出、当前用户
//!
//! ## 提供的端点
//!
//! ### 公开端点（无需会话）
//! - `GET /health` - 健康检查，返回 `{"ok": true}`
//! - `POST /login` - 登录：按邮箱推断角色，签发不透明 token
//!
//! ### 私有端点（需有效会话）
//! - `POST /logout` - 登出；幂等，无会话时也是 200
//! - `GET /me` - 当前用户记录
//!
//! ## 会话流程
//!
//! 1. 登录成功后 token 同时进入响应体与 authToken cookie
//!    （Path=/，Max-Age 与会话 TTL 一致），路由守卫两处都认。
//! 2. 登出清除服务端会话并下发过期 cookie。

use crate::AppState;
use crate::middleware::{require_user, session_token};
use crate::utils::response::{auth_error, internal_auth_error, user_to_dto};
use api_contract::{ApiResponse, LoginRequest, LoginResponse};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use buoysense_auth::AuthError;

/// 健康检查端点
///
/// 无需认证，返回简单的健康状态。可用于负载均衡器健康探针或服务监控。
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// 登录接口
///
/// 邮箱与口令非空即有效（模拟认证层）；包含 "admin" 的邮箱得到
/// 管理员角色。响应体携带 token 与过期时间，同时镜像到 cookie。
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    match state.sessions.login(&req.email, &req.password) {
        Ok((user, tokens)) => {
            buoysense_telemetry::record_login();
            let body = LoginResponse {
                token: tokens.token.clone(),
                role: user.role.code().to_string(),
                email: user.email,
                name: user.name,
                expires: tokens.expires_at_ms,
            };
            let mut response =
                (StatusCode::OK, Json(ApiResponse::success(body))).into_response();
            let cookie = format!(
                "authToken={}; Path=/; Max-Age={}",
                tokens.token, state.session_ttl_seconds
            );
            response.headers_mut().insert(
                header::SET_COOKIE,
                HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static("")),
            );
            response
        }
        Err(AuthError::InvalidCredentials) => auth_error(StatusCode::UNAUTHORIZED),
        Err(err) => internal_auth_error(err),
    }
}

/// 登出接口
///
/// 幂等：无 token、未知 token 都返回 200。
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        state.sessions.logout(token);
        buoysense_telemetry::record_session_revoked();
    }
    let mut response = (StatusCode::OK, Json(ApiResponse::success(()))).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_static("authToken=; Path=/; Max-Age=0"),
    );
    response
}

/// 当前用户接口
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = match require_user(&state, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    (StatusCode::OK, Json(ApiResponse::success(user_to_dto(user)))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_state;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn login_infers_role_from_email() {
        let state = build_state();
        let response = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "admin@buoysense.com".to_string(),
                password: "secret".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("cookie")
            .to_str()
            .expect("str")
            .to_string();
        assert!(cookie.starts_with("authToken=demo-token-"));
        let body = body_json(response).await;
        assert_eq!(body["data"]["role"], "admin");

        let response = login(
            State(state),
            Json(LoginRequest {
                email: "field-team@buoysense.com".to_string(),
                password: "secret".to_string(),
            }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["data"]["role"], "operator");
    }

    #[tokio::test]
    async fn login_rejects_empty_credentials() {
        let state = build_state();
        let response = login(
            State(state),
            Json(LoginRequest {
                email: "".to_string(),
                password: "secret".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn me_requires_session_and_logout_is_idempotent() {
        let state = build_state();
        let response = me(State(state.clone()), HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let headers = crate::test_support::auth_headers(&state, "operator@buoysense.com");
        let response = me(State(state.clone()), headers.clone()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = logout(State(state.clone()), headers.clone()).await;
        assert_eq!(response.status(), StatusCode::OK);
        // 登出后会话失效
        let response = me(State(state.clone()), headers.clone()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        // 重复登出仍是 200
        let response = logout(State(state), headers).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn session_token_falls_back_to_cookie() {
        let state = build_state();
        let (_, tokens) = state
            .sessions
            .login("operator@buoysense.com", "secret")
            .expect("login");
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; authToken={}", tokens.token))
                .expect("header"),
        );
        let response = me(State(state), headers).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
