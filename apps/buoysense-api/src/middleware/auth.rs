//! 认证和授权中间件
//!
//! 提供以下中间件和辅助函数：
//! - request_context：请求上下文中间件，注入 request_id/trace_id
//! - session_token：从 Authorization 头或 authToken cookie 提取 token
//! - require_user：路由守卫，无有效会话即 401（登录页重定向的服务端等价）
//! - require_permission：按角色能力表校验，未持有即 403
//!
//! 守卫流程：
//! 1. request_context：在所有请求前注入追踪 ID
//! 2. session_token：提取会话 token（Bearer 优先，cookie 兜底）
//! 3. require_user：查会话存储，合成当前用户
//! 4. require_permission：fail-closed 权限判定

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};
use buoysense_telemetry::new_request_ids;
use domain::{Permission, User};
use tracing::{Instrument, info_span};

use crate::AppState;
use crate::utils::response::{auth_error, forbidden_error};

/// 请求上下文中间件：注入 request_id/trace_id
pub async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response: axum::response::Response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}

/// 从请求头中提取会话 token：Bearer 优先，authToken cookie 兜底。
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(header_value) = headers.get(header::AUTHORIZATION) {
        if let Some(token) = header_value
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
        {
            return Some(token);
        }
    }
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix("authToken="))
}

/// 验证会话并合成当前用户。
pub fn require_user(state: &AppState, headers: &HeaderMap) -> Result<User, Response> {
    let token = match session_token(headers) {
        Some(token) => token,
        None => return Err(auth_error(axum::http::StatusCode::UNAUTHORIZED)),
    };
    match state.sessions.current_user(token) {
        Some(user) => Ok(user),
        None => Err(auth_error(axum::http::StatusCode::UNAUTHORIZED)),
    }
}

/// 校验用户角色是否持有指定能力。
pub fn require_permission(user: &User, permission: Permission) -> Result<(), Response> {
    if user.role.allows(permission) {
        Ok(())
    } else {
        Err(forbidden_error())
    }
}
