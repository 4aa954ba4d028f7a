//! 会话能力：登录、当前用户、登出。
//!
//! 这是一个演示系统的模拟认证层：不校验口令、不签发 JWT。
//! 登录按邮箱推断角色并签发不透明 token，会话状态保存在注入的
//! SessionStore 里，带 TTL 过期。所有消费方通过显式的
//! load/save/clear 操作访问会话，"无会话"以 None 表达而非错误。

mod session;

use chrono::{Duration, Utc};
use domain::{Role, User};
use std::sync::Arc;

pub use session::{InMemorySessionStore, SessionRecord, SessionStore};

/// 认证相关错误。
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("internal error: {0}")]
    Internal(String),
}

/// 登录返回的会话信息。
pub struct SessionTokens {
    pub token: String,
    /// 过期时间（Unix 毫秒时间戳）。
    pub expires_at_ms: i64,
}

/// 会话服务实现（基于 SessionStore）。
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    ttl_seconds: u64,
}

impl SessionService {
    /// 创建会话服务实例。
    pub fn new(store: Arc<dyn SessionStore>, ttl_seconds: u64) -> Self {
        Self { store, ttl_seconds }
    }

    /// 登录：按邮箱推断角色并签发 token。
    ///
    /// 邮箱与口令均非空即视为有效凭据（模拟认证层的既定行为）；
    /// 邮箱包含 "admin" 得到管理员角色，否则为操作员。
    pub fn login(&self, email: &str, password: &str) -> Result<(User, SessionTokens), AuthError> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        let role = if email.contains("admin") {
            Role::Admin
        } else {
            Role::Operator
        };

        let token = format!("demo-token-{}", uuid::Uuid::new_v4());
        let issued_at_ms = Utc::now().timestamp_millis();
        let expires_at_ms = issued_at_ms + (self.ttl_seconds as i64).saturating_mul(1000);
        let record = SessionRecord {
            token: token.clone(),
            role_code: role.code().to_string(),
            issued_at_ms,
        };
        self.store.save(record);

        let user = User::from_role(token.clone(), role);
        Ok((
            user,
            SessionTokens {
                token,
                expires_at_ms,
            },
        ))
    }

    /// 读取当前用户。
    ///
    /// 无 token、未知 token 或已过期 → None（"无会话"哨兵），从不报错。
    /// 存储的角色缺失或无法识别时降级为操作员，而不是拒绝会话。
    pub fn current_user(&self, token: &str) -> Option<User> {
        let record = self.store.load(token)?;
        let age_ms = Utc::now().timestamp_millis() - record.issued_at_ms;
        if age_ms > Duration::seconds(self.ttl_seconds as i64).num_milliseconds() {
            self.store.clear(token);
            return None;
        }
        let role = Role::parse(&record.role_code).unwrap_or(Role::Operator);
        Some(User::from_role(record.token, role))
    }

    /// 登出：清除会话。幂等，无会话时是 no-op。
    pub fn logout(&self, token: &str) {
        self.store.clear(token);
    }
}
