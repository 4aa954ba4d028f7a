//! 会话存储：token → 角色的键值保存。
//!
//! 接口只有显式的 load/save/clear 三操作；无会话以 None 表达。
//! 锁中毒按"无会话"处理，读不到即视为未登录。

use std::collections::HashMap;
use std::sync::RwLock;

/// 会话记录。email/name 不落存储，由角色推导。
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub token: String,
    pub role_code: String,
    /// 签发时间（Unix 毫秒时间戳），TTL 判定用。
    pub issued_at_ms: i64,
}

/// 会话存储接口。
pub trait SessionStore: Send + Sync {
    /// 保存会话（同 token 覆盖）。
    fn save(&self, record: SessionRecord);

    /// 读取会话；不存在返回 None。
    fn load(&self, token: &str) -> Option<SessionRecord>;

    /// 清除会话；幂等。
    fn clear(&self, token: &str);
}

/// 会话内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn save(&self, record: SessionRecord) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(record.token.clone(), record);
        }
    }

    fn load(&self, token: &str) -> Option<SessionRecord> {
        self.sessions
            .read()
            .ok()
            .and_then(|sessions| sessions.get(token).cloned())
    }

    fn clear(&self, token: &str) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.remove(token);
        }
    }
}
