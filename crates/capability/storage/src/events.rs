//! 存储变更事件广播。
//!
//! 集合是单实例共享的，变更经 broadcast 通道通知所有订阅方，
//! 不同消费方不会各持一份互相看不到修改的副本。

use tokio::sync::broadcast;

/// 存储变更事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    BuoyAdded(String),
    AlertResolved(String),
    NotificationRead(String),
    NotificationsAllRead,
}

/// 事件广播端。订阅者掉队时旧事件被覆盖（lagged），不阻塞写入方。
#[derive(Debug)]
pub struct EventSender {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventSender {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(32);
        Self { sender }
    }

    /// 订阅后续变更。
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// 发布事件；没有订阅者时静默丢弃。
    pub fn publish(&self, event: StoreEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for EventSender {
    fn default() -> Self {
        Self::new()
    }
}
