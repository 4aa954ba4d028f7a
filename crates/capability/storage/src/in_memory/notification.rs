//! 通知内存存储实现

use crate::error::StorageError;
use crate::events::{EventSender, StoreEvent};
use crate::fixtures;
use crate::traits::NotificationStore;
use domain::Notification;
use std::sync::RwLock;
use tokio::sync::broadcast;

/// 通知内存存储
pub struct InMemoryNotificationStore {
    notifications: RwLock<Vec<Notification>>,
    events: EventSender,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self {
            notifications: RwLock::new(Vec::new()),
            events: EventSender::new(),
        }
    }

    /// 创建播种 fixture 的存储。
    pub fn with_fixtures() -> Self {
        Self {
            notifications: RwLock::new(fixtures::notifications()),
            events: EventSender::new(),
        }
    }
}

impl Default for InMemoryNotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn list_notifications(&self) -> Result<Vec<Notification>, StorageError> {
        Ok(self
            .notifications
            .read()
            .map_err(|_| StorageError::new("lock failed"))?
            .clone())
    }

    async fn mark_read(
        &self,
        notification_id: &str,
    ) -> Result<Option<Notification>, StorageError> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let Some(notification) = notifications
            .iter_mut()
            .find(|notification| notification.id == notification_id)
        else {
            return Ok(None);
        };
        notification.read = true;
        let updated = notification.clone();
        drop(notifications);
        self.events
            .publish(StoreEvent::NotificationRead(updated.id.clone()));
        Ok(Some(updated))
    }

    async fn mark_all_read(&self) -> Result<usize, StorageError> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let mut changed = 0;
        for notification in notifications.iter_mut() {
            if !notification.read {
                notification.read = true;
                changed += 1;
            }
        }
        drop(notifications);
        if changed > 0 {
            self.events.publish(StoreEvent::NotificationsAllRead);
        }
        Ok(changed)
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
