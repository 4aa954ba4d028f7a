//! 告警内存存储实现

use crate::error::StorageError;
use crate::events::{EventSender, StoreEvent};
use crate::fixtures;
use crate::traits::AlertStore;
use domain::Alert;
use std::sync::RwLock;
use tokio::sync::broadcast;

/// 告警内存存储
pub struct InMemoryAlertStore {
    alerts: RwLock<Vec<Alert>>,
    events: EventSender,
}

impl InMemoryAlertStore {
    pub fn new() -> Self {
        Self {
            alerts: RwLock::new(Vec::new()),
            events: EventSender::new(),
        }
    }

    /// 创建播种 fixture 的存储。
    pub fn with_fixtures() -> Self {
        Self {
            alerts: RwLock::new(fixtures::alerts()),
            events: EventSender::new(),
        }
    }
}

impl Default for InMemoryAlertStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AlertStore for InMemoryAlertStore {
    async fn list_alerts(&self) -> Result<Vec<Alert>, StorageError> {
        Ok(self
            .alerts
            .read()
            .map_err(|_| StorageError::new("lock failed"))?
            .clone())
    }

    async fn resolve_alert(&self, alert_id: &str) -> Result<Option<Alert>, StorageError> {
        let mut alerts = self
            .alerts
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let Some(alert) = alerts.iter_mut().find(|alert| alert.id == alert_id) else {
            return Ok(None);
        };
        alert.resolved = true;
        let resolved = alert.clone();
        drop(alerts);
        self.events
            .publish(StoreEvent::AlertResolved(resolved.id.clone()));
        Ok(Some(resolved))
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
