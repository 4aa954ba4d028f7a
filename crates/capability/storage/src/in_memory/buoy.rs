//! 浮标内存存储实现

use crate::error::StorageError;
use crate::events::{EventSender, StoreEvent};
use crate::fixtures;
use crate::traits::BuoyStore;
use domain::Buoy;
use std::sync::RwLock;
use tokio::sync::broadcast;

/// 浮标内存存储
///
/// 使用 RwLock + Vec 提供线程安全的内存存储，保持播种顺序。
pub struct InMemoryBuoyStore {
    buoys: RwLock<Vec<Buoy>>,
    events: EventSender,
}

impl InMemoryBuoyStore {
    /// 创建空存储。
    pub fn new() -> Self {
        Self {
            buoys: RwLock::new(Vec::new()),
            events: EventSender::new(),
        }
    }

    /// 创建播种 fixture 的存储。
    pub fn with_fixtures() -> Self {
        Self {
            buoys: RwLock::new(fixtures::buoys()),
            events: EventSender::new(),
        }
    }
}

impl Default for InMemoryBuoyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BuoyStore for InMemoryBuoyStore {
    async fn list_buoys(&self) -> Result<Vec<Buoy>, StorageError> {
        Ok(self
            .buoys
            .read()
            .map_err(|_| StorageError::new("lock failed"))?
            .clone())
    }

    async fn find_buoy(&self, buoy_id: &str) -> Result<Option<Buoy>, StorageError> {
        Ok(self
            .buoys
            .read()
            .map_err(|_| StorageError::new("lock failed"))?
            .iter()
            .find(|buoy| buoy.id == buoy_id)
            .cloned())
    }

    async fn add_buoy(&self, buoy: Buoy) -> Result<Buoy, StorageError> {
        let mut buoys = self
            .buoys
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if buoys.iter().any(|existing| existing.id == buoy.id) {
            return Err(StorageError::new(format!("duplicate buoy id: {}", buoy.id)));
        }
        buoys.push(buoy.clone());
        drop(buoys);
        self.events.publish(StoreEvent::BuoyAdded(buoy.id.clone()));
        Ok(buoy)
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
