//! 存储接口 Trait 定义
//!
//! 定义所有集合存储的异步接口：
//! - BuoyStore：浮标存储
//! - AlertStore：告警存储
//! - NotificationStore：通知存储
//! - WaterLevelStore：水位趋势存储
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发
//! - 变更操作经 subscribe() 广播 StoreEvent

use crate::error::StorageError;
use crate::events::StoreEvent;
use async_trait::async_trait;
use domain::{Alert, Buoy, Notification, WaterLevelSample};
use tokio::sync::broadcast;

/// 浮标存储接口
#[async_trait]
pub trait BuoyStore: Send + Sync {
    /// 列出全部浮标（播种顺序）。
    async fn list_buoys(&self) -> Result<Vec<Buoy>, StorageError>;

    /// 按 ID 查找浮标。
    async fn find_buoy(&self, buoy_id: &str) -> Result<Option<Buoy>, StorageError>;

    /// 追加新浮标；重复 ID 报错。仅进程生命周期内有效。
    async fn add_buoy(&self, buoy: Buoy) -> Result<Buoy, StorageError>;

    /// 订阅浮标集合变更。
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}

/// 告警存储接口
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// 列出全部告警（播种顺序）。
    async fn list_alerts(&self) -> Result<Vec<Alert>, StorageError>;

    /// 处置告警：置位 resolved。未知 ID 返回 None。
    async fn resolve_alert(&self, alert_id: &str) -> Result<Option<Alert>, StorageError>;

    /// 订阅告警集合变更。
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}

/// 通知存储接口
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// 列出全部通知（播种顺序）。
    async fn list_notifications(&self) -> Result<Vec<Notification>, StorageError>;

    /// 标记单条通知已读。未知 ID 返回 None。
    async fn mark_read(&self, notification_id: &str)
    -> Result<Option<Notification>, StorageError>;

    /// 标记全部通知已读，返回改动条数。
    async fn mark_all_read(&self) -> Result<usize, StorageError>;

    /// 订阅通知集合变更。
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}

/// 水位趋势存储接口
#[async_trait]
pub trait WaterLevelStore: Send + Sync {
    /// 全部趋势采样（时间桶升序）。
    async fn list_samples(&self) -> Result<Vec<WaterLevelSample>, StorageError>;

    /// 某个浮标的趋势序列：(时间桶, 水位)。
    async fn samples_for_buoy(&self, buoy_id: &str)
    -> Result<Vec<(String, f64)>, StorageError>;
}
