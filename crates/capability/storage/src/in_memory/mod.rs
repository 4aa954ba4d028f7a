//! 内存存储实现模块
//!
//! 包含以下实现：
//! - BuoyStore: InMemoryBuoyStore
//! - AlertStore: InMemoryAlertStore
//! - NotificationStore: InMemoryNotificationStore
//! - WaterLevelStore: InMemoryWaterLevelStore

pub mod alert;
pub mod buoy;
pub mod notification;
pub mod water_level;

pub use alert::*;
pub use buoy::*;
pub use notification::*;
pub use water_level::*;
