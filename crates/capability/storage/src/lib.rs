//! # 数据集注册表
//!
//! 本模块提供系统唯一的数据来源：内存中的 fixture 集合，
//! 在进程启动时播种，生命周期内共享。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：定义所有集合存储的异步 Trait 接口
//! 2. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 3. **变更通知层** (`events.rs`)：存储变更的广播事件
//! 4. **数据播种层** (`fixtures.rs`)：fixture 集合的构造
//! 5. **实现层** (`in_memory/`)：RwLock 集合的内存实现
//!
//! ## 核心约束
//!
//! - **单实例共享**：每个集合只存在一个存储实例，经 `Arc<dyn …>` 注入
//!   所有消费方；变更（新增浮标、告警处置、通知已读）对全部消费方可见。
//! - **变更广播**：每个存储暴露 `subscribe()`，消费方经 broadcast 通道
//!   观察 `StoreEvent`。
//! - **无持久化**：所有变更只在进程生命周期内有效，重启回到 fixture 状态。
//! - **趋势完整性**：每个水位趋势采样对 fixture 中出现的每个浮标 ID 都有
//!   取值（无稀疏行），报表与图表消费方依赖此不变式。
//! - **弱引用**：告警/通知以字符串 ID 引用浮标，不做级联校验或删除。

pub mod error;
pub mod events;
pub mod fixtures;
pub mod in_memory;
pub mod traits;

pub use error::*;
pub use events::*;
pub use traits::*;

pub use in_memory::{
    InMemoryAlertStore, InMemoryBuoyStore, InMemoryNotificationStore, InMemoryWaterLevelStore,
};
