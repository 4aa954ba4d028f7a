//! Handlers 模块

pub mod alerts;
pub mod auth;
pub mod buoys;
pub mod export;
pub mod map;
pub mod notifications;
pub mod stats;
pub mod water_levels;
pub mod weather;

pub use alerts::*;
pub use auth::*;
pub use buoys::*;
pub use export::*;
pub use map::*;
pub use notifications::*;
pub use stats::*;
pub use water_levels::*;
pub use weather::*;
