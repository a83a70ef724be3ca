//! 日历领域层（calendar-domain）
//!
//! 以 DDD 为中心描述“日历事件”这一聚合：
//! - 值对象（`value_object`）：标题、描述、颜色与标识，构造即校验；
//! - 实体与聚合（`entity`、`aggregate`）：标识与归属的通用抽象；
//! - 事件聚合（`event`）：唯一的变更入口与时间戳生命周期；
//! - 仓储（`persist`）：聚合的持久化契约，由基础设施层提供具体实现。
//!
//! 本 crate 不依赖任何存储或传输实现，仅在启用 `infra-sqlx` 特性时
//! 提供 `sqlx::Error` 到 `DomainError` 的转换。
//!
pub mod aggregate;
pub mod entity;
pub mod error;
pub mod event;
pub mod persist;
pub mod value_object;

pub use event::Event;
