//! 持久化（persist）
//!
//! 定义事件聚合的仓储契约（`EventRepository`）。
//!
//! 该模块只关注协议，具体存储后端（如 Postgres、内存）由基础设施层实现并注入。
//! 每个写操作（create/update/delete）都必须在单行事务中完成；
//! 不提供乐观并发令牌，同一聚合的并发更新以“最后写入者”为准。
//!
mod event_repository;

pub use event_repository::EventRepository;
