//! 日历基础设施层（calendar-infra）
//!
//! 为领域/应用层的端口提供具体实现：
//! - `persist`：`EventRepository` 的 Postgres（sqlx）与进程内（DashMap）实现；
//! - `gateway`：基于 HTTP 的 `UserGateway`；
//! - `config`、`db`、`telemetry`：环境变量配置、连接池/迁移与日志初始化。
//!
pub mod config;
pub mod db;
pub mod gateway;
pub mod persist;
pub mod telemetry;

pub use config::Config;
pub use db::Database;
pub use gateway::HttpUserGateway;
pub use persist::{InMemoryEventRepository, PgEventRepository};
