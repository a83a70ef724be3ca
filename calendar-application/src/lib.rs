//! 日历应用层（calendar-application）
//!
//! 负责“谁在调用”与“能否调用”的编排：经由 [`gateway::UserGateway`] 解析调用者身份，
//! 构造并校验值对象，再通过仓储加载/变更聚合。
//!
//! 对外暴露的入站接口是一组命令与查询（见 [`event`]），由 [`event::EventUsecase`]
//! 实现 [`command_handler::CommandHandler`] / [`query_handler::QueryHandler`]，
//! 供外部的传输转换层（gRPC/HTTP）直接调用。
//!
pub mod command;
pub mod command_handler;
pub mod context;
pub mod dto;
pub mod error;
pub mod event;
pub mod gateway;
pub mod query;
pub mod query_handler;

pub use context::{AppContext, Credentials};
pub use error::{AppError, ErrorKind};
pub use event::EventUsecase;
