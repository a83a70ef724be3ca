use crate::error::{DomainError, DomainResult};
use calendar_macros::entity_id;
use uuid::Uuid;

/// 事件标识：创建时生成，此后不可变
#[entity_id]
#[derive(Copy)]
pub struct EventId(Uuid);

/// 用户标识：事件的归属者
#[entity_id]
#[derive(Copy)]
pub struct UserId(Uuid);

impl EventId {
    /// 生成全局唯一的新标识
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// 解析规范 UUID 文本
    pub fn parse(value: &str) -> DomainResult<Self> {
        value
            .parse::<Self>()
            .map_err(|err| invalid_identifier("event id", value, err))
    }
}

impl UserId {
    /// 解析规范 UUID 文本
    pub fn parse(value: &str) -> DomainResult<Self> {
        value
            .parse::<Self>()
            .map_err(|err| invalid_identifier("user id", value, err))
    }
}

fn invalid_identifier(kind: &'static str, value: &str, err: uuid::Error) -> DomainError {
    DomainError::InvalidIdentifier {
        kind,
        reason: format!("{value:?}: {err}"),
    }
}
