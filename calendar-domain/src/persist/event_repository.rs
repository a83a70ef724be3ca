use crate::{
    error::DomainResult,
    event::Event,
    value_object::{EventId, UserId},
};
use async_trait::async_trait;
use std::sync::Arc;

/// 事件聚合仓储
///
/// 错误约定：
/// - 查找不到目标行时返回 `DomainError::NotFound`（`find_by_id`、`update`、`delete`）；
/// - 其余存储失败一律返回 `DomainError::Storage`，不做自动重试。
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// 以聚合当前字段插入一整行
    async fn create(&self, event: &Event) -> DomainResult<()>;

    /// 按标识整行替换（非局部补丁）：所有列都以 `event` 为准写回
    async fn update(&self, event: &Event) -> DomainResult<()>;

    async fn find_by_id(&self, id: &EventId) -> DomainResult<Event>;

    /// 返回归属于 `user_id` 的全部事件，按 `start_time`、`end_time`（再按 `id`）升序；
    /// 没有事件时返回空列表
    async fn list_by_user_id(&self, user_id: &UserId) -> DomainResult<Vec<Event>>;

    /// 删除整行；目标不存在时返回 `DomainError::NotFound`
    async fn delete(&self, id: &EventId) -> DomainResult<()>;
}

#[async_trait]
impl<T> EventRepository for Arc<T>
where
    T: EventRepository + ?Sized,
{
    async fn create(&self, event: &Event) -> DomainResult<()> {
        (**self).create(event).await
    }

    async fn update(&self, event: &Event) -> DomainResult<()> {
        (**self).update(event).await
    }

    async fn find_by_id(&self, id: &EventId) -> DomainResult<Event> {
        (**self).find_by_id(id).await
    }

    async fn list_by_user_id(&self, user_id: &UserId) -> DomainResult<Vec<Event>> {
        (**self).list_by_user_id(user_id).await
    }

    async fn delete(&self, id: &EventId) -> DomainResult<()> {
        (**self).delete(id).await
    }
}
