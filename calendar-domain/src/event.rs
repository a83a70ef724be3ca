//! 日历事件聚合
//!
//! - `id` 与 `user_id` 构造后不可变；
//! - `created_at` 只写一次；
//! - `update` 是唯一的变更入口，每次调用都会刷新 `updated_at`，
//!   且保证 `updated_at` 单调不减、不早于 `created_at`；
//! - 不约束 `start_time` 与 `end_time` 的先后顺序。
//!
use crate::{
    aggregate::Aggregate,
    entity::Entity,
    value_object::{Color, Description, EventId, Title, UserId},
};
use bon::Builder;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// 日历事件聚合根
///
/// 通过 [`Event::create`] 新建；持久化适配器使用 [`Event::builder`] 按存储字段重建。
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Event {
    id: EventId,
    user_id: UserId,
    title: Title,
    description: Description,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    color: Color,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Event {
    /// 新建事件：生成新标识，`created_at == updated_at == now`
    pub fn create(
        user_id: UserId,
        title: Title,
        description: Description,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        color: Color,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: EventId::generate(),
            user_id,
            title,
            description,
            start_time,
            end_time,
            color,
            created_at: now,
            updated_at: now,
        }
    }

    /// 整体替换五个可变字段并刷新 `updated_at`。
    ///
    /// 入参均为已校验的值对象；可选字段的合并由调用方在此之前完成。
    pub fn update(
        &mut self,
        title: Title,
        description: Description,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        color: Color,
    ) {
        self.title = title;
        self.description = description;
        self.start_time = start_time;
        self.end_time = end_time;
        self.color = color;
        // 系统时钟可能回拨
        self.updated_at = Utc::now().max(self.updated_at).max(self.created_at);
    }

    /// 列表排序规则：`start_time` 升序，其次 `end_time`，最后按 `id` 保证结果确定
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        (self.start_time, self.end_time, self.id)
            .cmp(&(other.start_time, other.end_time, other.id))
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Event {
    type Id = EventId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Aggregate for Event {
    const TYPE: &'static str = "event";

    type Owner = UserId;

    fn owner(&self) -> &Self::Owner {
        &self.user_id
    }
}
