use crate::command::Command;
use crate::event::dto::EventDto;
use chrono::{DateTime, Utc};

/// 新建事件。`start_time` 与 `end_time` 必填，`color` 缺省为默认色。
#[derive(Debug, Clone, Default)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub color: Option<String>,
}

impl Command for CreateEvent {
    const NAME: &'static str = "CreateEvent";
    type Output = EventDto;
}

/// 更新事件。
///
/// 标题、描述、颜色整体替换（颜色缺省即重置为默认色）；
/// `start_time`/`end_time` 缺省时沿用事件当前值。
#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub color: Option<String>,
}

impl Command for UpdateEvent {
    const NAME: &'static str = "UpdateEvent";
    type Output = EventDto;
}

#[derive(Debug, Clone, Default)]
pub struct DeleteEvent {
    pub event_id: String,
}

impl Command for DeleteEvent {
    const NAME: &'static str = "DeleteEvent";
    type Output = ();
}
