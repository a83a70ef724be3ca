use calendar_domain::{
    Event,
    error::DomainError,
    value_object::{Color, Description, EventId, Title, UserId},
};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// `events` 表的一行
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().into_inner(),
            user_id: event.user_id().into_inner(),
            title: event.title().to_string(),
            description: event.description().to_string(),
            start_time: event.start_time(),
            end_time: event.end_time(),
            color: event.color().to_string(),
            created_at: event.created_at(),
            updated_at: event.updated_at(),
        }
    }
}

/// 存储中的文本同样经过值对象校验；不合法的行视为存储损坏
impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let corrupt =
            |err: DomainError| DomainError::storage(format!("corrupt event row {}: {err}", row.id));

        Ok(Event::builder()
            .id(EventId::new(row.id))
            .user_id(UserId::new(row.user_id))
            .title(Title::new(&row.title).map_err(corrupt)?)
            .description(Description::new(&row.description).map_err(corrupt)?)
            .start_time(row.start_time)
            .end_time(row.end_time)
            .color(Color::new(&row.color).map_err(corrupt)?)
            .created_at(row.created_at)
            .updated_at(row.updated_at)
            .build())
    }
}
