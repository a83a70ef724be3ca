use crate::dto::Dto;
use calendar_domain::Event;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 对外序列化的事件视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub color: String,
}

impl Dto for EventDto {}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().to_string(),
            title: event.title().to_string(),
            description: event.description().to_string(),
            start_time: event.start_time(),
            end_time: event.end_time(),
            color: event.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventListDto {
    pub events: Vec<EventDto>,
}

impl Dto for EventListDto {}

impl FromIterator<EventDto> for EventListDto {
    fn from_iter<I: IntoIterator<Item = EventDto>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendar_domain::value_object::{Color, Description, EventId, Title, UserId};
    use chrono::TimeZone;

    #[test]
    fn serializes_with_camel_case_fields() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        let event = Event::builder()
            .id(EventId::parse("fe8c2263-bbac-4bb9-a41d-b04f5afc4425").unwrap())
            .user_id(UserId::parse("6d322c66-bf4d-427a-970c-874f3745f653").unwrap())
            .title(Title::new("title").unwrap())
            .description(Description::new("description").unwrap())
            .start_time(start)
            .end_time(end)
            .color(Color::new("#FF0000").unwrap())
            .created_at(start)
            .updated_at(start)
            .build();

        let json = serde_json::to_value(EventDto::from(&event)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "fe8c2263-bbac-4bb9-a41d-b04f5afc4425",
                "title": "title",
                "description": "description",
                "startTime": "2024-03-01T09:00:00Z",
                "endTime": "2024-03-01T10:30:00Z",
                "color": "#FF0000",
            })
        );
    }
}
