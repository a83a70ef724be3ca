use crate::event::dto::{EventDto, EventListDto};
use crate::query::Query;

#[derive(Debug, Clone, Default)]
pub struct GetEvent {
    pub event_id: String,
}

impl Query for GetEvent {
    const NAME: &'static str = "GetEvent";
    type Dto = EventDto;
}

/// 列出调用者名下的全部事件
#[derive(Debug, Clone, Default)]
pub struct ListEvents;

impl Query for ListEvents {
    const NAME: &'static str = "ListEvents";
    type Dto = EventListDto;
}
