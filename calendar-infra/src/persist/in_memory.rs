use async_trait::async_trait;
use calendar_domain::{
    Event,
    error::{DomainError, DomainResult},
    persist::EventRepository,
    value_object::{EventId, UserId},
};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// 进程内事件仓储，契约与 Postgres 实现一致（用于测试和本地运行）
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: DashMap<EventId, Event>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: &Event) -> DomainResult<()> {
        match self.events.entry(*event.id()) {
            Entry::Occupied(_) => Err(DomainError::storage(format!(
                "duplicate event id {}",
                event.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(event.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, event: &Event) -> DomainResult<()> {
        match self.events.get_mut(event.id()) {
            Some(mut stored) => {
                *stored = event.clone();
                Ok(())
            }
            None => Err(DomainError::not_found::<Event>(event.id())),
        }
    }

    async fn find_by_id(&self, id: &EventId) -> DomainResult<Event> {
        self.events
            .get(id)
            .map(|e| e.value().clone())
            .ok_or_else(|| DomainError::not_found::<Event>(id))
    }

    async fn list_by_user_id(&self, user_id: &UserId) -> DomainResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.user_id() == user_id)
            .map(|e| e.value().clone())
            .collect();
        events.sort_by(Event::chronological_cmp);
        Ok(events)
    }

    async fn delete(&self, id: &EventId) -> DomainResult<()> {
        self.events
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found::<Event>(id))
    }
}
