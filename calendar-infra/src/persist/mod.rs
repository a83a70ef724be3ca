//! `EventRepository` 的两种实现：Postgres 与进程内
//!
mod event_row;
mod in_memory;
mod pg_event_repository;

pub use event_row::EventRow;
pub use in_memory::InMemoryEventRepository;
pub use pg_event_repository::PgEventRepository;
