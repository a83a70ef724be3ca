//! 日历事件的入站接口与编排
//!
mod commands;
mod dto;
mod queries;
mod usecase;

pub use commands::{CreateEvent, DeleteEvent, UpdateEvent};
pub use dto::{EventDto, EventListDto};
pub use queries::{GetEvent, ListEvents};
pub use usecase::EventUsecase;
