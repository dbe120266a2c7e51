//! Core domain types for Echo Deck

mod chat;
mod kind;
mod memory;
mod project;
mod task;

pub use chat::{ChatLine, ChatReply, ChatRequest, ChatRole};
pub use kind::{EntityId, ResourceKind};
pub use memory::{DEFAULT_MEMORY_TYPE, Memory};
pub use project::{Project, ProjectStatus};
pub use task::{Task, TaskAction, TaskStatus};
