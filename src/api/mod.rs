//! Client side of the assistant backend contract.
//!
//! [`Backend`] is the seam every controller talks through; [`HttpBackend`]
//! is the real transport. Tests substitute scripted implementations.

mod error;
mod http;


use async_trait::async_trait;

use crate::domain::{
    ChatReply, ChatRequest, EntityId, Memory, Project, ResourceKind, Task, TaskAction,
};

pub use error::ApiError;
pub use http::HttpBackend;

/// Operations consumed from the backend HTTP API
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/projects`
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

    /// `GET /api/tasks`
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// `GET /api/memories`
    async fn list_memories(&self) -> Result<Vec<Memory>, ApiError>;

    /// `POST /api/{collection}/batch-delete` with `{ids}`
    async fn batch_delete(&self, kind: ResourceKind, ids: &[EntityId]) -> Result<(), ApiError>;

    /// `DELETE /api/{collection}`
    async fn delete_all(&self, kind: ResourceKind) -> Result<(), ApiError>;

    /// `POST /api/projects?name=...`
    async fn create_project(&self, name: &str) -> Result<(), ApiError>;

    /// `POST /api/projects/{id}/switch`
    async fn switch_project(&self, id: &EntityId) -> Result<(), ApiError>;

    /// `POST /api/tasks/{id}/control?action=...`
    async fn control_task(&self, id: &EntityId, action: TaskAction) -> Result<(), ApiError>;

    /// `DELETE /api/memories/{id}`
    async fn delete_memory(&self, id: &EntityId) -> Result<(), ApiError>;

    /// `POST /api/chat`
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;
}
