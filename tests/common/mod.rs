//! Shared test utilities: a scripted, recording backend and fixtures

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use echodeck::api::{ApiError, Backend};
use echodeck::confirm::{ConfirmRequest, Confirmer};
use echodeck::dashboard::Dashboard;
use echodeck::domain::{
    ChatReply, ChatRequest, EntityId, Memory, Project, ProjectStatus, ResourceKind, Task,
    TaskAction, TaskStatus,
};
use echodeck::session::SessionId;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListProjects,
    ListTasks,
    ListMemories,
    BatchDelete(ResourceKind, Vec<String>),
    DeleteAll(ResourceKind),
    CreateProject(String),
    SwitchProject(String),
    Control(String, TaskAction),
    DeleteMemory(String),
    Chat(String),
}

impl Call {
    pub fn is_list(&self) -> bool {
        matches!(self, Call::ListProjects | Call::ListTasks | Call::ListMemories)
    }
}

/// Backend whose responses are set by the test and whose calls are recorded
pub struct FakeBackend {
    projects: Mutex<Result<Vec<Project>, ApiError>>,
    tasks: Mutex<Result<Vec<Task>, ApiError>>,
    memories: Mutex<Result<Vec<Memory>, ApiError>>,
    chat: Mutex<Result<ChatReply, ApiError>>,
    /// Writes answer with this error when set
    write_error: Mutex<Option<ApiError>>,
    /// Batch deletes of these kinds fail with a 500
    failing_batches: Mutex<HashSet<ResourceKind>>,
    /// Chat replies wait for a permit when gated
    chat_gate: Option<Semaphore>,
    calls: Mutex<Vec<Call>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            projects: Mutex::new(Ok(Vec::new())),
            tasks: Mutex::new(Ok(Vec::new())),
            memories: Mutex::new(Ok(Vec::new())),
            chat: Mutex::new(Ok(ChatReply {
                response: "ok".to_string(),
                session_id: None,
            })),
            write_error: Mutex::new(None),
            failing_batches: Mutex::new(HashSet::new()),
            chat_gate: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chat calls block until [`FakeBackend::release_chat`]
    pub fn gated() -> Self {
        Self {
            chat_gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn release_chat(&self) {
        if let Some(gate) = &self.chat_gate {
            gate.add_permits(1);
        }
    }

    pub fn set_projects(&self, result: Result<Vec<Project>, ApiError>) {
        *self.projects.lock().unwrap() = result;
    }

    pub fn set_tasks(&self, result: Result<Vec<Task>, ApiError>) {
        *self.tasks.lock().unwrap() = result;
    }

    pub fn set_memories(&self, result: Result<Vec<Memory>, ApiError>) {
        *self.memories.lock().unwrap() = result;
    }

    pub fn set_chat(&self, result: Result<ChatReply, ApiError>) {
        *self.chat.lock().unwrap() = result;
    }

    pub fn fail_writes(&self, error: ApiError) {
        *self.write_error.lock().unwrap() = Some(error);
    }

    pub fn fail_batch(&self, kind: ResourceKind) {
        self.failing_batches.lock().unwrap().insert(kind);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded calls that are not list fetches
    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|c| !c.is_list()).collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self) -> Result<(), ApiError> {
        match self.write_error.lock().unwrap().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn ids(ids: &[EntityId]) -> Vec<String> {
    ids.iter().map(|id| id.as_str().to_string()).collect()
}

#[async_trait]
impl Backend for FakeBackend {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.record(Call::ListProjects);
        self.projects.lock().unwrap().clone()
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.record(Call::ListTasks);
        self.tasks.lock().unwrap().clone()
    }

    async fn list_memories(&self) -> Result<Vec<Memory>, ApiError> {
        self.record(Call::ListMemories);
        self.memories.lock().unwrap().clone()
    }

    async fn batch_delete(&self, kind: ResourceKind, batch: &[EntityId]) -> Result<(), ApiError> {
        self.record(Call::BatchDelete(kind, ids(batch)));
        if self.failing_batches.lock().unwrap().contains(&kind) {
            return Err(ApiError::from_status(500, r#"{"detail":"boom"}"#));
        }
        self.write_result()
    }

    async fn delete_all(&self, kind: ResourceKind) -> Result<(), ApiError> {
        self.record(Call::DeleteAll(kind));
        self.write_result()
    }

    async fn create_project(&self, name: &str) -> Result<(), ApiError> {
        self.record(Call::CreateProject(name.to_string()));
        self.write_result()
    }

    async fn switch_project(&self, id: &EntityId) -> Result<(), ApiError> {
        self.record(Call::SwitchProject(id.to_string()));
        self.write_result()
    }

    async fn control_task(&self, id: &EntityId, action: TaskAction) -> Result<(), ApiError> {
        self.record(Call::Control(id.to_string(), action));
        self.write_result()
    }

    async fn delete_memory(&self, id: &EntityId) -> Result<(), ApiError> {
        self.record(Call::DeleteMemory(id.to_string()));
        self.write_result()
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.record(Call::Chat(request.message.clone()));
        if let Some(gate) = &self.chat_gate {
            gate.acquire()
                .await
                .expect("chat gate closed")
                .forget();
        }
        self.chat.lock().unwrap().clone()
    }
}

/// Answers with a fixed decision and remembers every question
pub struct RecordingConfirmer {
    answer: bool,
    asked: Mutex<Vec<ConfirmRequest>>,
}

impl RecordingConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }
}

#[async_trait]
impl Confirmer for RecordingConfirmer {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        self.asked.lock().unwrap().push(request);
        self.answer
    }
}

pub struct Harness {
    pub backend: Arc<FakeBackend>,
    pub confirmer: Arc<RecordingConfirmer>,
    pub dashboard: Dashboard,
}

pub fn harness(backend: FakeBackend, approve: bool) -> Harness {
    let backend = Arc::new(backend);
    let confirmer = Arc::new(RecordingConfirmer::new(approve));
    let dashboard = Dashboard::new(backend.clone(), confirmer.clone(), SessionId::generate());
    Harness {
        backend,
        confirmer,
        dashboard,
    }
}

pub fn project(id: &str, name: &str, active: bool) -> Project {
    Project {
        id: EntityId::new(id),
        name: name.to_string(),
        status: if active {
            ProjectStatus::Active
        } else {
            ProjectStatus::Inactive("inactive".to_string())
        },
    }
}

pub fn task(id: &str, intent: &str, status: &str) -> Task {
    Task {
        id: EntityId::new(id),
        intent: intent.to_string(),
        status: TaskStatus::from(status.to_string()),
    }
}

pub fn memory(id: &str, title: &str) -> Memory {
    Memory {
        id: EntityId::new(id),
        title: Some(title.to_string()),
        content: format!("{title} content"),
        kind: "fact".to_string(),
        tags: Vec::new(),
    }
}

pub fn transport_error() -> ApiError {
    ApiError::Transport("Connection refused".to_string())
}
