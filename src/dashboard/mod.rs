//! The dashboard core: selection, the three reconciled lists, chat, and the
//! controllers that mutate server state.
//!
//! All state sits behind one mutex that is never held across an `.await`,
//! so every synchronous step (apply a response, toggle a key, append a chat
//! line) runs as one uninterrupted unit. Suspension only happens at backend
//! calls and confirmation prompts.

mod batch;
mod chat;
mod memories;
mod projects;
mod tasks;


use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::{ApiError, Backend};
use crate::confirm::{ConfirmKind, ConfirmRequest, Confirmer};
use crate::domain::{EntityId, ResourceKind};
use crate::reconcile::{ApplyOutcome, Reconciler};
use crate::selection::SelectionStore;
use crate::session::SessionId;
use crate::view::{MemoryRows, ProjectRows, ResourceDescriptor, RowAction, RowEvent, TaskRows};

pub use batch::{BATCH_FAILURE_ALERT, BatchDeleteCoordinator, BatchOutcome};
pub use chat::{ChatSession, ChatState, SendOutcome};
pub use memories::MemoryController;
pub use projects::ProjectController;
pub use tasks::TaskLifecycleController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-facing alert, drained by whichever surface is showing the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of a single confirmed mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// User said no; nothing was sent
    Declined,
    /// Input was empty; nothing was sent
    Skipped,
    Failed(ApiError),
}

impl ActionOutcome {
    fn from_result(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => ActionOutcome::Completed,
            Err(e) => {
                tracing::warn!("write failed: {}", e);
                ActionOutcome::Failed(e)
            }
        }
    }

    /// Whether the server answered at all, so its lists may have moved.
    /// Transport failures skip the follow-up refresh; any HTTP status
    /// (including errors) still triggers it.
    pub fn reached_server(&self) -> bool {
        match self {
            ActionOutcome::Completed => true,
            ActionOutcome::Declined | ActionOutcome::Skipped => false,
            ActionOutcome::Failed(e) => !e.is_transport(),
        }
    }
}

/// Outcome of one full refresh, per kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub projects: ApplyOutcome,
    pub tasks: ApplyOutcome,
    pub memories: ApplyOutcome,
}

impl RefreshOutcome {
    pub fn failures(&self) -> impl Iterator<Item = (ResourceKind, &ApiError)> {
        [
            (ResourceKind::Project, &self.projects),
            (ResourceKind::Task, &self.tasks),
            (ResourceKind::Memory, &self.memories),
        ]
        .into_iter()
        .filter_map(|(kind, outcome)| match outcome {
            ApplyOutcome::Failed(e) => Some((kind, e)),
            _ => None,
        })
    }
}

/// Everything the dashboard holds locally
#[derive(Default)]
pub struct DashboardState {
    pub selection: SelectionStore,
    pub projects: Reconciler<ProjectRows>,
    pub tasks: Reconciler<TaskRows>,
    pub memories: Reconciler<MemoryRows>,
    pub chat: ChatState,
    notices: VecDeque<Notice>,
}

impl DashboardState {
    /// Flip a selection and re-derive every rendered checkbox
    pub fn toggle(&mut self, kind: ResourceKind, id: impl Into<EntityId>) -> bool {
        let selected = self.selection.toggle(kind, id);
        self.render_all();
        selected
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.render_all();
    }

    fn render_all(&mut self) {
        self.projects.render(&self.selection);
        self.tasks.render(&self.selection);
        self.memories.render(&self.selection);
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}

type Slot<D> = fn(&mut DashboardState) -> (&mut Reconciler<D>, &SelectionStore);

fn project_slot(state: &mut DashboardState) -> (&mut Reconciler<ProjectRows>, &SelectionStore) {
    (&mut state.projects, &state.selection)
}

fn task_slot(state: &mut DashboardState) -> (&mut Reconciler<TaskRows>, &SelectionStore) {
    (&mut state.tasks, &state.selection)
}

fn memory_slot(state: &mut DashboardState) -> (&mut Reconciler<MemoryRows>, &SelectionStore) {
    (&mut state.memories, &state.selection)
}

struct Inner {
    backend: Arc<dyn Backend>,
    confirmer: Arc<dyn Confirmer>,
    session: SessionId,
    state: Mutex<DashboardState>,
}

/// Cheap-to-clone handle onto one page-lifetime dashboard
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<Inner>,
}

impl Dashboard {
    pub fn new(
        backend: Arc<dyn Backend>,
        confirmer: Arc<dyn Confirmer>,
        session: SessionId,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                confirmer,
                session,
                state: Mutex::new(DashboardState::default()),
            }),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.inner.session
    }

    pub(crate) fn backend(&self) -> &dyn Backend {
        self.inner.backend.as_ref()
    }

    fn lock(&self) -> MutexGuard<'_, DashboardState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the current state
    pub fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.lock())
    }

    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn toggle(&self, kind: ResourceKind, id: impl Into<EntityId>) -> bool {
        self.update(|state| state.toggle(kind, id))
    }

    pub fn selection_size(&self) -> usize {
        self.read(|state| state.selection.size())
    }

    pub fn batch_label(&self) -> Option<String> {
        self.read(|state| state.selection.batch_label())
    }

    pub fn take_notices(&self) -> Vec<Notice> {
        self.update(DashboardState::take_notices)
    }

    pub(crate) async fn confirm(&self, kind: ConfirmKind) -> bool {
        let request = ConfirmRequest::new(kind);
        let approved = self.inner.confirmer.confirm(request.clone()).await;
        if !approved {
            tracing::debug!("declined: {}", request.message);
        }
        approved
    }

    async fn fetch<D: ResourceDescriptor>(&self, slot: Slot<D>) -> ApplyOutcome {
        let ticket = slot(&mut self.lock()).0.begin();
        let result = D::fetch(self.backend()).await;
        let mut state = self.lock();
        let (reconciler, selection) = slot(&mut state);
        reconciler.apply(ticket, result, selection)
    }

    pub async fn fetch_projects(&self) -> ApplyOutcome {
        self.fetch(project_slot).await
    }

    pub async fn fetch_tasks(&self) -> ApplyOutcome {
        self.fetch(task_slot).await
    }

    pub async fn fetch_memories(&self) -> ApplyOutcome {
        self.fetch(memory_slot).await
    }

    pub async fn fetch_kind(&self, kind: ResourceKind) -> ApplyOutcome {
        match kind {
            ResourceKind::Project => self.fetch_projects().await,
            ResourceKind::Task => self.fetch_tasks().await,
            ResourceKind::Memory => self.fetch_memories().await,
        }
    }

    /// Re-fetch and re-render all three lists concurrently
    pub async fn refresh_all(&self) -> RefreshOutcome {
        let (projects, tasks, memories) = tokio::join!(
            self.fetch_projects(),
            self.fetch_tasks(),
            self.fetch_memories()
        );
        RefreshOutcome {
            projects,
            tasks,
            memories,
        }
    }

    /// Route an event coming back from a rendered row
    pub async fn handle(&self, event: RowEvent) {
        match event {
            RowEvent::Toggle(key) => {
                self.toggle(key.kind, key.id);
            }
            RowEvent::Action { key, action } => {
                let outcome = match action {
                    RowAction::SwitchProject => self.projects().switch_active(&key.id).await,
                    RowAction::Control(control) => self.tasks().control(&key.id, control).await,
                    RowAction::ForgetMemory => self.memories().delete_one(&key.id).await,
                };
                tracing::debug!("{} on {}: {:?}", action.label(), key, outcome);
            }
        }
    }

    pub fn tasks(&self) -> TaskLifecycleController<'_> {
        TaskLifecycleController::new(self)
    }

    pub fn projects(&self) -> ProjectController<'_> {
        ProjectController::new(self)
    }

    pub fn memories(&self) -> MemoryController<'_> {
        MemoryController::new(self)
    }

    pub fn batch_delete(&self) -> BatchDeleteCoordinator<'_> {
        BatchDeleteCoordinator::new(self)
    }

    pub fn chat(&self) -> ChatSession<'_> {
        ChatSession::new(self)
    }
}
