use super::{ActionOutcome, Dashboard};
use crate::confirm::ConfirmKind;
use crate::domain::{EntityId, ResourceKind};

pub struct ProjectController<'a> {
    dashboard: &'a Dashboard,
}

impl<'a> ProjectController<'a> {
    pub(super) fn new(dashboard: &'a Dashboard) -> Self {
        Self { dashboard }
    }

    /// Make `id` the active project. The server pauses the current tasks.
    pub async fn switch_active(&self, id: &EntityId) -> ActionOutcome {
        if !self.dashboard.confirm(ConfirmKind::SwitchProject).await {
            return ActionOutcome::Declined;
        }
        tracing::info!("switching to project {}", id);
        let outcome = ActionOutcome::from_result(self.dashboard.backend().switch_project(id).await);
        self.finish(outcome).await
    }

    pub async fn create(&self, name: &str) -> ActionOutcome {
        let name = name.trim();
        if name.is_empty() {
            return ActionOutcome::Skipped;
        }
        tracing::info!("creating project {:?}", name);
        let outcome = ActionOutcome::from_result(self.dashboard.backend().create_project(name).await);
        self.finish(outcome).await
    }

    pub async fn delete_all(&self) -> ActionOutcome {
        if !self.dashboard.confirm(ConfirmKind::DeleteAllProjects).await {
            return ActionOutcome::Declined;
        }
        tracing::warn!("deleting all projects");
        let outcome = ActionOutcome::from_result(
            self.dashboard
                .backend()
                .delete_all(ResourceKind::Project)
                .await,
        );
        self.finish(outcome).await
    }

    async fn finish(&self, outcome: ActionOutcome) -> ActionOutcome {
        if outcome.reached_server() {
            self.dashboard.refresh_all().await;
        }
        outcome
    }
}
