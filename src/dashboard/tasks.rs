use super::{ActionOutcome, Dashboard};
use crate::confirm::ConfirmKind;
use crate::domain::{EntityId, ResourceKind, TaskAction};

/// Pause, resume and delete tasks
pub struct TaskLifecycleController<'a> {
    dashboard: &'a Dashboard,
}

impl<'a> TaskLifecycleController<'a> {
    pub(super) fn new(dashboard: &'a Dashboard) -> Self {
        Self { dashboard }
    }

    /// Pause or resume, then re-fetch the task list only
    pub async fn control(&self, id: &EntityId, action: TaskAction) -> ActionOutcome {
        tracing::info!("{} task {}", action, id);
        let outcome =
            ActionOutcome::from_result(self.dashboard.backend().control_task(id, action).await);
        if outcome.reached_server() {
            self.dashboard.fetch_tasks().await;
        }
        outcome
    }

    /// Delete a single task through the batch route, then refresh everything
    pub async fn delete_one(&self, id: &EntityId) -> ActionOutcome {
        if !self.dashboard.confirm(ConfirmKind::DeleteTask).await {
            return ActionOutcome::Declined;
        }
        let ids = [id.clone()];
        let outcome = ActionOutcome::from_result(
            self.dashboard
                .backend()
                .batch_delete(ResourceKind::Task, &ids)
                .await,
        );
        if outcome.reached_server() {
            self.dashboard.refresh_all().await;
        }
        outcome
    }

    pub async fn delete_all(&self) -> ActionOutcome {
        if !self.dashboard.confirm(ConfirmKind::DeleteAllTasks).await {
            return ActionOutcome::Declined;
        }
        tracing::info!("deleting all tasks");
        let outcome = ActionOutcome::from_result(
            self.dashboard.backend().delete_all(ResourceKind::Task).await,
        );
        if outcome.reached_server() {
            self.dashboard.refresh_all().await;
        }
        outcome
    }
}
