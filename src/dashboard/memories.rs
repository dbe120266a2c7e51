use super::{ActionOutcome, Dashboard};
use crate::confirm::ConfirmKind;
use crate::domain::{EntityId, ResourceKind};

pub struct MemoryController<'a> {
    dashboard: &'a Dashboard,
}

impl<'a> MemoryController<'a> {
    pub(super) fn new(dashboard: &'a Dashboard) -> Self {
        Self { dashboard }
    }

    /// Forget one memory; only the memory list is re-fetched
    pub async fn delete_one(&self, id: &EntityId) -> ActionOutcome {
        if !self.dashboard.confirm(ConfirmKind::ForgetMemory).await {
            return ActionOutcome::Declined;
        }
        let outcome = ActionOutcome::from_result(self.dashboard.backend().delete_memory(id).await);
        if outcome.reached_server() {
            self.dashboard.fetch_memories().await;
        }
        outcome
    }

    pub async fn delete_all(&self) -> ActionOutcome {
        if !self.dashboard.confirm(ConfirmKind::DeleteAllMemories).await {
            return ActionOutcome::Declined;
        }
        tracing::warn!("deleting all memories");
        let outcome = ActionOutcome::from_result(
            self.dashboard
                .backend()
                .delete_all(ResourceKind::Memory)
                .await,
        );
        if outcome.reached_server() {
            self.dashboard.refresh_all().await;
        }
        outcome
    }
}
