use futures::future::join_all;

use super::{Dashboard, Notice};
use crate::api::ApiError;
use crate::confirm::ConfirmKind;
use crate::domain::ResourceKind;

/// Shown once per batch, however many kinds failed
pub const BATCH_FAILURE_ALERT: &str = "Failed to delete some items.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Selection was empty; no prompt, no calls
    NothingSelected,
    Declined,
    Finished {
        /// One per non-empty kind
        calls: usize,
        failed: Vec<(ResourceKind, ApiError)>,
    },
}

/// Deletes everything currently selected, one call per kind
pub struct BatchDeleteCoordinator<'a> {
    dashboard: &'a Dashboard,
}

impl<'a> BatchDeleteCoordinator<'a> {
    pub(super) fn new(dashboard: &'a Dashboard) -> Self {
        Self { dashboard }
    }

    pub async fn execute(&self) -> BatchOutcome {
        let (count, partition) = self
            .dashboard
            .read(|state| (state.selection.size(), state.selection.partition()));
        if count == 0 {
            return BatchOutcome::NothingSelected;
        }

        if !self
            .dashboard
            .confirm(ConfirmKind::BatchDelete { count })
            .await
        {
            return BatchOutcome::Declined;
        }

        let backend = self.dashboard.backend();
        let calls: Vec<_> = partition
            .non_empty()
            .map(|(kind, ids)| async move {
                tracing::info!("batch deleting {} {}", ids.len(), kind.collection());
                (kind, backend.batch_delete(kind, ids).await)
            })
            .collect();
        let issued = calls.len();

        let failed: Vec<(ResourceKind, ApiError)> = join_all(calls)
            .await
            .into_iter()
            .filter_map(|(kind, result)| result.err().map(|e| (kind, e)))
            .collect();

        self.dashboard.update(|state| {
            if !failed.is_empty() {
                for (kind, e) in &failed {
                    tracing::warn!("batch delete of {} failed: {}", kind.collection(), e);
                }
                state.push_notice(Notice::error(BATCH_FAILURE_ALERT));
            }
            state.clear_selection();
        });
        self.dashboard.refresh_all().await;

        BatchOutcome::Finished {
            calls: issued,
            failed,
        }
    }
}
