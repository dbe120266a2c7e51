//! Sequenced reconciliation of fetched lists with the local selection.
//!
//! Each fetch takes a ticket before it suspends. When the response comes
//! back, a ticket older than the last applied one is discarded, so a slow
//! response can never overwrite a newer render. Failed fetches leave the
//! last good render untouched.

use std::marker::PhantomData;

use crate::api::ApiError;
use crate::selection::{SelectionKey, SelectionStore};
use crate::view::{ListView, ResourceDescriptor, Row};

/// Sequence number handed out by [`Reconciler::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// What happened to a fetched response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Rendered
    Applied,
    /// A newer response was already rendered; this one was dropped
    Stale,
    /// Fetch failed; previous render kept
    Failed(ApiError),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied)
    }
}

pub struct Reconciler<D: ResourceDescriptor> {
    view: ListView,
    /// Last successfully applied list, used to re-derive checkboxes
    items: Vec<D::Item>,
    issued: u64,
    applied: u64,
    _kind: PhantomData<D>,
}

impl<D: ResourceDescriptor> Default for Reconciler<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ResourceDescriptor> Reconciler<D> {
    pub fn new() -> Self {
        Self {
            view: ListView::Loading,
            items: Vec::new(),
            issued: 0,
            applied: 0,
            _kind: PhantomData,
        }
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Reserve the next sequence number for a fetch about to be issued
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Apply a fetch result, rendering against the selection as it is now
    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<D::Item>, ApiError>,
        selection: &SelectionStore,
    ) -> ApplyOutcome {
        if ticket.0 <= self.applied {
            tracing::debug!(
                "{} response #{} dropped, #{} already rendered",
                D::KIND,
                ticket.0,
                self.applied
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(items) => {
                self.applied = ticket.0;
                self.items = items;
                self.render(selection);
                ApplyOutcome::Applied
            }
            Err(e) => {
                tracing::warn!("{} fetch failed: {}", D::KIND, e);
                ApplyOutcome::Failed(e)
            }
        }
    }

    /// Full tear-down and rebuild from the last applied items
    pub fn render(&mut self, selection: &SelectionStore) {
        if self.items.is_empty() {
            self.view = ListView::Empty {
                placeholder: D::EMPTY_TEXT,
            };
            return;
        }

        let rows = D::arrange(&self.items)
            .into_iter()
            .map(|item| {
                let id = D::id(item);
                let checked = selection.contains(D::KIND, id);
                Row::assemble(SelectionKey::new(D::KIND, id.clone()), checked, D::describe(item))
            })
            .collect();
        self.view = ListView::Rows(rows);
    }
}
