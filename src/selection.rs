//! Multi-select state shared by the three resource lists.
//!
//! Membership is independent of what the last fetch returned: a key whose
//! entity disappeared server-side simply lingers until it is toggled off or
//! the next batch delete clears the store.

use std::collections::HashSet;

use crate::domain::{EntityId, ResourceKind};

/// Identifies one checkable item across resource kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionKey {
    pub kind: ResourceKind,
    pub id: EntityId,
}

impl SelectionKey {
    pub fn new(kind: ResourceKind, id: impl Into<EntityId>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl std::fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Selected ids split by resource kind, each in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPartition {
    pub projects: Vec<EntityId>,
    pub tasks: Vec<EntityId>,
    pub memories: Vec<EntityId>,
}

impl SelectionPartition {
    pub fn ids(&self, kind: ResourceKind) -> &[EntityId] {
        match kind {
            ResourceKind::Project => &self.projects,
            ResourceKind::Task => &self.tasks,
            ResourceKind::Memory => &self.memories,
        }
    }

    /// Non-empty partitions only
    pub fn non_empty(&self) -> impl Iterator<Item = (ResourceKind, &[EntityId])> {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| (kind, self.ids(kind)))
            .filter(|(_, ids)| !ids.is_empty())
    }
}

/// The single source of truth for "is this item checked"
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    members: HashSet<SelectionKey>,
    /// Insertion order, mirrors `members`
    order: Vec<SelectionKey>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `(kind, id)`. Returns the new membership.
    pub fn toggle(&mut self, kind: ResourceKind, id: impl Into<EntityId>) -> bool {
        let key = SelectionKey::new(kind, id);
        if self.members.remove(&key) {
            self.order.retain(|k| k != &key);
            false
        } else {
            self.members.insert(key.clone());
            self.order.push(key);
            true
        }
    }

    pub fn contains(&self, kind: ResourceKind, id: &EntityId) -> bool {
        // HashSet lookup needs an owned key; ids are short strings
        self.members.contains(&SelectionKey::new(kind, id.clone()))
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.order.clear();
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Selected keys in the order they were checked
    pub fn keys(&self) -> impl Iterator<Item = &SelectionKey> {
        self.order.iter()
    }

    pub fn partition(&self) -> SelectionPartition {
        let mut partition = SelectionPartition::default();
        for key in &self.order {
            let bucket = match key.kind {
                ResourceKind::Project => &mut partition.projects,
                ResourceKind::Task => &mut partition.tasks,
                ResourceKind::Memory => &mut partition.memories,
            };
            bucket.push(key.id.clone());
        }
        partition
    }

    /// Label for the batch-action control, `None` when it should be hidden
    pub fn batch_label(&self) -> Option<String> {
        match self.size() {
            0 => None,
            n => Some(format!("Delete Selected ({n})")),
        }
    }
}
