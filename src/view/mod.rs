//! Rendered form of the resource lists.
//!
//! A [`ListView`] is what a painter (the egui window, the text snapshot)
//! draws. It is rebuilt wholesale on every reconciliation; nothing in it is
//! ever read back to decide state.

mod rows;
mod text;

pub use rows::{MemoryRows, ProjectRows, ResourceDescriptor, TaskRows};

use crate::domain::TaskAction;
use crate::selection::SelectionKey;

/// Visual weight of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    /// The active project
    Highlighted,
    /// Paused tasks, non-active projects
    Dimmed,
}

/// Per-row control offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    /// "Switch To" on a non-active project
    SwitchProject,
    /// Pause or resume a task
    Control(TaskAction),
    /// The × on a memory card
    ForgetMemory,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::SwitchProject => "Switch To",
            RowAction::Control(action) => action.label(),
            RowAction::ForgetMemory => "×",
        }
    }
}

/// User input coming back from a rendered row.
///
/// Selection and row actions are separate variants, so toggling a checkbox
/// can never be mistaken for the row's own action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    Toggle(SelectionKey),
    Action { key: SelectionKey, action: RowAction },
}

/// Everything about a row except its identity and checked state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowContent {
    pub label: String,
    pub status: String,
    pub tone: Tone,
    pub badge: Option<String>,
    pub body: Option<String>,
    pub tags: Vec<String>,
    pub actions: Vec<RowAction>,
}

/// One rendered item
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: SelectionKey,
    /// Derived from the selection store at render time
    pub checked: bool,
    pub label: String,
    pub status: String,
    pub tone: Tone,
    /// Static chip (memory type, "Active" on the active project)
    pub badge: Option<String>,
    pub body: Option<String>,
    /// Display-ready tags, already prefixed with `#`
    pub tags: Vec<String>,
    pub actions: Vec<RowAction>,
}

impl Row {
    pub fn assemble(key: SelectionKey, checked: bool, content: RowContent) -> Self {
        Self {
            key,
            checked,
            label: content.label,
            status: content.status,
            tone: content.tone,
            badge: content.badge,
            body: content.body,
            tags: content.tags,
            actions: content.actions,
        }
    }

    pub fn toggle_event(&self) -> RowEvent {
        RowEvent::Toggle(self.key.clone())
    }

    pub fn action_event(&self, action: RowAction) -> RowEvent {
        RowEvent::Action {
            key: self.key.clone(),
            action,
        }
    }
}

/// A rendered list: a placeholder, or rows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListView {
    /// Nothing has been rendered yet
    #[default]
    Loading,
    Empty { placeholder: &'static str },
    Rows(Vec<Row>),
}

impl ListView {
    pub fn rows(&self) -> &[Row] {
        match self {
            ListView::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}
