//! Per-kind capability descriptors.
//!
//! One generic reconciler drives all three lists; what differs per kind
//! (endpoint, id extraction, ordering, row mapping) lives here.

use futures::future::BoxFuture;

use super::{RowAction, RowContent, Tone};
use crate::api::{ApiError, Backend};
use crate::domain::{EntityId, Memory, Project, ResourceKind, Task, TaskStatus};

pub trait ResourceDescriptor: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    const KIND: ResourceKind;

    /// Placeholder shown when the fetched list is empty
    const EMPTY_TEXT: &'static str;

    /// Read the full current list
    fn fetch(backend: &dyn Backend) -> BoxFuture<'_, Result<Vec<Self::Item>, ApiError>>;

    fn id(item: &Self::Item) -> &EntityId;

    /// Order and filter fetched items for display
    fn arrange(items: &[Self::Item]) -> Vec<&Self::Item> {
        items.iter().collect()
    }

    fn describe(item: &Self::Item) -> RowContent;
}

pub struct ProjectRows;

impl ResourceDescriptor for ProjectRows {
    type Item = Project;

    const KIND: ResourceKind = ResourceKind::Project;
    const EMPTY_TEXT: &'static str = "No projects";

    fn fetch(backend: &dyn Backend) -> BoxFuture<'_, Result<Vec<Project>, ApiError>> {
        backend.list_projects()
    }

    fn id(item: &Project) -> &EntityId {
        &item.id
    }

    fn describe(project: &Project) -> RowContent {
        let active = project.is_active();
        RowContent {
            label: project.name.clone(),
            status: project.status.as_str().to_string(),
            tone: if active { Tone::Highlighted } else { Tone::Dimmed },
            badge: active.then(|| "Active".to_string()),
            actions: if active {
                Vec::new()
            } else {
                vec![RowAction::SwitchProject]
            },
            ..RowContent::default()
        }
    }
}

pub struct TaskRows;

impl ResourceDescriptor for TaskRows {
    type Item = Task;

    const KIND: ResourceKind = ResourceKind::Task;
    const EMPTY_TEXT: &'static str = "No active tasks";

    fn fetch(backend: &dyn Backend) -> BoxFuture<'_, Result<Vec<Task>, ApiError>> {
        backend.list_tasks()
    }

    fn id(item: &Task) -> &EntityId {
        &item.id
    }

    /// Active tasks first, otherwise fetch order; completed tasks hidden
    fn arrange(items: &[Task]) -> Vec<&Task> {
        let mut visible: Vec<&Task> = items.iter().collect();
        // sort_by_key is stable: only the active/non-active split moves rows
        visible.sort_by_key(|task| !task.is_active());
        visible.retain(|task| !task.is_completed());
        visible
    }

    fn describe(task: &Task) -> RowContent {
        RowContent {
            label: task.intent.clone(),
            status: task.status.as_str().to_string(),
            tone: if task.status == TaskStatus::Paused {
                Tone::Dimmed
            } else {
                Tone::Normal
            },
            actions: task
                .status
                .available_action()
                .map(RowAction::Control)
                .into_iter()
                .collect(),
            ..RowContent::default()
        }
    }
}

pub struct MemoryRows;

impl ResourceDescriptor for MemoryRows {
    type Item = Memory;

    const KIND: ResourceKind = ResourceKind::Memory;
    const EMPTY_TEXT: &'static str = "No memories yet";

    fn fetch(backend: &dyn Backend) -> BoxFuture<'_, Result<Vec<Memory>, ApiError>> {
        backend.list_memories()
    }

    fn id(item: &Memory) -> &EntityId {
        &item.id
    }

    fn describe(memory: &Memory) -> RowContent {
        RowContent {
            label: memory.display_title().to_string(),
            badge: Some(memory.kind.clone()),
            body: Some(memory.content.clone()),
            tags: memory.tags.iter().map(|tag| format!("#{tag}")).collect(),
            actions: vec![RowAction::ForgetMemory],
            ..RowContent::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProjectStatus, TaskAction};

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: EntityId::new(id),
            intent: format!("task {id}"),
            status,
        }
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_active_first_and_completed_hidden() {
        let tasks = vec![
            task("1", TaskStatus::Paused),
            task("2", TaskStatus::Active),
            task("3", TaskStatus::Completed),
        ];
        assert_eq!(ids(&TaskRows::arrange(&tasks)), vec!["2", "1"]);
    }

    #[test]
    fn test_non_active_keep_relative_order() {
        let tasks = vec![
            task("a", TaskStatus::Paused),
            task("b", TaskStatus::Other("failed".to_string())),
            task("c", TaskStatus::Active),
            task("d", TaskStatus::Paused),
            task("e", TaskStatus::Active),
        ];
        assert_eq!(
            ids(&TaskRows::arrange(&tasks)),
            vec!["c", "e", "a", "b", "d"]
        );
    }

    #[test]
    fn test_task_actions_by_status() {
        let active = TaskRows::describe(&task("1", TaskStatus::Active));
        assert_eq!(active.actions, vec![RowAction::Control(TaskAction::Pause)]);

        let paused = TaskRows::describe(&task("2", TaskStatus::Paused));
        assert_eq!(paused.actions, vec![RowAction::Control(TaskAction::Resume)]);
        assert_eq!(paused.tone, Tone::Dimmed);

        let failed = TaskRows::describe(&task("3", TaskStatus::Other("failed".into())));
        assert!(failed.actions.is_empty());
    }

    #[test]
    fn test_only_active_project_is_highlighted() {
        let active = ProjectRows::describe(&Project {
            id: EntityId::new("p1"),
            name: "Garden".to_string(),
            status: ProjectStatus::Active,
        });
        assert_eq!(active.tone, Tone::Highlighted);
        assert!(active.actions.is_empty());
        assert_eq!(active.badge.as_deref(), Some("Active"));

        let other = ProjectRows::describe(&Project {
            id: EntityId::new("p2"),
            name: "Taxes".to_string(),
            status: ProjectStatus::Inactive("paused".to_string()),
        });
        assert_eq!(other.tone, Tone::Dimmed);
        assert_eq!(other.actions, vec![RowAction::SwitchProject]);
        assert_eq!(other.status, "paused");
    }

    #[test]
    fn test_memory_row_shows_type_and_tags() {
        let row = MemoryRows::describe(&Memory {
            id: EntityId::new("m1"),
            title: None,
            content: "prefers dark mode".to_string(),
            kind: "preference".to_string(),
            tags: vec!["ui".to_string(), "settings".to_string()],
        });
        assert_eq!(row.label, "Memory");
        assert_eq!(row.badge.as_deref(), Some("preference"));
        assert_eq!(row.tags, vec!["#ui", "#settings"]);
        assert_eq!(row.actions, vec![RowAction::ForgetMemory]);
    }
}
