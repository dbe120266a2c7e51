//! Periodic re-fetching of the three resource lists.
//!
//! Each kind has its own timer. A tick spawns its fetch as a separate task,
//! so a slow backend never delays the other timers; stale responses are
//! dropped by the reconciler's sequencing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::config::PollingSettings;
use crate::dashboard::Dashboard;
use crate::domain::ResourceKind;

type ChangeHook = Arc<dyn Fn() + Send + Sync>;

pub struct PollingScheduler {
    dashboard: Dashboard,
    settings: PollingSettings,
    on_change: Option<ChangeHook>,
}

impl PollingScheduler {
    pub fn new(dashboard: Dashboard, settings: PollingSettings) -> Self {
        Self {
            dashboard,
            settings,
            on_change: None,
        }
    }

    /// Called after every fetch settles, e.g. to wake the GUI
    pub fn on_change(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(hook));
        self
    }

    /// Issue the initial full refresh and start the timers.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> SchedulerHandle {
        let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        tracing::info!(
            "polling tasks every {:?}, memories every {:?}, projects every {:?}",
            self.settings.tasks(),
            self.settings.memories(),
            self.settings.projects()
        );

        let task = tokio::spawn(async move {
            let mut tasks = ticker(self.settings.tasks());
            let mut memories = ticker(self.settings.memories());
            let mut projects = ticker(self.settings.projects());

            self.refresh_all();
            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = tasks.tick() => self.poll(ResourceKind::Task),
                    _ = memories.tick() => self.poll(ResourceKind::Memory),
                    _ = projects.tick() => self.poll(ResourceKind::Project),
                    request = refresh_rx.recv() => match request {
                        Some(()) => self.refresh_all(),
                        None => break,
                    },
                }
            }
            tracing::debug!("polling stopped");
        });

        SchedulerHandle {
            refresh_tx,
            shutdown_tx,
            task,
        }
    }

    fn poll(&self, kind: ResourceKind) {
        let dashboard = self.dashboard.clone();
        let hook = self.on_change.clone();
        tokio::spawn(async move {
            dashboard.fetch_kind(kind).await;
            notify(hook.as_ref());
        });
    }

    fn refresh_all(&self) {
        let dashboard = self.dashboard.clone();
        let hook = self.on_change.clone();
        tokio::spawn(async move {
            dashboard.refresh_all().await;
            notify(hook.as_ref());
        });
    }
}

fn notify(hook: Option<&ChangeHook>) {
    if let Some(hook) = hook {
        hook();
    }
}

/// First tick one full period from now; the initial refresh covers t=0
fn ticker(period: Duration) -> Interval {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Control over a running scheduler. Dropping it stops the timers.
pub struct SchedulerHandle {
    refresh_tx: mpsc::UnboundedSender<()>,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Queue an immediate fetch of all three lists
    pub fn request_refresh(&self) {
        if self.refresh_tx.send(()).is_err() {
            tracing::debug!("refresh requested after polling stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.stop();
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::api::{ApiError, Backend};
    use crate::confirm::AutoConfirm;
    use crate::domain::{
        ChatReply, ChatRequest, EntityId, Memory, Project, Task, TaskAction,
    };
    use crate::session::SessionId;

    /// Counts list calls per kind
    #[derive(Default)]
    struct CountingBackend {
        projects: AtomicUsize,
        tasks: AtomicUsize,
        memories: AtomicUsize,
    }

    #[async_trait]
    impl Backend for CountingBackend {
        async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
            self.projects.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
            self.tasks.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn list_memories(&self) -> Result<Vec<Memory>, ApiError> {
            self.memories.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn batch_delete(&self, _: ResourceKind, _: &[EntityId]) -> Result<(), ApiError> {
            Ok(())
        }

        async fn delete_all(&self, _: ResourceKind) -> Result<(), ApiError> {
            Ok(())
        }

        async fn create_project(&self, _: &str) -> Result<(), ApiError> {
            Ok(())
        }

        async fn switch_project(&self, _: &EntityId) -> Result<(), ApiError> {
            Ok(())
        }

        async fn control_task(&self, _: &EntityId, _: TaskAction) -> Result<(), ApiError> {
            Ok(())
        }

        async fn delete_memory(&self, _: &EntityId) -> Result<(), ApiError> {
            Ok(())
        }

        async fn send_chat(&self, _: &ChatRequest) -> Result<ChatReply, ApiError> {
            Err(ApiError::Transport("unused".to_string()))
        }
    }

    fn settings() -> PollingSettings {
        PollingSettings {
            tasks_ms: 2000,
            memories_ms: 5000,
            projects_ms: 5000,
        }
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_cadence() {
        let backend = Arc::new(CountingBackend::default());
        let dashboard = Dashboard::new(
            backend.clone(),
            Arc::new(AutoConfirm(true)),
            SessionId::generate(),
        );
        let handle = PollingScheduler::new(dashboard, settings()).spawn();
        settle().await;

        // Initial full refresh
        assert_eq!(backend.tasks.load(Ordering::SeqCst), 1);
        assert_eq!(backend.projects.load(Ordering::SeqCst), 1);
        assert_eq!(backend.memories.load(Ordering::SeqCst), 1);

        // t = 10s: tasks at 2,4,6,8,10; the others at 5,10
        for _ in 0..10 {
            tokio::time::advance(Duration::from_secs(1)).await;
            settle().await;
        }
        assert_eq!(backend.tasks.load(Ordering::SeqCst), 6);
        assert_eq!(backend.projects.load(Ordering::SeqCst), 3);
        assert_eq!(backend.memories.load(Ordering::SeqCst), 3);

        handle.request_refresh();
        settle().await;
        assert_eq!(backend.tasks.load(Ordering::SeqCst), 7);
        assert_eq!(backend.projects.load(Ordering::SeqCst), 4);

        handle.stop();
        settle().await;
        assert!(!handle.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_polling() {
        let backend = Arc::new(CountingBackend::default());
        let dashboard = Dashboard::new(
            backend.clone(),
            Arc::new(AutoConfirm(true)),
            SessionId::generate(),
        );
        let handle = PollingScheduler::new(dashboard, settings()).spawn();
        settle().await;

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(backend.tasks.load(Ordering::SeqCst), 2);

        drop(handle);
        settle().await;

        for _ in 0..12 {
            tokio::time::advance(Duration::from_secs(1)).await;
            settle().await;
        }
        assert_eq!(backend.tasks.load(Ordering::SeqCst), 2);
        assert_eq!(backend.projects.load(Ordering::SeqCst), 1);
        assert_eq!(backend.memories.load(Ordering::SeqCst), 1);
    }
}
