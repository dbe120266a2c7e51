//! Main application state and frame loop

use std::collections::VecDeque;
use std::future::Future;
use std::time::{Duration, Instant};

use eframe::egui::{self, RichText, Stroke};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use super::theme::{
    ACCENT_RED, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY,
};
use super::{chat, lists, prompt};
use crate::confirm::PendingConfirm;
use crate::dashboard::{ChatState, Dashboard, Notice};
use crate::scheduler::SchedulerHandle;
use crate::view::{ListView, RowEvent};

/// Something the user asked for during this frame
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Intent {
    Row(RowEvent),
    Send(String),
    CreateProject(String),
    DeleteAllProjects,
    DeleteAllTasks,
    DeleteAllMemories,
    DeleteSelected,
    Refresh,
}

/// Per-frame copy of the dashboard state, taken under one lock
struct Snapshot {
    projects: ListView,
    tasks: ListView,
    memories: ListView,
    chat: ChatState,
    batch_label: Option<String>,
}

pub struct DashboardApp {
    dashboard: Dashboard,
    runtime: Handle,
    scheduler: SchedulerHandle,
    prompts: mpsc::UnboundedReceiver<PendingConfirm>,
    /// Confirmation currently on screen
    prompt: Option<PendingConfirm>,
    /// Typed-but-unsent chat text
    draft: String,
    new_project: String,
    pub(super) notices: VecDeque<Notice>,
    pub(super) current_toast: Option<(Notice, Instant)>,
}

impl DashboardApp {
    pub fn new(
        dashboard: Dashboard,
        runtime: Handle,
        scheduler: SchedulerHandle,
        prompts: mpsc::UnboundedReceiver<PendingConfirm>,
    ) -> Self {
        Self {
            dashboard,
            runtime,
            scheduler,
            prompts,
            prompt: None,
            draft: String::new(),
            new_project: String::new(),
            notices: VecDeque::new(),
            current_toast: None,
        }
    }

    /// Run `work` on the runtime and repaint once it settles
    fn spawn<F>(&self, ctx: &egui::Context, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            work.await;
            ctx.request_repaint();
        });
    }

    fn snapshot(&self) -> Snapshot {
        self.dashboard.read(|state| Snapshot {
            projects: state.projects.view().clone(),
            tasks: state.tasks.view().clone(),
            memories: state.memories.view().clone(),
            chat: state.chat.clone(),
            batch_label: state.selection.batch_label(),
        })
    }

    fn dispatch(&self, ctx: &egui::Context, intents: Vec<Intent>) {
        for intent in intents {
            let dashboard = self.dashboard.clone();
            match intent {
                // Selection changes are synchronous and never touch the backend
                Intent::Row(RowEvent::Toggle(key)) => {
                    dashboard.toggle(key.kind, key.id);
                }
                Intent::Row(event) => self.spawn(ctx, async move {
                    dashboard.handle(event).await;
                }),
                Intent::Send(message) => self.spawn(ctx, async move {
                    dashboard.chat().send(&message).await;
                }),
                Intent::CreateProject(name) => self.spawn(ctx, async move {
                    dashboard.projects().create(&name).await;
                }),
                Intent::DeleteAllProjects => self.spawn(ctx, async move {
                    dashboard.projects().delete_all().await;
                }),
                Intent::DeleteAllTasks => self.spawn(ctx, async move {
                    dashboard.tasks().delete_all().await;
                }),
                Intent::DeleteAllMemories => self.spawn(ctx, async move {
                    dashboard.memories().delete_all().await;
                }),
                Intent::DeleteSelected => self.spawn(ctx, async move {
                    dashboard.batch_delete().execute().await;
                }),
                Intent::Refresh => self.scheduler.request_refresh(),
            }
        }
    }

    fn render_header(&self, ui: &mut egui::Ui, snapshot: &Snapshot, intents: &mut Vec<Intent>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Echo Deck").size(18.0).strong().color(TEXT_PRIMARY));
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("session {}", self.dashboard.session_id()))
                    .small()
                    .color(TEXT_DIM),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟳ Refresh").clicked() {
                    intents.push(Intent::Refresh);
                }
                if let Some(label) = &snapshot.batch_label {
                    let button = egui::Button::new(RichText::new(label).color(TEXT_PRIMARY))
                        .fill(ACCENT_RED);
                    if ui.add(button).clicked() {
                        intents.push(Intent::DeleteSelected);
                    }
                }
            });
        });
    }

    fn poll_prompt(&mut self) {
        if self.prompt.is_none() {
            self.prompt = self.prompts.try_recv().ok();
        }
    }
}

fn apply_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);
    style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
    style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
    ctx.set_style(style);
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_style(ctx);

        self.notices.extend(self.dashboard.take_notices());
        self.poll_prompt();

        let snapshot = self.snapshot();
        let mut intents = Vec::new();

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(8.0))
            .show(ctx, |ui| {
                self.render_header(ui, &snapshot, &mut intents);
            });

        egui::SidePanel::left("projects")
            .default_width(280.0)
            .resizable(true)
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                lists::project_panel(ui, &snapshot.projects, &mut self.new_project, &mut intents);
            });

        egui::SidePanel::right("tasks_and_memories")
            .default_width(340.0)
            .resizable(true)
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                lists::task_and_memory_panel(ui, &snapshot.tasks, &snapshot.memories, &mut intents);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                chat::chat_panel(ui, &snapshot.chat, &mut self.draft, &mut intents);
            });

        if let Some(pending) = self.prompt.take() {
            match prompt::render_prompt(ctx, &pending.request) {
                Some(approved) => pending.answer(approved),
                None => self.prompt = Some(pending),
            }
        }

        self.render_toast(ctx);
        self.dispatch(ctx, intents);

        // Picks up confirmations raised from background tasks
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
