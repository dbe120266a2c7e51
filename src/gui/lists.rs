//! Painting of the three resource lists

use egui::{Color32, RichText};

use super::app::Intent;
use super::theme::{
    ACCENT_BLUE, ACCENT_GREEN, ACCENT_RED, ACCENT_YELLOW, BG_ACTIVE, BG_SECONDARY, TEXT_DIM,
    TEXT_MUTED, TEXT_PRIMARY,
};
use crate::view::{ListView, Row, RowAction, Tone};

pub(super) fn project_panel(
    ui: &mut egui::Ui,
    projects: &ListView,
    new_project: &mut String,
    intents: &mut Vec<Intent>,
) {
    if section_header(ui, "Projects", projects.len()) {
        intents.push(Intent::DeleteAllProjects);
    }

    ui.horizontal(|ui| {
        let field = ui.add(
            egui::TextEdit::singleline(new_project)
                .hint_text("New project")
                .desired_width(ui.available_width() - 40.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("+").clicked() || submitted) && !new_project.trim().is_empty() {
            intents.push(Intent::CreateProject(std::mem::take(new_project)));
        }
    });
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .id_salt("project_scroll")
        .show(ui, |ui| list(ui, projects, intents));
}

pub(super) fn task_and_memory_panel(
    ui: &mut egui::Ui,
    tasks: &ListView,
    memories: &ListView,
    intents: &mut Vec<Intent>,
) {
    let half = ui.available_height() / 2.0;

    if section_header(ui, "Tasks", tasks.len()) {
        intents.push(Intent::DeleteAllTasks);
    }
    egui::ScrollArea::vertical()
        .id_salt("task_scroll")
        .max_height(half - 40.0)
        .show(ui, |ui| list(ui, tasks, intents));

    ui.add_space(8.0);
    ui.separator();

    if section_header(ui, "Memories", memories.len()) {
        intents.push(Intent::DeleteAllMemories);
    }
    egui::ScrollArea::vertical()
        .id_salt("memory_scroll")
        .show(ui, |ui| list(ui, memories, intents));
}

/// Heading with a "Delete All" button; returns whether it was clicked
fn section_header(ui: &mut egui::Ui, title: &str, count: usize) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).size(15.0).strong().color(TEXT_PRIMARY));
        if count > 0 {
            ui.label(RichText::new(count.to_string()).small().color(TEXT_DIM));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clicked = ui
                .small_button(RichText::new("Delete All").color(ACCENT_RED))
                .clicked();
        });
    });
    ui.add_space(4.0);
    clicked
}

fn list(ui: &mut egui::Ui, view: &ListView, intents: &mut Vec<Intent>) {
    match view {
        ListView::Loading => {
            ui.label(RichText::new("Loading…").italics().color(TEXT_MUTED));
        }
        ListView::Empty { placeholder } => {
            ui.label(RichText::new(*placeholder).italics().color(TEXT_MUTED));
        }
        ListView::Rows(rows) => {
            for row in rows {
                card(ui, row, intents);
                ui.add_space(4.0);
            }
        }
    }
}

fn card(ui: &mut egui::Ui, row: &Row, intents: &mut Vec<Intent>) {
    let (fill, label_color) = match row.tone {
        Tone::Highlighted => (BG_ACTIVE, TEXT_PRIMARY),
        Tone::Dimmed => (BG_SECONDARY, TEXT_DIM),
        Tone::Normal => (BG_SECONDARY, TEXT_PRIMARY),
    };
    let stroke = if row.tone == Tone::Highlighted {
        egui::Stroke::new(1.0, ACCENT_GREEN)
    } else {
        egui::Stroke::NONE
    };

    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(6.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let mut checked = row.checked;
                if ui.checkbox(&mut checked, "").changed() {
                    intents.push(Intent::Row(row.toggle_event()));
                }
                ui.label(RichText::new(&row.label).strong().color(label_color));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for action in row.actions.iter().rev() {
                        if action_button(ui, *action).clicked() {
                            intents.push(Intent::Row(row.action_event(*action)));
                        }
                    }
                    if let Some(badge) = &row.badge {
                        let color = if row.tone == Tone::Highlighted {
                            ACCENT_GREEN
                        } else {
                            ACCENT_BLUE
                        };
                        ui.label(RichText::new(badge).small().color(color));
                    }
                    if !row.status.is_empty() && row.badge.is_none() {
                        ui.label(RichText::new(&row.status).small().color(status_color(&row.status)));
                    }
                });
            });

            if let Some(body) = row.body.as_deref().filter(|b| !b.is_empty()) {
                ui.label(RichText::new(body).size(12.0).color(TEXT_PRIMARY));
            }
            if !row.tags.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for tag in &row.tags {
                        ui.label(RichText::new(tag).size(10.0).color(TEXT_DIM));
                    }
                });
            }
        });
}

fn action_button(ui: &mut egui::Ui, action: RowAction) -> egui::Response {
    match action {
        RowAction::ForgetMemory => ui
            .add(egui::Label::new(RichText::new(action.label()).color(ACCENT_RED)).sense(egui::Sense::click()))
            .on_hover_text("Delete Memory"),
        _ => ui.small_button(action.label()),
    }
}

fn status_color(status: &str) -> Color32 {
    match status {
        "active" => ACCENT_GREEN,
        "paused" => ACCENT_YELLOW,
        _ => TEXT_DIM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color("active"), ACCENT_GREEN);
        assert_eq!(status_color("paused"), ACCENT_YELLOW);
        assert_eq!(status_color("failed"), TEXT_DIM);
    }
}
