//! Modal confirmation window

use egui::{RichText, Vec2};

use super::theme::{ACCENT_RED, ACCENT_YELLOW, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::confirm::ConfirmRequest;

/// Draw the prompt; `Some(answer)` once the user decided
pub(super) fn render_prompt(ctx: &egui::Context, request: &ConfirmRequest) -> Option<bool> {
    let destructive = request.is_destructive();
    let (title, accent) = if destructive {
        ("⚠ Danger", ACCENT_RED)
    } else {
        ("Confirm", ACCENT_YELLOW)
    };

    let mut answer = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .fixed_size(Vec2::new(360.0, 140.0))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            egui::Frame::NONE
                .fill(BG_SECONDARY)
                .corner_radius(4.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(&request.message).color(TEXT_PRIMARY));
                    if destructive {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new("Everything of this kind is removed on the server.")
                                .small()
                                .color(TEXT_MUTED),
                        );
                    }
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Cancel").color(TEXT_DIM)).clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Escape))
                {
                    answer = Some(false);
                }
                ui.add_space(8.0);
                let confirm = egui::Button::new(RichText::new("OK").strong().color(TEXT_PRIMARY))
                    .fill(accent);
                if ui.add(confirm).clicked() {
                    answer = Some(true);
                }
            });
        });
    answer
}
