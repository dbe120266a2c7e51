//! Chat transcript and input row

use egui::RichText;

use super::app::Intent;
use super::theme::{ACCENT_RED, BUBBLE_ASSISTANT, BUBBLE_USER, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::dashboard::ChatState;
use crate::domain::{ChatLine, ChatRole};

pub(super) fn chat_panel(
    ui: &mut egui::Ui,
    chat: &ChatState,
    draft: &mut String,
    intents: &mut Vec<Intent>,
) {
    let input_height = 36.0;

    egui::ScrollArea::vertical()
        .id_salt("chat_scroll")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .max_height(ui.available_height() - input_height)
        .show(ui, |ui| {
            if chat.transcript.is_empty() {
                ui.label(RichText::new("Say hello to Echo.").italics().color(TEXT_MUTED));
            }
            for line in &chat.transcript {
                bubble(ui, line);
                ui.add_space(6.0);
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        let enabled = chat.input_enabled;
        let field = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(draft)
                .hint_text(if chat.is_waiting() {
                    "Echo is thinking…"
                } else {
                    "Ask Echo…"
                })
                .desired_width(ui.available_width() - 70.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui.add_enabled(enabled, egui::Button::new("Send")).clicked();

        // Blank drafts stay put; ChatSession ignores them anyway
        if enabled && (submitted || clicked) && !draft.trim().is_empty() {
            intents.push(Intent::Send(std::mem::take(draft)));
            field.request_focus();
        }
    });
}

fn bubble(ui: &mut egui::Ui, line: &ChatLine) {
    let (fill, align) = match line.role {
        ChatRole::User => (BUBBLE_USER, egui::Align::Max),
        ChatRole::Assistant => (BUBBLE_ASSISTANT, egui::Align::Min),
    };
    let color = if line.error { ACCENT_RED } else { TEXT_PRIMARY };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::NONE
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.75);
                let text = RichText::new(&line.text).color(color);
                if line.placeholder {
                    ui.label(text.italics());
                } else {
                    ui.label(text);
                }
            });
        ui.label(
            RichText::new(line.at.format("%H:%M").to_string())
                .size(9.0)
                .color(TEXT_DIM),
        );
    });
}
