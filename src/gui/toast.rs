//! Toast notifications for dashboard notices

use std::time::{Duration, Instant};

use egui::{Align2, Color32, Id, RichText, Vec2};

use super::app::DashboardApp;
use super::theme::{ACCENT_BLUE, ACCENT_RED, BG_SECONDARY};
use crate::dashboard::NoticeLevel;

/// How long a toast is displayed
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Animation duration for fade in/out
const FADE_DURATION: f32 = 0.3;

impl DashboardApp {
    pub(super) fn render_toast(&mut self, ctx: &egui::Context) {
        if self.current_toast.is_none() {
            if let Some(notice) = self.notices.pop_front() {
                self.current_toast = Some((notice, Instant::now()));
            }
        }

        let Some((notice, start_time)) = &self.current_toast else {
            return;
        };

        let elapsed = start_time.elapsed();
        if elapsed > TOAST_DURATION {
            self.current_toast = None;
            ctx.request_repaint(); // Next toast
            return;
        }

        let alpha = fade_alpha(elapsed.as_secs_f32());
        let accent = match notice.level {
            NoticeLevel::Error => ACCENT_RED,
            NoticeLevel::Info => ACCENT_BLUE,
        };
        let message = notice.message.clone();

        egui::Area::new(Id::new("notice_toast"))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, 60.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(apply_alpha(BG_SECONDARY, alpha * 0.95))
                    .stroke(egui::Stroke::new(1.0, apply_alpha(accent, alpha)))
                    .corner_radius(8.0)
                    .inner_margin(14.0)
                    .show(ui, |ui| {
                        ui.set_min_width(240.0);
                        ui.label(
                            RichText::new(message)
                                .color(apply_alpha(Color32::WHITE, alpha))
                                .size(13.0),
                        );
                    });
            });

        ctx.request_repaint();
    }
}

fn fade_alpha(elapsed: f32) -> f32 {
    let total = TOAST_DURATION.as_secs_f32();
    if elapsed < FADE_DURATION {
        elapsed / FADE_DURATION
    } else if elapsed > total - FADE_DURATION {
        ((total - elapsed) / FADE_DURATION).max(0.0)
    } else {
        1.0
    }
}

fn apply_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * alpha) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_alpha_envelope() {
        assert_eq!(fade_alpha(0.0), 0.0);
        assert_eq!(fade_alpha(2.0), 1.0);
        assert!(fade_alpha(3.9) < 0.5);
        assert_eq!(fade_alpha(5.0), 0.0);
    }
}
