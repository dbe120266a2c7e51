//! GUI Theme: dark panels with a single blue accent
//!
//! Color constants for the Echo Deck window.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

pub const BG_PRIMARY: Color32 = Color32::from_rgb(13, 17, 23);
/// Cards and panels
pub const BG_SECONDARY: Color32 = Color32::from_rgb(22, 27, 34);
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(33, 38, 45);
/// Active project card
pub const BG_ACTIVE: Color32 = Color32::from_rgb(18, 38, 30);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 237, 243);
pub const TEXT_DIM: Color32 = Color32::from_rgb(139, 148, 158);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(90, 98, 108);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_BLUE: Color32 = Color32::from_rgb(88, 166, 255);
/// Active project marker
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(35, 134, 54);
/// Destructive actions, error lines
pub const ACCENT_RED: Color32 = Color32::from_rgb(248, 81, 73);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(210, 153, 34);

// ═══════════════════════════════════════════════════════════════════════════
// CHAT BUBBLES
// ═══════════════════════════════════════════════════════════════════════════

pub const BUBBLE_USER: Color32 = Color32::from_rgb(31, 111, 235);
pub const BUBBLE_ASSISTANT: Color32 = Color32::from_rgb(33, 38, 45);
