// Despacho - ui/theme.rs
//
// The two visual themes (red / blue), status colour mapping, and layout
// constants. No dependencies on business logic.

use crate::app::state::Theme;
use crate::core::model::Status;
use egui::Color32;

/// Accent colour for the active theme.
pub fn accent(theme: Theme) -> Color32 {
    match theme {
        Theme::Red => Color32::from_rgb(220, 38, 38),  // Red 600
        Theme::Blue => Color32::from_rgb(37, 99, 235), // Blue 600
    }
}

/// Dimmer accent used for fills behind the accent colour.
pub fn accent_weak(theme: Theme) -> Color32 {
    match theme {
        Theme::Red => Color32::from_rgba_premultiplied(220, 38, 38, 40),
        Theme::Blue => Color32::from_rgba_premultiplied(37, 99, 235, 40),
    }
}

/// Colour for a responder's status badge.
pub fn status_colour(status: Status) -> Color32 {
    match status {
        Status::Available => Color32::from_rgb(34, 197, 94), // Green 500
        Status::Busy => Color32::from_rgb(239, 68, 68),      // Red 500
    }
}

/// Toast colours per kind.
pub fn toast_colour(kind: crate::app::toast::ToastKind) -> Color32 {
    match kind {
        crate::app::toast::ToastKind::Info => Color32::from_rgb(34, 197, 94), // Green 500
        crate::app::toast::ToastKind::Warning => Color32::from_rgb(217, 119, 6), // Amber 600
    }
}

/// Apply the theme to the egui context.
///
/// Both themes are dark variants differing only in accent colour.
pub fn apply(theme: Theme, ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    let accent = accent(theme);
    visuals.selection.bg_fill = accent_weak(theme);
    visuals.selection.stroke = egui::Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;
    visuals.widgets.active.bg_fill = accent_weak(theme);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, accent);
    ctx.set_visuals(visuals);
}

/// Layout constants.
pub const NAV_WIDTH: f32 = 160.0;
pub const AVATAR_RADIUS: f32 = 16.0;
pub const TOAST_MARGIN: f32 = 16.0;
pub const HISTORY_LIST_HEIGHT: f32 = 160.0;
