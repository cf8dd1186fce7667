// Despacho - ui/panels/nav.rs
//
// Navigation rail contents: one link per page section. Selecting a link
// requests a scroll to that section and collapses the rail.

use crate::app::state::{AppState, Section};

/// Render the navigation links.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Secciones");
    ui.separator();

    for &section in Section::all() {
        if ui.selectable_label(false, section.label()).clicked() {
            state.pending_scroll = Some(section);
            state.nav_open = false;
        }
    }
}
