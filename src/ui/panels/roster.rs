// Despacho - ui/panels/roster.rs
//
// Roster section: filter controls, availability summary, responder cards,
// and the quick-assign demo action.
//
// Immediate mode re-renders every frame, so the filter re-applies on
// every keystroke and status selection without extra wiring.

use crate::app::state::AppState;
use crate::core::filter::StatusFilter;
use crate::core::model::Status;
use crate::ui::theme;

/// Render the roster section body.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Filter controls.
    ui.horizontal(|ui| {
        ui.label("Buscar:");
        ui.add(
            egui::TextEdit::singleline(&mut state.filter.text)
                .hint_text("Nombre del bombero")
                .desired_width(180.0),
        );

        ui.label("Estado:");
        egui::ComboBox::from_id_salt("filtro_estado")
            .selected_text(state.filter.status.label())
            .show_ui(ui, |ui| {
                for option in [
                    StatusFilter::All,
                    StatusFilter::Only(Status::Available),
                    StatusFilter::Only(Status::Busy),
                ] {
                    ui.selectable_value(&mut state.filter.status, option, option.label());
                }
            });

        if ui.button("Asignación rápida").clicked() {
            state.quick_assign();
        }
    });

    ui.add_space(4.0);

    let filtered = state.filtered_roster();

    // Availability summary for the filtered view.
    let summary = crate::core::filter::availability_summary(&state.roster, &filtered);
    ui.label(egui::RichText::new(summary).italics());

    ui.add_space(4.0);

    if filtered.is_empty() {
        ui.label("Ningún bombero coincide con el filtro.");
        return;
    }

    for idx in filtered {
        let Some(responder) = state.roster.get(idx) else {
            continue;
        };
        card(ui, responder, state.theme);
    }
}

/// One responder card: initials avatar, name, role, status badge.
fn card(ui: &mut egui::Ui, responder: &crate::core::model::Responder, theme: crate::app::state::Theme) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            avatar(ui, &responder.initials(), theme);

            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&responder.name).strong());
                ui.label(egui::RichText::new(&responder.role).weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(responder.status.label())
                        .color(theme::status_colour(responder.status))
                        .strong(),
                );
            });
        });
    });
}

/// Painted initials avatar.
fn avatar(ui: &mut egui::Ui, initials: &str, theme: crate::app::state::Theme) {
    let size = theme::AVATAR_RADIUS * 2.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), theme::AVATAR_RADIUS, theme::accent(theme));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
}
