// Despacho - ui/panels/alerts.rs
//
// Alert form and history sections. Submission goes through
// AppState::submit_alert so the append → persist → confirm → reset
// pipeline lives in one place.

use crate::app::state::AppState;
use crate::util::constants::EXPORT_FILE_NAME;

/// Render the alert-form section body.
pub fn render_form(ui: &mut egui::Ui, state: &mut AppState) {
    egui::Grid::new("alert_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Tipo de incendio:");
            ui.add(
                egui::TextEdit::singleline(&mut state.form_incident_type)
                    .hint_text("p. ej. Incendio forestal")
                    .desired_width(240.0),
            );
            ui.end_row();

            ui.label("Ubicación:");
            ui.add(
                egui::TextEdit::singleline(&mut state.form_location)
                    .hint_text("p. ej. Parque Norte")
                    .desired_width(240.0),
            );
            ui.end_row();
        });

    ui.add_space(4.0);

    if ui.button("Enviar alerta").clicked() {
        state.submit_alert();
    }
}

/// Render the history section body: most-recent-first list plus the
/// clear and export actions.
pub fn render_history(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let has_entries = !state.history.is_empty();
        ui.add_enabled_ui(has_entries, |ui| {
            if ui.button("Borrar historial").clicked() {
                state.clear_history();
            }
            if ui.button("Exportar JSON\u{2026}").clicked() {
                export_history(state);
            }
        });
    });

    ui.add_space(4.0);

    if state.history.is_empty() {
        ui.label("Sin alertas registradas en esta sesión.");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("historial")
        .max_height(crate::ui::theme::HISTORY_LIST_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for line in crate::core::model::history_lines(&state.history) {
                ui.label(egui::RichText::new(line).monospace());
            }
        });
}

/// Save-dialog export of the full history as pretty-printed JSON.
fn export_history(state: &mut AppState) {
    let Some(dest) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name(EXPORT_FILE_NAME)
        .save_file()
    else {
        return;
    };

    match std::fs::File::create(&dest) {
        Ok(f) => match crate::core::export::export_json(&state.history, f, &dest) {
            Ok(n) => {
                state.status_message = format!("Exportadas {n} alertas a JSON.");
                tracing::info!(path = %dest.display(), entries = n, "History exported");
            }
            Err(e) => {
                state.status_message = format!("Error al exportar: {e}");
                tracing::warn!(error = %e, "History export failed");
            }
        },
        Err(e) => {
            state.status_message = format!("No se pudo crear el archivo: {e}");
        }
    }
}
