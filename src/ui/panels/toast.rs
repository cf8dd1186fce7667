// Despacho - ui/panels/toast.rs
//
// Transient alert overlay, anchored to the bottom-right corner.
// Expiry is handled by the frame loop in gui.rs; this panel only draws
// the live toast and its manual dismiss control.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the toast overlay, if a toast is live.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(toast) = state.toast.clone() else {
        return;
    };

    let mut dismissed = false;

    egui::Area::new(egui::Id::new("toast_overlay"))
        .anchor(
            egui::Align2::RIGHT_BOTTOM,
            egui::vec2(-theme::TOAST_MARGIN, -theme::TOAST_MARGIN),
        )
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(&ctx.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("\u{25cf}")
                            .color(theme::toast_colour(toast.kind)),
                    );
                    ui.label(&toast.text);
                    if ui.small_button("\u{2715}").clicked() {
                        dismissed = true;
                    }
                });
            });
        });

    if dismissed {
        state.dismiss_toast();
    }
}
