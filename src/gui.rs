// Despacho - gui.rs
//
// Top-level eframe::App implementation.
// Wires the top bar, navigation rail, content sections, status bar, and
// the toast overlay; owns toast expiry and the click-outside collapse.

use crate::app::state::{AppState, Section, Theme};
use crate::ui;

/// The Despacho application.
pub struct DespachoApp {
    pub state: AppState,
    /// Theme last pushed to the egui context, so visuals are rebuilt only
    /// when the toggle actually flips.
    applied_theme: Option<Theme>,
}

impl DespachoApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            applied_theme: None,
        }
    }

    /// One content section: heading plus body, honouring a pending
    /// smooth-scroll request targeting it.
    fn section(
        &mut self,
        ui: &mut egui::Ui,
        section: Section,
        body: impl FnOnce(&mut egui::Ui, &mut AppState),
    ) {
        let heading = ui.heading(section.label());
        if self.state.pending_scroll == Some(section) {
            heading.scroll_to_me(Some(egui::Align::Min));
            self.state.pending_scroll = None;
        }
        ui.separator();
        body(ui, &mut self.state);
        ui.add_space(24.0);
    }
}

impl eframe::App for DespachoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Rebuild visuals when the theme flips (and on the first frame).
        if self.applied_theme != Some(self.state.theme) {
            ui::theme::apply(self.state.theme, ctx);
            self.applied_theme = Some(self.state.theme);
        }

        // Toast expiry. Schedule a repaint at the deadline so the toast
        // hides promptly even when the user generates no events.
        if let Some(toast) = &self.state.toast {
            let now = std::time::Instant::now();
            if toast.expired(now) {
                self.state.toast = None;
            } else {
                ctx.request_repaint_after(toast.remaining(now));
            }
        }

        // Top bar: hamburger toggle, title, mute and theme toggles.
        let mut toggle_rect = None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let toggle = ui.selectable_label(self.state.nav_open, "\u{2630}");
                if toggle.clicked() {
                    self.state.nav_open = !self.state.nav_open;
                }
                toggle_rect = Some(toggle.rect);

                ui.heading(
                    egui::RichText::new("Cuartel de Bomberos — Despacho")
                        .color(ui::theme::accent(self.state.theme)),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Theme toggle: pressed state tracks the active theme.
                    let theme_pressed = self.state.theme == Theme::Blue;
                    if ui.selectable_label(theme_pressed, "Tema azul").clicked() {
                        self.state.theme = self.state.theme.toggled();
                    }

                    // Mute toggle: label and pressed state only, no audio.
                    let mute_label = if self.state.muted {
                        "\u{1f507} Silencio"
                    } else {
                        "\u{1f508} Sonido"
                    };
                    if ui.selectable_label(self.state.muted, mute_label).clicked() {
                        self.state.muted = !self.state.muted;
                    }
                });
            });
        });

        // Status bar.
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.roster.len();
                    let filtered = self.state.filtered_roster().len();
                    ui.label(format!("{filtered}/{total} unidades"));
                    ui.separator();
                    ui.label(format!("{} alertas", self.state.history.len()));
                });
            });
        });

        // Navigation rail (animated open/close).
        let nav_rect = egui::SidePanel::left("nav_rail")
            .default_width(ui::theme::NAV_WIDTH)
            .resizable(false)
            .show_animated(ctx, self.state.nav_open, |ui| {
                ui::panels::nav::render(ui, &mut self.state);
            })
            .map(|r| r.response.rect);

        // Collapse the rail on a primary press anywhere outside both the
        // rail and its toggle button.
        if self.state.nav_open {
            let pressed_outside = ctx.input(|i| {
                if !i.pointer.any_pressed() {
                    return false;
                }
                let Some(pos) = i.pointer.interact_pos() else {
                    return false;
                };
                let in_nav = nav_rect.is_some_and(|r| r.contains(pos));
                let in_toggle = toggle_rect.is_some_and(|r| r.contains(pos));
                !in_nav && !in_toggle
            });
            if pressed_outside {
                self.state.nav_open = false;
            }
        }

        // Content sections in one scrollable column.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("contenido")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.section(ui, Section::Inicio, |ui, _state| {
                        ui.label(
                            "Demo de despacho del cuartel de bomberos: consulte el equipo, \
                             envíe alertas y asigne unidades disponibles.",
                        );
                    });
                    self.section(ui, Section::Equipo, |ui, state| {
                        ui::panels::roster::render(ui, state);
                    });
                    self.section(ui, Section::Alertas, |ui, state| {
                        ui::panels::alerts::render_form(ui, state);
                    });
                    self.section(ui, Section::Historial, |ui, state| {
                        ui::panels::alerts::render_history(ui, state);
                    });
                });
        });

        // Any scroll request that found no section this frame expires
        // silently rather than lingering.
        self.state.pending_scroll = None;

        // Toast overlay, above everything else.
        ui::panels::toast::render(ctx, &mut self.state);
    }
}
