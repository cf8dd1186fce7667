// Despacho - app/state.rs
//
// Application state management. Single owner of all mutable UI state:
// the roster, filter, history, toggles, and the live toast.
// Owned by the eframe::App implementation; handlers are methods here
// instead of free-floating globals.

use crate::app::history;
use crate::app::toast::{Toast, ToastKind};
use crate::core::filter::RosterFilter;
use crate::core::model::{seed_roster, HistoryEntry, Responder};
use crate::util::constants::{
    PLACEHOLDER_INCIDENT_TYPE, PLACEHOLDER_LOCATION, TOAST_DEFAULT_TIMEOUT_MS,
    TOAST_WARNING_TIMEOUT_MS,
};
use std::path::PathBuf;
use std::time::Duration;

/// The two mutually exclusive visual themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Red,
    Blue,
}

impl Theme {
    /// The other theme (the toggle action).
    pub fn toggled(self) -> Self {
        match self {
            Theme::Red => Theme::Blue,
            Theme::Blue => Theme::Red,
        }
    }
}

/// Scroll targets for the navigation rail, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inicio,
    Equipo,
    Alertas,
    Historial,
}

impl Section {
    /// All sections in page order (drives the nav rail).
    pub fn all() -> &'static [Section] {
        &[
            Section::Inicio,
            Section::Equipo,
            Section::Alertas,
            Section::Historial,
        ]
    }

    /// Nav-link and section-heading label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Inicio => "Inicio",
            Section::Equipo => "Equipo",
            Section::Alertas => "Alertas",
            Section::Historial => "Historial",
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The fixed roster. Length and identities never change; only `status`.
    pub roster: Vec<Responder>,

    /// Current roster filter (text + status).
    pub filter: RosterFilter,

    /// Session history of submitted alerts, oldest-first.
    pub history: Vec<HistoryEntry>,

    /// Where the history is persisted. `None` disables persistence for the
    /// session (the app stays fully interactive without it).
    pub history_path: Option<PathBuf>,

    /// Alert form fields.
    pub form_incident_type: String,
    pub form_location: String,

    /// Whether the navigation rail is expanded.
    pub nav_open: bool,

    /// Section the content panel should scroll to on the next frame.
    pub pending_scroll: Option<Section>,

    /// Active visual theme.
    pub theme: Theme,

    /// Mute flag. Placeholder: no audio is wired up, the toggle only flips
    /// the label and pressed state.
    pub muted: bool,

    /// The single live transient alert, if any.
    pub toast: Option<Toast>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state, restoring any persisted history.
    pub fn new(history_path: Option<PathBuf>, debug_mode: bool) -> Self {
        let history = match &history_path {
            Some(path) => history::load(path),
            None => Vec::new(),
        };
        Self {
            roster: seed_roster(),
            filter: RosterFilter::default(),
            history,
            history_path,
            form_incident_type: String::new(),
            form_location: String::new(),
            nav_open: false,
            pending_scroll: None,
            theme: Theme::Red,
            muted: false,
            toast: None,
            status_message: "Listo.".to_string(),
            debug_mode,
        }
    }

    /// Indices of roster entries matching the current filter, in seed order.
    pub fn filtered_roster(&self) -> Vec<usize> {
        crate::core::filter::filter_roster(&self.roster, &self.filter)
    }

    // ------------------------------------------------------------------
    // Transient alerts
    // ------------------------------------------------------------------

    /// Show a confirmation toast with the default timeout. Replaces any
    /// visible toast and its pending auto-hide deadline.
    pub fn show_toast(&mut self, text: impl Into<String>) {
        self.show_toast_with(
            text,
            ToastKind::Info,
            Duration::from_millis(TOAST_DEFAULT_TIMEOUT_MS),
        );
    }

    /// Show a toast with an explicit kind and timeout.
    pub fn show_toast_with(&mut self, text: impl Into<String>, kind: ToastKind, timeout: Duration) {
        self.toast = Some(Toast::new(text, kind, timeout));
    }

    /// Manual dismiss: hide immediately and drop the pending deadline.
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    // ------------------------------------------------------------------
    // Alert form + history
    // ------------------------------------------------------------------

    /// Handle alert-form submission: default blank fields, append a
    /// timestamped entry, persist, confirm via toast, reset the form.
    pub fn submit_alert(&mut self) {
        let incident_type = match self.form_incident_type.trim() {
            "" => PLACEHOLDER_INCIDENT_TYPE.to_string(),
            t => t.to_string(),
        };
        let location = match self.form_location.trim() {
            "" => PLACEHOLDER_LOCATION.to_string(),
            u => u.to_string(),
        };

        let entry = HistoryEntry {
            incident_type: incident_type.clone(),
            location: location.clone(),
            timestamp_millis: chrono::Utc::now().timestamp_millis(),
        };
        self.history.push(entry);
        self.persist_history();

        self.show_toast(format!("Alerta enviada: {incident_type} · {location}"));
        self.form_incident_type.clear();
        self.form_location.clear();
    }

    /// Clear the history both in memory and in the session store.
    pub fn clear_history(&mut self) {
        self.history.clear();
        if let Some(path) = &self.history_path {
            if let Err(e) = history::clear(path) {
                tracing::warn!(error = %e, "Failed to remove history store");
            }
        }
        self.status_message = "Historial borrado.".to_string();
    }

    /// Persist the full history after a mutation. A failed save degrades
    /// persistence only; the session keeps working in memory.
    fn persist_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = history::save(&self.history, path) {
                tracing::warn!(error = %e, "Failed to save history");
            }
        }
    }

    // ------------------------------------------------------------------
    // Quick assign
    // ------------------------------------------------------------------

    /// Mark the first available responder busy and confirm with a toast;
    /// warn (shorter timeout, no mutation) when nobody is available.
    pub fn quick_assign(&mut self) {
        match crate::core::roster::quick_assign(&mut self.roster) {
            Some(idx) => {
                let name = self.roster[idx].name.clone();
                tracing::info!(responder = %name, "Quick assign");
                self.show_toast(format!("Unidad asignada: {name}"));
            }
            None => {
                self.show_toast_with(
                    "No hay unidades disponibles",
                    ToastKind::Warning,
                    Duration::from_millis(TOAST_WARNING_TIMEOUT_MS),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Status;

    fn state() -> AppState {
        AppState::new(None, false)
    }

    #[test]
    fn test_submit_appends_entry_with_current_timestamp() {
        let mut s = state();
        s.form_incident_type = "Incendio forestal".to_string();
        s.form_location = "Parque Norte".to_string();

        let before = chrono::Utc::now().timestamp_millis();
        s.submit_alert();

        assert_eq!(s.history.len(), 1);
        let entry = &s.history[0];
        assert_eq!(entry.incident_type, "Incendio forestal");
        assert_eq!(entry.location, "Parque Norte");
        assert!(entry.timestamp_millis >= before);

        // The rendered history's top line is the new entry.
        let lines = crate::core::model::history_lines(&s.history);
        assert!(lines[0].contains("Incendio forestal · Parque Norte"));

        // Form is reset, confirmation toast is visible.
        assert!(s.form_incident_type.is_empty());
        assert!(s.form_location.is_empty());
        let toast = s.toast.as_ref().expect("confirmation toast");
        assert_eq!(toast.text, "Alerta enviada: Incendio forestal · Parque Norte");
    }

    #[test]
    fn test_submit_blank_fields_use_placeholders() {
        let mut s = state();
        s.form_incident_type = "   ".to_string();
        s.submit_alert();

        let entry = &s.history[0];
        assert_eq!(entry.incident_type, "No especificado");
        assert_eq!(entry.location, "No especificada");
    }

    #[test]
    fn test_clear_history_empties_memory() {
        let mut s = state();
        s.submit_alert();
        assert_eq!(s.history.len(), 1);
        s.clear_history();
        assert!(s.history.is_empty());
    }

    #[test]
    fn test_quick_assign_flips_first_available_only() {
        let mut s = state();
        s.quick_assign();
        assert_eq!(s.roster[0].status, Status::Busy);
        assert_eq!(s.roster[2].status, Status::Available);
        assert_eq!(
            s.toast.as_ref().unwrap().text,
            "Unidad asignada: Juan Pérez"
        );

        // Second consecutive assign picks the next available.
        s.quick_assign();
        assert_eq!(s.roster[2].status, Status::Busy);
        assert_eq!(
            s.toast.as_ref().unwrap().text,
            "Unidad asignada: Carlos Díaz"
        );
    }

    #[test]
    fn test_quick_assign_exhausted_warns_without_mutation() {
        let mut s = state();
        s.quick_assign();
        s.quick_assign();
        let before = s.roster.clone();

        s.quick_assign();
        assert_eq!(s.roster, before);
        let toast = s.toast.as_ref().unwrap();
        assert_eq!(toast.text, "No hay unidades disponibles");
        assert_eq!(toast.kind, crate::app::toast::ToastKind::Warning);
        // Warning timeout is the shorter one.
        assert!(toast.remaining(std::time::Instant::now()) <= Duration::from_millis(4_000));
    }

    #[test]
    fn test_new_toast_replaces_previous() {
        let mut s = state();
        s.show_toast("primera");
        s.show_toast("segunda");
        assert_eq!(s.toast.as_ref().unwrap().text, "segunda");

        s.dismiss_toast();
        assert!(s.toast.is_none());
    }

    #[test]
    fn test_theme_toggle_is_binary() {
        assert_eq!(Theme::Red.toggled(), Theme::Blue);
        assert_eq!(Theme::Blue.toggled(), Theme::Red);
    }
}
