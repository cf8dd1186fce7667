// Despacho - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (core depends on std + serde/chrono only).
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Responder (roster entry)
// =============================================================================

/// One emergency-response unit/person on the roster.
///
/// The roster is seeded once at startup and its length and identities are
/// constant for the whole session; only `status` ever mutates, and only in
/// the direction available → busy (via quick assign).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responder {
    /// Unique, stable ID.
    pub id: u32,

    /// Full display name, e.g. "Juan Pérez".
    pub name: String,

    /// Role label, e.g. "Conductor".
    pub role: String,

    /// Current availability.
    pub status: Status,
}

impl Responder {
    /// Two-letter initials for the card avatar: the first letter of up to
    /// the first two space-separated name tokens ("Juan Pérez" → "JP").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|token| token.chars().next())
            .collect()
    }
}

/// Availability of a responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Available,
    Busy,
}

impl Status {
    /// Localized label shown on the roster cards.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Available => "Disponible",
            Status::Busy => "Ocupado",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed demo roster. Always 3 records, in this order.
pub fn seed_roster() -> Vec<Responder> {
    vec![
        Responder {
            id: 1,
            name: "Juan Pérez".to_string(),
            role: "Conductor".to_string(),
            status: Status::Available,
        },
        Responder {
            id: 2,
            name: "María López".to_string(),
            role: "Jefa de Turno".to_string(),
            status: Status::Busy,
        },
        Responder {
            id: 3,
            name: "Carlos Díaz".to_string(),
            role: "Bombero".to_string(),
            status: Status::Available,
        },
    ]
}

// =============================================================================
// History entry (one submitted alert)
// =============================================================================

/// One submitted alert in the session history log.
///
/// The wire field names are the Spanish short forms (`tipo` / `ubicacion`
/// / `timestamp`); both the session store and the exported
/// `historial_alertas.json` use them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Incident type, e.g. "Incendio forestal".
    #[serde(rename = "tipo")]
    pub incident_type: String,

    /// Incident location, e.g. "Parque Norte".
    #[serde(rename = "ubicacion")]
    pub location: String,

    /// Submission time in epoch milliseconds (UTC).
    #[serde(rename = "timestamp")]
    pub timestamp_millis: i64,
}

impl HistoryEntry {
    /// Single display line: "{localized timestamp} · {tipo} · {ubicacion}".
    pub fn display_line(&self) -> String {
        format!(
            "{} · {} · {}",
            format_timestamp(self.timestamp_millis),
            self.incident_type,
            self.location
        )
    }
}

/// Format an epoch-millis timestamp in the machine's local time zone.
pub fn format_timestamp(millis: i64) -> String {
    use chrono::{Local, TimeZone};

    match Local.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        // Out-of-range or ambiguous values fall back to the raw number so
        // a corrupt entry still renders something.
        _ => millis.to_string(),
    }
}

/// History display lines, most-recent-first (submission order is oldest-first).
pub fn history_lines(history: &[HistoryEntry]) -> Vec<String> {
    history.iter().rev().map(HistoryEntry::display_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roster_is_fixed() {
        let roster = seed_roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].name, "Juan Pérez");
        assert_eq!(roster[0].status, Status::Available);
        assert_eq!(roster[1].name, "María López");
        assert_eq!(roster[1].status, Status::Busy);
        assert_eq!(roster[2].name, "Carlos Díaz");
        assert_eq!(roster[2].status, Status::Available);
    }

    #[test]
    fn test_initials_first_two_tokens() {
        let roster = seed_roster();
        assert_eq!(roster[0].initials(), "JP");
        assert_eq!(roster[1].initials(), "ML");
    }

    #[test]
    fn test_initials_single_token_and_extra_tokens() {
        let mut r = seed_roster().remove(2);
        r.name = "Cher".to_string();
        assert_eq!(r.initials(), "C");
        r.name = "Ana Belén García Ruiz".to_string();
        assert_eq!(r.initials(), "AB");
    }

    #[test]
    fn test_status_labels_localized() {
        assert_eq!(Status::Available.label(), "Disponible");
        assert_eq!(Status::Busy.label(), "Ocupado");
    }

    #[test]
    fn test_history_entry_wire_field_names() {
        let entry = HistoryEntry {
            incident_type: "Incendio forestal".to_string(),
            location: "Parque Norte".to_string(),
            timestamp_millis: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["tipo"], "Incendio forestal");
        assert_eq!(json["ubicacion"], "Parque Norte");
        assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
    }

    #[test]
    fn test_history_lines_most_recent_first() {
        let history = vec![
            HistoryEntry {
                incident_type: "A".to_string(),
                location: "X".to_string(),
                timestamp_millis: 1_000,
            },
            HistoryEntry {
                incident_type: "B".to_string(),
                location: "Y".to_string(),
                timestamp_millis: 2_000,
            },
        ];
        let lines = history_lines(&history);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("B · Y"));
        assert!(lines[1].contains("A · X"));
    }
}
