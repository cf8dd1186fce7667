// Despacho - core/filter.rs
//
// Roster filter: text and status criteria are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Responder, Status};

/// Status criterion for the roster filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Match every status.
    #[default]
    All,
    /// Match only the given status.
    Only(Status),
}

impl StatusFilter {
    fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }

    /// Label for the status drop-down.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Todos",
            StatusFilter::Only(Status::Available) => "Disponible",
            StatusFilter::Only(Status::Busy) => "Ocupado",
        }
    }
}

/// Complete roster filter state. Both criteria are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
    /// Case-insensitive substring match on the responder name. Empty = all.
    pub text: String,

    /// Status criterion.
    pub status: StatusFilter,
}

/// Apply the filter to the roster, returning indices of matching responders.
///
/// Indices are in original roster order, so the rendered card list always
/// preserves the seed ordering regardless of the active filter.
pub fn filter_roster(roster: &[Responder], filter: &RosterFilter) -> Vec<usize> {
    let text_lower = filter.text.to_lowercase();

    roster
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.name.to_lowercase().contains(&text_lower) && filter.status.matches(r.status)
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Availability summary for the *filtered* roster view.
///
/// "Unidades disponibles" if any filtered responder is available,
/// otherwise "Todas ocupadas" (also shown for an empty result).
pub fn availability_summary(roster: &[Responder], filtered: &[usize]) -> &'static str {
    let any_available = filtered
        .iter()
        .filter_map(|&idx| roster.get(idx))
        .any(|r| r.status == Status::Available);
    if any_available {
        "Unidades disponibles"
    } else {
        "Todas ocupadas"
    }
}
