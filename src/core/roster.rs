// Despacho - core/roster.rs
//
// Roster mutations: the quick-assign scan.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Responder, Status};

/// Mark the first available responder (by original roster order) as busy.
///
/// Returns the index of the responder that was assigned, or `None` when
/// no responder is available (in which case nothing is mutated).
/// Deterministic: a single linear scan, no randomness.
pub fn quick_assign(roster: &mut [Responder]) -> Option<usize> {
    let idx = roster.iter().position(|r| r.status == Status::Available)?;
    roster[idx].status = Status::Busy;
    Some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::seed_roster;

    #[test]
    fn test_quick_assign_picks_first_available() {
        let mut roster = seed_roster();
        let assigned = quick_assign(&mut roster);
        assert_eq!(assigned, Some(0));
        assert_eq!(roster[0].status, Status::Busy);
        // The other two are untouched.
        assert_eq!(roster[1].status, Status::Busy);
        assert_eq!(roster[2].status, Status::Available);
    }

    #[test]
    fn test_quick_assign_consecutive_picks_next() {
        let mut roster = seed_roster();
        assert_eq!(quick_assign(&mut roster), Some(0));
        assert_eq!(quick_assign(&mut roster), Some(2));
        assert!(roster.iter().all(|r| r.status == Status::Busy));
    }

    #[test]
    fn test_quick_assign_none_available_mutates_nothing() {
        let mut roster = seed_roster();
        for r in roster.iter_mut() {
            r.status = Status::Busy;
        }
        let before = roster.clone();
        assert_eq!(quick_assign(&mut roster), None);
        assert_eq!(roster, before);
    }
}
