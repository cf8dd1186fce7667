// Despacho - app/mod.rs
//
// Application layer: orchestration, state management, history persistence.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod history;
pub mod state;
pub mod toast;
