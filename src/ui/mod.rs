// Despacho - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: platform. The export save dialog in alerts.rs is
// the one deliberate I/O exception, kept next to its button.

pub mod panels;
pub mod theme;
