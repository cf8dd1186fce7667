// Despacho - ui/panels/mod.rs

pub mod alerts;
pub mod nav;
pub mod roster;
pub mod toast;
