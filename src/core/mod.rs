// Despacho - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library plus serde/chrono for data types.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod export;
pub mod filter;
pub mod model;
pub mod roster;
