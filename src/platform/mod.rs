// Despacho - platform/mod.rs
//
// Platform layer: filesystem locations.
// Dependencies: util (constants). Must NOT depend on: ui, app.

pub mod config;
