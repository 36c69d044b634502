//! Directory of professional profiles: dataset model, loader, the filter and
//! derivation engine, and the session state driving the egui front-end.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod message;
pub mod state;
pub mod toast;
pub mod ui;
