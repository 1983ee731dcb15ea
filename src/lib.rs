//! Breach Estimator GUI Library
//!
//! Desktop client for the data-breach cost estimator backend.
//! This library exposes modules for testing; the binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
/// Page state: form, assessment, chart, recommendations and chat
pub mod state;
/// egui rendering
pub mod ui;
