//! Library exports for the income prediction front end and its tests.
/// Static advisory panels content.
pub mod advisory;
/// Application directory resolution.
pub mod app_dirs;
/// `config.toml` loading and saving.
pub mod config;
/// egui controller, state and renderer.
pub mod egui_app;
/// Russian-locale number formatting.
pub mod format;
/// Shared HTTP client helpers.
pub mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// Upload state machine, wire types and service calls.
pub mod prediction;
