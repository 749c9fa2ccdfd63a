//! egui renderer for the application UI.

mod advisory_panel;
mod history_panel;
mod home;
mod layout;
mod status_panel;
pub mod style;
mod upload_panel;

use std::time::Duration;

use eframe::egui;

use crate::config::AppConfig;
use crate::egui_app::controller::EguiController;

/// Smallest window that still fits the two-column upload view.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);
const JOB_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    health_requested: bool,
}

impl EguiApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            controller: EguiController::new(config),
            visuals_set: false,
            health_requested: false,
        }
    }

    pub fn controller(&self) -> &EguiController {
        &self.controller
    }

    fn request_initial_health_check(&mut self) {
        if self.health_requested {
            return;
        }
        self.health_requested = true;
        self.controller.check_server_health();
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.request_initial_health_check();
        self.controller.tick();
        self.consume_dropped_files(ctx);
        self.render_panels(ctx);
        if self.controller.has_pending_jobs() {
            ctx.request_repaint_after(JOB_POLL_INTERVAL);
        }
    }
}
