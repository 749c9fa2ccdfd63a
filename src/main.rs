#![deny(warnings)]

//! Entry point for the egui-based income prediction front end.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use income_lens::config::{self, AppConfig};
use income_lens::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use income_lens::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let startup = load_config();
    if let Ok(config) = &startup {
        tracing::info!("Prediction service: {}", config.api.base_url);
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Income Lens")
        .with_inner_size([1280.0, 820.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Income Lens",
        native_options,
        Box::new(move |_cc| match startup {
            Ok(config) => Ok(Box::new(EguiApp::new(config))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

/// Load `config.toml`, writing the defaults on first launch.
fn load_config() -> Result<AppConfig, String> {
    let config =
        config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
    match config::config_path() {
        Ok(path) if !path.exists() => {
            if let Err(err) = config::save(&AppConfig::default()) {
                tracing::warn!("Could not write default config: {err}");
            }
        }
        Ok(_) => {}
        Err(err) => tracing::warn!("Config path unavailable: {err}"),
    }
    Ok(config)
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
