use eframe::egui::{self, RichText, Ui};

use super::EguiApp;
use super::status_panel::render_metric_grid;
use super::style;
use crate::egui_app::view_model;

const HISTORY_MAX_HEIGHT: f32 = 480.0;

impl EguiApp {
    pub(super) fn render_history_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let history = self.controller.history();
        let tag = view_model::history_count_tag(history);
        let rows = view_model::history_rows(history);
        let mut clear_requested = false;
        style::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("История предсказаний").strong().size(16.0));
                let tag_color = if rows.is_empty() {
                    palette.text_muted
                } else {
                    palette.accent_ice
                };
                style::tag_frame(tag_color).show(ui, |ui| {
                    ui.label(RichText::new(tag).small());
                });
                if !rows.is_empty() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        clear_requested = ui.button("Очистить").clicked();
                    });
                }
            });
            ui.add_space(8.0);
            if rows.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(
                        RichText::new("Здесь будет отображаться история ваших предсказаний")
                            .color(palette.text_muted),
                    );
                    ui.add_space(24.0);
                });
                return;
            }
            egui::ScrollArea::vertical()
                .id_salt("history_scroll")
                .max_height(HISTORY_MAX_HEIGHT)
                .show(ui, |ui| {
                    for (index, row) in rows.iter().enumerate() {
                        ui.push_id(index, |ui| {
                            egui::Frame::new()
                                .fill(palette.bg_secondary)
                                .corner_radius(egui::CornerRadius::same(6))
                                .inner_margin(egui::Margin::same(10))
                                .show(ui, |ui| {
                                    ui.set_min_width(ui.available_width());
                                    ui.horizontal(|ui| {
                                        ui.label(
                                            RichText::new(&row.number)
                                                .strong()
                                                .color(palette.accent),
                                        );
                                        ui.label(RichText::new(&row.file_name).strong());
                                        ui.label(
                                            RichText::new(&row.rows).color(palette.text_muted),
                                        );
                                    });
                                    render_metric_grid(ui, "history_stats", &row.stats);
                                });
                        });
                        ui.add_space(6.0);
                    }
                });
        });
        if clear_requested {
            self.controller.clear_history();
        }
    }
}
