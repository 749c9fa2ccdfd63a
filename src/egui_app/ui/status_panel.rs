use eframe::egui::{self, RichText, Ui};

use super::EguiApp;
use super::style;
use crate::egui_app::view_model::{self, MetricCard};
use crate::format::format_bytes;

impl EguiApp {
    pub(super) fn render_status_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let session = self.controller.session();
        let tone = session.tone();
        let label = session.label();
        let preview_limit = self.controller.config().ui.preview_values;
        style::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 5.0, style::tone_color(tone));
                ui.label(RichText::new(label).strong());
            });
            if let Some(file) = session.selected_file() {
                ui.label(
                    RichText::new(format!(
                        "Активный файл: {} ({})",
                        file.name(),
                        format_bytes(file.size())
                    ))
                    .color(palette.text_muted),
                );
            }
            if let Some(message) = session.error_message() {
                ui.label(RichText::new(format!("Детали: {message}")).color(palette.accent));
            }
            let Some(result) = session.result() else {
                return;
            };
            ui.add_space(10.0);
            render_metric_grid(ui, "result_metrics", &view_model::result_metrics(result));
            let preview = view_model::preview_values(result, preview_limit);
            if !preview.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new("Первые предсказания").color(palette.text_muted));
                ui.horizontal_wrapped(|ui| {
                    for value in preview {
                        style::tag_frame(palette.accent_ice).show(ui, |ui| {
                            ui.label(RichText::new(value).monospace());
                        });
                    }
                });
                if let Some(caption) = view_model::preview_caption(result, preview_limit) {
                    ui.label(RichText::new(caption).small().color(palette.text_muted));
                }
            }
            if !result.request_id.is_empty() {
                ui.label(
                    RichText::new(format!("ID запроса: {}", result.request_id))
                        .small()
                        .color(palette.text_muted),
                );
            }
        });
    }
}

pub(super) fn render_metric_grid(ui: &mut Ui, id: &str, cards: &[MetricCard]) {
    let palette = style::palette();
    egui::Grid::new(id)
        .num_columns(cards.len())
        .spacing(egui::vec2(16.0, 4.0))
        .show(ui, |ui| {
            for card in cards {
                ui.label(RichText::new(card.label).small().color(palette.text_muted));
            }
            ui.end_row();
            for card in cards {
                ui.label(RichText::new(&card.value).strong());
            }
            ui.end_row();
        });
}
