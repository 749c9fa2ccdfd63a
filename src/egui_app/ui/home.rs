use eframe::egui::{self, RichText, Ui};

use super::EguiApp;
use super::style;

const SERVICE_CARDS: [(&str, &str); 3] = [
    (
        "Прогноз дохода",
        "Модель оценивает доход каждого клиента из загруженного датасета.",
    ),
    (
        "Сводная статистика",
        "Среднее, медиана, минимум и максимум по всем предсказаниям.",
    ),
    (
        "Рекомендации",
        "Ключевые признаки модели и идеи продуктов для разных сегментов.",
    ),
];

impl EguiApp {
    pub(super) fn render_home(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Прогноз дохода клиентов").size(28.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Загрузите CSV-файл с данными клиентов, и ML-модель рассчитает \
                     ожидаемый доход по каждой строке.",
                )
                .color(palette.text_muted),
            );
            ui.add_space(20.0);
        });
        ui.columns(SERVICE_CARDS.len(), |columns| {
            for (column, (title, text)) in columns.iter_mut().zip(SERVICE_CARDS) {
                style::card_frame().show(column, |ui| {
                    ui.set_min_height(90.0);
                    ui.label(RichText::new(title).strong());
                    ui.add_space(4.0);
                    ui.label(RichText::new(text).color(palette.text_muted));
                });
            }
        });
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            let start = egui::Button::new(RichText::new("Начать").strong().size(16.0))
                .fill(palette.accent)
                .min_size(egui::vec2(180.0, 36.0));
            if ui.add(start).clicked() {
                self.controller.show_upload();
            }
        });
    }
}
