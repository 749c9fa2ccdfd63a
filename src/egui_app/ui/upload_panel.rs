use eframe::egui::{self, RichText, Ui};

use super::EguiApp;
use super::style;
use crate::egui_app::view_model;

impl EguiApp {
    pub(super) fn render_upload_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let uploading = self.controller.session().is_uploading();
        let hovered = self.controller.ui.upload.drop_hovered && !uploading;
        style::card_frame()
            .stroke(style::drop_zone_stroke(hovered))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new("Загрузка данных").strong().size(16.0));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    let hint = if hovered {
                        "Отпустите файл, чтобы выбрать его"
                    } else {
                        "Перетащите CSV-файл в окно"
                    };
                    ui.label(RichText::new(hint).color(palette.text_muted));
                    ui.label(RichText::new("или").small().color(palette.text_muted));
                    if ui
                        .add_enabled(!uploading, egui::Button::new("Выбрать файл"))
                        .clicked()
                    {
                        self.controller.choose_file_via_dialog();
                    }
                });
                ui.add_space(8.0);
                if let Some(file) = self.controller.session().selected_file() {
                    ui.label(RichText::new(view_model::file_caption(file)).color(palette.accent_ice));
                }
                if let Some(error) = self.controller.ui.upload.local_error.clone() {
                    ui.label(RichText::new(error).color(palette.accent));
                }
                ui.add_space(8.0);
                self.render_upload_actions(ui, uploading);
            });
    }

    fn render_upload_actions(&mut self, ui: &mut Ui, uploading: bool) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            let can_submit = self.controller.can_submit();
            let submit = egui::Button::new(RichText::new("Отправить в модель").strong())
                .fill(if can_submit { palette.accent } else { palette.bg_tertiary });
            if ui.add_enabled(can_submit, submit).clicked() {
                self.controller.submit_upload();
            }
            if uploading {
                ui.spinner();
                if ui.button("Отменить").clicked() {
                    self.controller.cancel_upload();
                }
            } else if self.controller.session().selected_file().is_some()
                && ui.button("Сбросить").clicked()
            {
                self.controller.clear_selection();
            }
        });
    }
}
