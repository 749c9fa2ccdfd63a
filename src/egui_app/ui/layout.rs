use eframe::egui::{self, Align, Layout, RichText, TopBottomPanel, Ui};

use super::EguiApp;
use super::style;
use crate::egui_app::state::AppView;

const APP_TITLE: &str = "Income Lens";
const APP_TAG: &str = "Прогноз дохода";

impl EguiApp {
    pub(super) fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Route files dropped anywhere on the window to the upload view.
    pub(super) fn consume_dropped_files(&mut self, ctx: &egui::Context) {
        let (hovered, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.controller.ui.upload.drop_hovered = hovered;
        if dropped.is_empty() {
            return;
        }
        self.controller.show_upload();
        self.controller.handle_dropped_files(dropped);
    }

    pub(super) fn render_panels(&mut self, ctx: &egui::Context) {
        self.render_header(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| match self.controller.ui.view {
                    AppView::Home => self.render_home(ui),
                    AppView::Upload => self.render_upload_view(ui),
                });
        });
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let title = ui.add(
                        egui::Label::new(RichText::new(APP_TITLE).strong().size(18.0))
                            .sense(egui::Sense::click()),
                    );
                    if title.clicked() {
                        self.controller.show_home();
                    }
                    style::tag_frame(palette.text_muted).show(ui, |ui| {
                        ui.label(RichText::new(APP_TAG).small().color(palette.text_muted));
                    });
                    ui.add_space(16.0);
                    let view = self.controller.ui.view;
                    if ui.selectable_label(view == AppView::Home, "Главная").clicked() {
                        self.controller.show_home();
                    }
                    if ui.selectable_label(view == AppView::Upload, "Загрузка").clicked() {
                        self.controller.show_upload();
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let hover = match crate::logging::current_log_file() {
                            Some(path) => format!("Открыть папку логов\n{}", path.display()),
                            None => "Открыть папку логов".to_string(),
                        };
                        if ui.button("Логи").on_hover_text(hover).clicked() {
                            self.controller.open_logs_folder();
                        }
                        self.render_health_badge(ui);
                    });
                });
            });
    }

    fn render_health_badge(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let health = &self.controller.ui.health;
        let color = match &health.last {
            _ if health.checking => palette.busy,
            Some(status) if status.is_ready() => palette.success,
            Some(crate::prediction::HealthStatus::Unreachable(_)) => palette.accent,
            Some(_) => palette.warning,
            None => palette.text_muted,
        };
        let hover = match &health.last {
            Some(crate::prediction::HealthStatus::Unreachable(reason)) => reason.clone(),
            _ => self.controller.config().api.base_url.clone(),
        };
        let label = health.label();
        let checking = health.checking;
        if ui
            .add_enabled(!checking, egui::Button::new("Проверить"))
            .clicked()
        {
            self.controller.check_server_health();
        }
        ui.label(RichText::new(label).color(color)).on_hover_text(hover);
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 6.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    let log = status.log_text();
                    let text = ui.label(RichText::new(&status.text));
                    if !log.is_empty() {
                        text.on_hover_text(log);
                    }
                    const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(APP_VERSION).color(palette.text_muted));
                    });
                });
            });
    }

    fn render_upload_view(&mut self, ui: &mut Ui) {
        ui.columns(2, |columns| {
            self.render_upload_panel(&mut columns[0]);
            columns[0].add_space(12.0);
            self.render_status_panel(&mut columns[0]);
            self.render_history_panel(&mut columns[1]);
        });
        if self.controller.ui.advisory.visible {
            ui.add_space(16.0);
            self.render_advisory_panels(ui);
        }
    }
}
