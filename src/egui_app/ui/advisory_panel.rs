use eframe::egui::{self, RichText, Ui};

use super::EguiApp;
use super::style;
use crate::advisory::{
    FeatureInsight, PRODUCT_RECOMMENDATIONS, PRODUCTS_INTRO, PRODUCTS_TAG, PRODUCTS_TITLE,
    ProductRecommendation, TOP_FEATURES, TOP_FEATURES_INTRO, TOP_FEATURES_TAG, TOP_FEATURES_TITLE,
};

impl EguiApp {
    pub(super) fn render_advisory_panels(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let features_open = self.controller.ui.advisory.features_open;
        let products_open = self.controller.ui.advisory.products_open;

        if collapsible_header(
            ui,
            TOP_FEATURES_TITLE,
            TOP_FEATURES_TAG,
            palette.accent_ice,
            features_open,
        ) {
            self.controller.toggle_features_panel();
        }
        if features_open {
            ui.label(RichText::new(TOP_FEATURES_INTRO).color(palette.text_muted));
            ui.add_space(6.0);
            for (index, feature) in TOP_FEATURES.iter().enumerate() {
                render_feature(ui, index, feature);
            }
        }
        ui.add_space(12.0);
        if collapsible_header(ui, PRODUCTS_TITLE, PRODUCTS_TAG, palette.success, products_open) {
            self.controller.toggle_products_panel();
        }
        if products_open {
            ui.label(RichText::new(PRODUCTS_INTRO).color(palette.text_muted));
            ui.add_space(6.0);
            for (index, product) in PRODUCT_RECOMMENDATIONS.iter().enumerate() {
                render_product(ui, index, product);
            }
        }
    }
}

/// Header row with a toggle arrow; returns true when clicked.
fn collapsible_header(
    ui: &mut Ui,
    title: &str,
    tag: &str,
    tag_color: egui::Color32,
    open: bool,
) -> bool {
    let arrow = if open { "▼" } else { "▶" };
    let response = style::card_frame()
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(arrow));
                ui.label(RichText::new(title).strong().size(16.0));
                style::tag_frame(tag_color).show(ui, |ui| {
                    ui.label(RichText::new(tag).small());
                });
            });
        })
        .response;
    response.interact(egui::Sense::click()).clicked()
}

fn render_feature(ui: &mut Ui, index: usize, feature: &FeatureInsight) {
    let palette = style::palette();
    style::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{}", index + 1)).strong().color(palette.accent));
            ui.label(RichText::new(feature.display_name).strong());
            let color = style::impact_color(feature.impact);
            style::tag_frame(color).show(ui, |ui| {
                ui.label(
                    RichText::new(format!("{} приоритет", feature.impact.label()))
                        .small()
                        .color(color),
                );
            });
        });
        ui.label(RichText::new(feature.description).color(palette.text_muted));
        ui.label(format!("Рекомендация: {}", feature.recommendation));
        ui.label(format!("Бизнес-ценность: {}", feature.business_value));
    });
    ui.add_space(6.0);
}

fn render_product(ui: &mut Ui, index: usize, product: &ProductRecommendation) {
    let palette = style::palette();
    style::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(product.icon).size(18.0));
            ui.label(RichText::new(format!("#{}", index + 1)).color(palette.text_muted));
            ui.label(RichText::new(product.title).strong());
        });
        ui.label(RichText::new(product.description).color(palette.text_muted));
        ui.label(format!("Целевая аудитория: {}", product.audience));
        ui.label(format!("Бизнес-выгода: {}", product.benefit));
        ui.label(RichText::new("Ключевые особенности:").strong());
        for item in product.key_features {
            ui.label(format!("• {item}"));
        }
    });
    ui.add_space(6.0);
}
