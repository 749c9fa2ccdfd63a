use eframe::egui::{
    Color32, CornerRadius, Frame, Margin, Stroke, Visuals,
    epaint::Shadow,
    style::WidgetVisuals,
};

pub use crate::prediction::StatusTone;
use crate::advisory::Impact;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_ice: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub busy: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 12, 14),
        bg_secondary: Color32::from_rgb(24, 25, 28),
        bg_tertiary: Color32::from_rgb(38, 40, 44),
        panel_outline: Color32::from_rgb(46, 48, 54),
        grid_soft: Color32::from_rgb(30, 32, 36),
        text_primary: Color32::from_rgb(214, 218, 224),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent: Color32::from_rgb(239, 49, 36),
        accent_ice: Color32::from_rgb(167, 217, 255),
        warning: Color32::from_rgb(255, 152, 0),
        success: Color32::from_rgb(102, 176, 136),
        busy: Color32::from_rgb(31, 139, 255),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.accent;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget(&mut visuals.widgets.inactive, palette);
    set_widget(&mut visuals.widgets.hovered, palette);
    set_widget(&mut visuals.widgets.active, palette);
    set_widget(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(6);
    visuals.menu_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Footer badge label and color for a tone.
pub fn status_badge(tone: StatusTone) -> (String, Color32) {
    let label = match tone {
        StatusTone::Idle => "Ожидание",
        StatusTone::Info => "Готово к отправке",
        StatusTone::Busy => "Загрузка",
        StatusTone::Success => "Успех",
        StatusTone::Error => "Ошибка",
    };
    (label.into(), tone_color(tone))
}

pub fn tone_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.bg_tertiary,
        StatusTone::Info => palette.accent_ice,
        StatusTone::Busy => palette.busy,
        StatusTone::Success => palette.success,
        StatusTone::Error => palette.accent,
    }
}

pub fn impact_color(impact: Impact) -> Color32 {
    let palette = palette();
    match impact {
        Impact::VeryHigh => palette.accent,
        Impact::High => palette.warning,
        Impact::Medium => palette.busy,
    }
}

/// Bordered card used by every panel.
pub fn card_frame() -> Frame {
    let palette = palette();
    Frame::new()
        .fill(palette.bg_primary)
        .stroke(Stroke::new(1.0, palette.panel_outline))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(14))
}

/// Small filled tag next to panel titles.
pub fn tag_frame(color: Color32) -> Frame {
    Frame::new()
        .fill(color.gamma_multiply(0.18))
        .stroke(Stroke::new(1.0, color.gamma_multiply(0.6)))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 2))
}

pub fn drop_zone_stroke(hovered: bool) -> Stroke {
    let palette = palette();
    if hovered {
        Stroke::new(2.0, palette.accent)
    } else {
        Stroke::new(1.0, palette.panel_outline)
    }
}
