//! UI-only state shared between the controller and the renderer.

use egui::Color32;

use crate::egui_app::ui::style::{self, StatusTone};
use crate::prediction::HealthStatus;

const STATUS_LOG_LIMIT: usize = 50;

/// Top-level UI state.
#[derive(Clone, Debug)]
pub struct UiState {
    pub view: AppView,
    pub status: StatusBarState,
    pub upload: UploadPanelState,
    pub advisory: AdvisoryPanelState,
    pub health: HealthBadgeState,
}

impl UiState {
    pub fn new(show_advisory: bool) -> Self {
        Self {
            view: AppView::Home,
            status: StatusBarState::idle(),
            upload: UploadPanelState::default(),
            advisory: AdvisoryPanelState {
                visible: show_advisory,
                ..AdvisoryPanelState::default()
            },
            health: HealthBadgeState::default(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Screen shown in the central panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppView {
    #[default]
    Home,
    Upload,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
    pub tone: StatusTone,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    pub fn idle() -> Self {
        let (badge_label, badge_color) = style::status_badge(StatusTone::Idle);
        Self {
            text: "Файл не выбран".into(),
            badge_label,
            badge_color,
            tone: StatusTone::Idle,
            log: Vec::new(),
        }
    }

    /// Record a new status line and keep the log bounded.
    pub fn push(&mut self, text: String, tone: StatusTone) {
        let (badge_label, badge_color) = style::status_badge(tone);
        self.note(&text);
        self.text = text;
        self.badge_label = badge_label;
        self.badge_color = badge_color;
        self.tone = tone;
    }

    /// Append to the log only; the footer text and badge stay as they are.
    pub fn note(&mut self, text: &str) {
        if self.log.last().map(String::as_str) == Some(text) {
            return;
        }
        self.log.push(text.to_string());
        if self.log.len() > STATUS_LOG_LIMIT {
            let overflow = self.log.len() - STATUS_LOG_LIMIT;
            self.log.drain(..overflow);
        }
    }

    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

/// Drop zone and local validation feedback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadPanelState {
    /// Files are being dragged over the window.
    pub drop_hovered: bool,
    /// CSV validation message; independent of the upload status.
    pub local_error: Option<String>,
}

/// Collapsible advisory panels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvisoryPanelState {
    pub visible: bool,
    pub features_open: bool,
    pub products_open: bool,
}

/// Server reachability badge in the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthBadgeState {
    pub last: Option<HealthStatus>,
    pub checking: bool,
}

impl HealthBadgeState {
    pub fn label(&self) -> String {
        if self.checking {
            return "Проверяем сервер…".to_string();
        }
        match &self.last {
            Some(status) => status.label(),
            None => "Сервер не проверен".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_log_skips_repeats_and_stays_bounded() {
        let mut status = StatusBarState::idle();
        status.push("a".into(), StatusTone::Info);
        status.push("a".into(), StatusTone::Info);
        assert_eq!(status.log, ["a"]);
        for i in 0..(STATUS_LOG_LIMIT + 10) {
            status.push(format!("line {i}"), StatusTone::Busy);
        }
        assert_eq!(status.log.len(), STATUS_LOG_LIMIT);
        assert_eq!(status.text, format!("line {}", STATUS_LOG_LIMIT + 9));
        assert_eq!(status.tone, StatusTone::Busy);
    }

    #[test]
    fn note_logs_without_changing_badge() {
        let mut status = StatusBarState::idle();
        status.push("Успех".into(), StatusTone::Success);
        status.note("История очищена");
        status.note("История очищена");
        assert_eq!(status.log, ["Успех", "История очищена"]);
        assert_eq!(status.text, "Успех");
        assert_eq!(status.tone, StatusTone::Success);
    }

    #[test]
    fn health_label_prefers_checking() {
        let mut badge = HealthBadgeState::default();
        assert_eq!(badge.label(), "Сервер не проверен");
        badge.last = Some(HealthStatus::Ready);
        badge.checking = true;
        assert_eq!(badge.label(), "Проверяем сервер…");
        badge.checking = false;
        assert_eq!(badge.label(), "Сервер доступен");
    }
}
