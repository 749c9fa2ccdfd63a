//! Maintains page state and bridges prediction logic to the egui UI.

mod background_jobs;
mod health;
mod jobs;
mod upload;

#[cfg(test)]
mod test_support;

use crate::config::AppConfig;
use crate::egui_app::state::{AppView, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::prediction::{FileSelector, HistoryLog, PredictionResult, UploadSession, UploadStatus};

use jobs::ControllerJobs;

const HISTORY_CLEARED_NOTE: &str = "История очищена";

/// Owns the upload session, the history and background work.
///
/// The session and history are only mutated through the methods on this type,
/// all of which run on the UI thread.
pub struct EguiController {
    pub ui: UiState,
    config: AppConfig,
    session: UploadSession,
    history: HistoryLog,
    selector: FileSelector,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(config: AppConfig) -> Self {
        let ui = UiState::new(config.ui.show_advisory);
        Self {
            ui,
            config,
            session: UploadSession::new(),
            history: HistoryLog::new(),
            selector: FileSelector::default(),
            jobs: ControllerJobs::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    pub fn status(&self) -> UploadStatus {
        self.session.status()
    }

    pub fn current_result(&self) -> Option<&PredictionResult> {
        self.session.result()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// CSV validation message for the drop zone.
    pub fn local_error(&self) -> Option<&str> {
        self.selector.local_error()
    }

    /// True while a background job still owes the UI a message.
    pub fn has_pending_jobs(&self) -> bool {
        self.jobs.upload_busy() || self.jobs.health_in_progress()
    }

    pub fn show_home(&mut self) {
        self.ui.view = AppView::Home;
    }

    pub fn show_upload(&mut self) {
        self.ui.view = AppView::Upload;
    }

    pub fn toggle_features_panel(&mut self) {
        self.ui.advisory.features_open = !self.ui.advisory.features_open;
    }

    pub fn toggle_products_panel(&mut self) {
        self.ui.advisory.products_open = !self.ui.advisory.products_open;
    }

    /// Empty the history without touching the current result or the footer
    /// badge; the clear is only recorded in the status log.
    pub fn clear_history(&mut self) {
        let cleared = self.history.len();
        self.history.clear();
        tracing::info!("Cleared {cleared} history entries");
        self.ui.status.note(HISTORY_CLEARED_NOTE);
    }

    /// Open the folder holding the log files.
    pub fn open_logs_folder(&mut self) {
        let dir = match crate::app_dirs::logs_dir() {
            Ok(dir) => dir,
            Err(err) => {
                self.set_status(format!("Папка логов недоступна: {err}"), StatusTone::Error);
                return;
            }
        };
        if let Err(err) = open::that(&dir) {
            tracing::warn!("Failed to open {}: {err}", dir.display());
            self.set_status(
                format!("Не удалось открыть {}: {err}", dir.display()),
                StatusTone::Error,
            );
        }
    }

    /// Drain finished background jobs. Called once per frame.
    pub fn tick(&mut self) {
        self.poll_background_jobs();
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.push(text.into(), tone);
    }

    /// Mirror the session label into the footer.
    fn refresh_status(&mut self) {
        let text = self.session.label();
        let tone = self.session.tone();
        self.set_status(text, tone);
    }

    fn sync_local_error(&mut self) {
        self.ui.upload.local_error = self.selector.local_error().map(str::to_string);
    }
}
