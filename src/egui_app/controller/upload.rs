use std::path::PathBuf;

use rfd::FileDialog;

use super::jobs::{UploadJob, UploadJobResult};
use super::*;
use crate::prediction::FileCandidate;

impl EguiController {
    /// Offer a file to the selector. Rejected files only set the local error;
    /// the upload status stays as it was.
    pub fn select_candidate(&mut self, candidate: FileCandidate) -> bool {
        if self.session.is_uploading() {
            tracing::debug!("Ignoring selection of {} while uploading", candidate.name);
            return false;
        }
        let accepted = match self.selector.offer(candidate) {
            Some(file) => {
                tracing::info!("Selected {} ({} bytes)", file.name(), file.size());
                self.session.select(Some(file));
                self.refresh_status();
                true
            }
            None => false,
        };
        self.sync_local_error();
        accepted
    }

    /// Select a file from disk.
    pub fn select_path(&mut self, path: PathBuf) -> bool {
        if self.session.is_uploading() {
            return false;
        }
        match FileCandidate::from_path(path) {
            Ok(candidate) => self.select_candidate(candidate),
            Err(err) => {
                tracing::warn!("Cannot select file: {err}");
                self.selector.reject(&err);
                self.sync_local_error();
                false
            }
        }
    }

    /// Pick a CSV via the native file dialog.
    pub fn choose_file_via_dialog(&mut self) {
        if self.session.is_uploading() {
            return;
        }
        let Some(path) = FileDialog::new()
            .set_title("Выберите CSV-файл")
            .add_filter("CSV", &["csv"])
            .pick_file()
        else {
            return;
        };
        self.select_path(path);
    }

    /// Take the first file dropped onto the window.
    pub fn handle_dropped_files(&mut self, files: Vec<egui::DroppedFile>) {
        if files.len() > 1 {
            tracing::info!("{} files dropped; using the first", files.len());
        }
        let Some(file) = files.into_iter().next() else {
            return;
        };
        if let Some(path) = file.path {
            self.select_path(path);
        } else if let Some(bytes) = file.bytes {
            self.select_candidate(FileCandidate::from_bytes(file.name, file.mime, bytes));
        } else {
            tracing::warn!("Dropped file {} carried neither path nor bytes", file.name);
        }
    }

    /// Drop the selected file and return to idle.
    pub fn clear_selection(&mut self) {
        if self.session.select(None) {
            self.selector.clear_error();
            self.sync_local_error();
            self.refresh_status();
        }
    }

    /// True when a file is selected and no upload thread is still running.
    pub fn can_submit(&self) -> bool {
        self.session.can_submit() && !self.jobs.upload_busy()
    }

    /// Send the selected file. A no-op unless a file is selected and no
    /// earlier request, cancelled or not, is still open.
    pub fn submit_upload(&mut self) {
        if let Some(abandoned) = self.jobs.upload_abandoned() {
            tracing::debug!(
                "Submit deferred until cancelled upload {} finishes",
                abandoned.id()
            );
            return;
        }
        let Some((ticket, file)) = self.session.submit() else {
            tracing::debug!("Submit ignored in state {:?}", self.session.status());
            return;
        };
        tracing::info!(
            "Uploading {} to {} (ticket {})",
            file.name(),
            self.config.api.predict_url(),
            ticket.id()
        );
        self.jobs.begin_upload(UploadJob {
            ticket,
            file,
            settings: self.config.api.clone(),
        });
        self.refresh_status();
    }

    /// Abandon the in-flight upload and go back to the selected file.
    pub fn cancel_upload(&mut self) {
        let Some(ticket) = self.session.in_flight() else {
            return;
        };
        if self.session.cancel() {
            tracing::info!("Upload cancelled (ticket {})", ticket.id());
            self.jobs.abandon_upload();
            self.refresh_status();
        }
    }

    pub(super) fn handle_upload_finished(&mut self, message: UploadJobResult) {
        let UploadJobResult {
            ticket,
            file_name,
            result,
        } = message;
        if !self.jobs.finish_upload(ticket) {
            tracing::debug!("Dropping response for abandoned upload {}", ticket.id());
            return;
        }
        match result {
            Ok(result) => {
                tracing::info!(
                    "Prediction for {file_name} finished: {} rows (request {})",
                    result.row_count,
                    result.request_id
                );
                if self.session.response_ok(ticket, result.clone()) {
                    self.history.append(result);
                }
            }
            Err(err) => {
                tracing::warn!("Prediction for {file_name} failed: {err}");
                self.session.response_failed(ticket, err.user_message());
            }
        }
        self.refresh_status();
    }
}
