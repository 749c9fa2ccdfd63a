use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::config::ApiSettings;
use crate::http_client::build_client;
use crate::prediction::api::{self, PredictError};
use crate::prediction::{HealthStatus, PredictionResult, SelectedFile, UploadTicket};

pub(crate) enum JobMessage {
    UploadFinished(UploadJobResult),
    HealthChecked(HealthStatus),
}

#[derive(Debug)]
pub(crate) struct UploadJob {
    pub(super) ticket: UploadTicket,
    pub(super) file: SelectedFile,
    pub(super) settings: ApiSettings,
}

#[derive(Debug)]
pub(crate) struct UploadJobResult {
    pub(crate) ticket: UploadTicket,
    pub(crate) file_name: String,
    pub(crate) result: Result<PredictionResult, PredictError>,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    upload_pending: Option<UploadTicket>,
    /// Cancelled upload whose thread has not reported back yet.
    upload_abandoned: Option<UploadTicket>,
    health_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            upload_pending: None,
            upload_abandoned: None,
            health_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn upload_abandoned(&self) -> Option<UploadTicket> {
        self.upload_abandoned
    }

    /// True while any upload thread, current or abandoned, is still running.
    pub(super) fn upload_busy(&self) -> bool {
        self.upload_pending.is_some() || self.upload_abandoned.is_some()
    }

    pub(super) fn begin_upload(&mut self, job: UploadJob) {
        self.upload_pending = Some(job.ticket);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = build_client(&job.settings)
                .map_err(PredictError::ClientSetup)
                .and_then(|client| api::submit_file(&client, &job.settings, &job.file));
            let _ = tx.send(JobMessage::UploadFinished(UploadJobResult {
                ticket: job.ticket,
                file_name: job.file.name().to_string(),
                result,
            }));
        });
    }

    /// Detach the in-flight upload. Its message is dropped when it arrives,
    /// and no new upload starts until then.
    pub(super) fn abandon_upload(&mut self) {
        if let Some(ticket) = self.upload_pending.take() {
            self.upload_abandoned = Some(ticket);
        }
    }

    /// Clear the marker held for `ticket`. Returns true only for the
    /// current upload.
    pub(super) fn finish_upload(&mut self, ticket: UploadTicket) -> bool {
        if self.upload_pending == Some(ticket) {
            self.upload_pending = None;
            return true;
        }
        if self.upload_abandoned == Some(ticket) {
            self.upload_abandoned = None;
        }
        false
    }

    pub(super) fn health_in_progress(&self) -> bool {
        self.health_in_progress
    }

    pub(super) fn begin_health_check(&mut self, settings: ApiSettings) {
        if self.health_in_progress {
            return;
        }
        self.health_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let status = match build_client(&settings) {
                Ok(client) => api::check_health(&client, &settings),
                Err(err) => HealthStatus::Unreachable(err.to_string()),
            };
            let _ = tx.send(JobMessage::HealthChecked(status));
        });
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_in_progress = false;
    }
}
