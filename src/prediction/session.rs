//! Upload status state machine.
//!
//! `UploadSession` is the single owner of the selected file, the current
//! result and the current error. Every mutation goes through one of the event
//! methods below; each returns whether the state changed.

use crate::format::{format_bytes, format_count};

use super::file_select::SelectedFile;
use super::wire::PredictionResult;

/// Fallback text when an error carries no message.
pub const ERROR_FALLBACK: &str = "что-то пошло не так";

/// Observable state of the upload flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    Idle,
    FileSelected,
    Uploading,
    Success,
    Error,
}

/// Visual tone of the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Busy,
    Success,
    Error,
}

/// Identifies one submission so late responses can be matched or dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    FileSelected,
    Uploading(UploadTicket),
    Success(PredictionResult),
    Error(String),
}

/// Page-level upload state.
#[derive(Clone, Debug)]
pub struct UploadSession {
    selected: Option<SelectedFile>,
    phase: Phase,
    next_ticket: u64,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            selected: None,
            phase: Phase::Idle,
            next_ticket: 1,
        }
    }

    pub fn status(&self) -> UploadStatus {
        match self.phase {
            Phase::Idle => UploadStatus::Idle,
            Phase::FileSelected => UploadStatus::FileSelected,
            Phase::Uploading(_) => UploadStatus::Uploading,
            Phase::Success(_) => UploadStatus::Success,
            Phase::Error(_) => UploadStatus::Error,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.phase {
            Phase::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Ticket of the in-flight upload, if any.
    pub fn in_flight(&self) -> Option<UploadTicket> {
        match self.phase {
            Phase::Uploading(ticket) => Some(ticket),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight().is_some()
    }

    /// True when `submit` would start an upload.
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, Phase::FileSelected) && self.selected.is_some()
    }

    /// Replace the selected file. `Some` moves to `FileSelected`, `None` resets
    /// to `Idle`; either way the previous result and error are dropped.
    /// Ignored while an upload is in flight.
    pub fn select(&mut self, file: Option<SelectedFile>) -> bool {
        if self.is_uploading() {
            return false;
        }
        self.phase = if file.is_some() {
            Phase::FileSelected
        } else {
            Phase::Idle
        };
        self.selected = file;
        true
    }

    /// Start an upload of the selected file. A no-op outside `FileSelected`.
    pub fn submit(&mut self) -> Option<(UploadTicket, SelectedFile)> {
        if !self.can_submit() {
            return None;
        }
        let file = self.selected.clone()?;
        let ticket = UploadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = Phase::Uploading(ticket);
        Some((ticket, file))
    }

    /// Complete the upload identified by `ticket`. Stale tickets are ignored.
    pub fn response_ok(&mut self, ticket: UploadTicket, result: PredictionResult) -> bool {
        if self.in_flight() != Some(ticket) {
            return false;
        }
        self.phase = Phase::Success(result);
        true
    }

    /// Fail the upload identified by `ticket`. Stale tickets are ignored.
    pub fn response_failed(&mut self, ticket: UploadTicket, message: impl Into<String>) -> bool {
        if self.in_flight() != Some(ticket) {
            return false;
        }
        self.phase = Phase::Error(message.into());
        true
    }

    /// Abandon the in-flight upload and return to `FileSelected`.
    pub fn cancel(&mut self) -> bool {
        if !self.is_uploading() {
            return false;
        }
        self.phase = Phase::FileSelected;
        true
    }

    pub fn label(&self) -> String {
        status_label(
            self.status(),
            self.selected.as_ref(),
            self.result(),
            self.error_message(),
        )
    }

    pub fn tone(&self) -> StatusTone {
        status_tone(self.status())
    }
}

/// Status line text for the given state.
pub fn status_label(
    status: UploadStatus,
    selected: Option<&SelectedFile>,
    result: Option<&PredictionResult>,
    error: Option<&str>,
) -> String {
    match status {
        UploadStatus::Idle => "Файл не выбран".to_string(),
        UploadStatus::FileSelected => match selected {
            Some(file) => format!(
                "Файл выбран: {}, {}",
                file.name(),
                format_bytes(file.size())
            ),
            None => "Файл выбран".to_string(),
        },
        UploadStatus::Uploading => "Отправляем файл в ML-модель…".to_string(),
        UploadStatus::Success => match result {
            Some(result) => format!(
                "Успех: получено {} предсказаний",
                format_count(result.row_count)
            ),
            None => "Успех".to_string(),
        },
        UploadStatus::Error => {
            let message = error
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .unwrap_or(ERROR_FALLBACK);
            format!("Ошибка: {message}")
        }
    }
}

pub fn status_tone(status: UploadStatus) -> StatusTone {
    match status {
        UploadStatus::Idle => StatusTone::Idle,
        UploadStatus::FileSelected => StatusTone::Info,
        UploadStatus::Uploading => StatusTone::Busy,
        UploadStatus::Success => StatusTone::Success,
        UploadStatus::Error => StatusTone::Error,
    }
}
