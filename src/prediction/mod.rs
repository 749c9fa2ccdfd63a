//! Upload-and-predict flow: file selection, the status state machine, the
//! prediction service client, and the session history.

pub mod api;
pub mod file_select;
pub mod history;
pub mod session;
pub mod stats;
pub mod wire;

pub use api::{HealthStatus, PredictError};
pub use file_select::{FileCandidate, FileSelectError, FileSelector, SelectedFile};
pub use history::HistoryLog;
pub use session::{StatusTone, UploadSession, UploadStatus, UploadTicket};
pub use wire::{PredictionResult, PredictionSummary};
