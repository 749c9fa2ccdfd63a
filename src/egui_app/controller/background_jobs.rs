use super::jobs::JobMessage;
use super::*;

impl EguiController {
    pub(super) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };
            match message {
                JobMessage::UploadFinished(message) => self.handle_upload_finished(message),
                JobMessage::HealthChecked(status) => self.handle_health_checked(status),
            }
        }
    }
}
