use super::*;
use crate::prediction::HealthStatus;

impl EguiController {
    /// Probe the service in the background; the upload state is untouched.
    pub fn check_server_health(&mut self) {
        if self.jobs.health_in_progress() {
            return;
        }
        tracing::info!("Checking service health at {}", self.config.api.health_url());
        self.ui.health.checking = true;
        self.jobs.begin_health_check(self.config.api.clone());
    }

    pub(super) fn handle_health_checked(&mut self, status: HealthStatus) {
        self.jobs.clear_health_check();
        match &status {
            HealthStatus::Unreachable(reason) => {
                tracing::warn!("Service unreachable: {reason}");
            }
            other => tracing::info!("Service health: {other:?}"),
        }
        self.ui.health.checking = false;
        self.ui.health.last = Some(status);
    }
}
