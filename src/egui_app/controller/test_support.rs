use std::sync::Arc;
use std::time::{Duration, Instant};

use super::*;
use crate::config::ApiSettings;
use crate::prediction::FileCandidate;

pub(super) const SUCCESS_BODY: &str = r#"{"request_id":"r1","file_name":"data.csv","n_rows":3,"target":[10,20,30],"summary":{"target_mean":20,"target_median":20,"target_min":10,"target_max":30}}"#;

pub(super) fn controller_for(base_url: &str) -> EguiController {
    controller_with_timeout(base_url, 5)
}

pub(super) fn controller_with_timeout(base_url: &str, request_timeout_secs: u64) -> EguiController {
    EguiController::new(AppConfig {
        api: ApiSettings {
            base_url: base_url.to_string(),
            request_timeout_secs,
            ..ApiSettings::default()
        },
        ..AppConfig::default()
    })
}

pub(super) fn csv_candidate(name: &str) -> FileCandidate {
    FileCandidate::from_bytes(name, "text/csv", Arc::from(&b"id;income\n1;100\n"[..]))
}

/// Tick until no job is pending or the deadline passes.
pub(super) fn wait_for_jobs(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        controller.tick();
        if !controller.has_pending_jobs() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("background jobs did not finish in time");
}
