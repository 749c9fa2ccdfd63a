mod support;

use support::fake_service::{FakeService, PREDICTION_BODY, closed_port_url};
use support::income_lens_env::IncomeLensEnvGuard;

use income_lens::config::{self, ApiSettings, AppConfig};
use income_lens::egui_app::controller::EguiController;
use income_lens::prediction::{FileCandidate, UploadStatus};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

struct ControllerHarness {
    _config: IncomeLensEnvGuard,
    temp: TempDir,
    pub controller: EguiController,
}

impl ControllerHarness {
    fn new(base_url: &str) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let env = IncomeLensEnvGuard::set_config_home(temp.path().join("config"));
        let controller = EguiController::new(AppConfig {
            api: ApiSettings {
                base_url: base_url.to_string(),
                request_timeout_secs: 5,
                ..ApiSettings::default()
            },
            ..AppConfig::default()
        });
        Self {
            _config: env,
            temp,
            controller,
        }
    }

    fn write_csv(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, contents).expect("write csv");
        path
    }

    fn wait_for_jobs(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            self.controller.tick();
            if !self.controller.has_pending_jobs() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("upload did not settle");
    }
}

#[test]
fn csv_upload_success_lands_in_history() {
    let service = FakeService::json("200 OK", PREDICTION_BODY);
    let mut harness = ControllerHarness::new(&service.base_url);
    let path = harness.write_csv("data.csv", "id;income\n1;100\n");

    assert!(harness.controller.select_path(path));
    assert_eq!(harness.controller.status(), UploadStatus::FileSelected);

    harness.controller.submit_upload();
    assert_eq!(harness.controller.status(), UploadStatus::Uploading);
    harness.wait_for_jobs();

    assert_eq!(harness.controller.status(), UploadStatus::Success);
    let result = harness
        .controller
        .current_result()
        .cloned()
        .expect("result present");
    assert_eq!(result.request_id, "r1");
    assert_eq!(result.row_count, 3);
    assert_eq!(result.target_values, vec![10.0, 20.0, 30.0]);
    assert_eq!(harness.controller.history().entries(), [result]);

    let request = service.received();
    assert!(request.starts_with("POST /api/v1/income/predict-file "));
    assert!(request.contains(r#"name="file"; filename="data.csv""#));
}

#[test]
fn txt_file_is_rejected_without_state_change() {
    let mut harness = ControllerHarness::new(&closed_port_url());
    let path = harness.write_csv("data.txt", "id;income\n");

    assert!(!harness.controller.select_path(path));

    assert_eq!(harness.controller.status(), UploadStatus::Idle);
    assert_eq!(
        harness.controller.local_error(),
        Some("Поддерживаются только CSV-файлы")
    );
    assert!(harness.controller.history().is_empty());
}

#[test]
fn clearing_history_after_success_keeps_result() {
    let service = FakeService::json("200 OK", PREDICTION_BODY);
    let mut harness = ControllerHarness::new(&service.base_url);
    let path = harness.write_csv("data.csv", "id;income\n1;100\n");
    harness.controller.select_path(path);
    harness.controller.submit_upload();
    harness.wait_for_jobs();

    harness.controller.clear_history();

    assert!(harness.controller.history().is_empty());
    assert_eq!(harness.controller.status(), UploadStatus::Success);
    assert!(harness.controller.current_result().is_some());
}

#[test]
fn server_error_message_is_shown_verbatim() {
    let service = FakeService::json("500 Internal Server Error", r#"{"message":"bad file"}"#);
    let mut harness = ControllerHarness::new(&service.base_url);
    harness.controller.select_candidate(FileCandidate::from_bytes(
        "data.csv",
        "text/csv",
        Arc::from(&b"id;income\n"[..]),
    ));
    harness.controller.submit_upload();
    harness.wait_for_jobs();

    assert_eq!(harness.controller.status(), UploadStatus::Error);
    assert_eq!(harness.controller.session().error_message(), Some("bad file"));
    assert_eq!(harness.controller.session().label(), "Ошибка: bad file");
}

#[test]
fn non_json_failure_uses_generic_message() {
    let service = FakeService::text("502 Bad Gateway", "upstream down");
    let mut harness = ControllerHarness::new(&service.base_url);
    harness.controller.select_candidate(FileCandidate::from_bytes(
        "data.csv",
        "text/csv",
        Arc::from(&b"id;income\n"[..]),
    ));
    harness.controller.submit_upload();
    harness.wait_for_jobs();

    assert_eq!(
        harness.controller.session().error_message(),
        Some("Не удалось загрузить файл")
    );
}

#[test]
fn unreachable_service_ends_in_error_not_uploading() {
    let mut harness = ControllerHarness::new(&closed_port_url());
    harness.controller.select_candidate(FileCandidate::from_bytes(
        "data.csv",
        "text/csv",
        Arc::from(&b"id;income\n"[..]),
    ));
    harness.controller.submit_upload();
    harness.wait_for_jobs();

    assert_eq!(harness.controller.status(), UploadStatus::Error);
    let message = harness
        .controller
        .session()
        .error_message()
        .expect("error message");
    assert!(message.starts_with("Непредвиденная ошибка"));

    // A new selection recovers from the error.
    harness.controller.select_candidate(FileCandidate::from_bytes(
        "again.csv",
        "text/csv",
        Arc::from(&b"id\n"[..]),
    ));
    assert_eq!(harness.controller.status(), UploadStatus::FileSelected);
    assert!(harness.controller.session().error_message().is_none());
}

#[test]
fn env_url_overrides_config_file() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = IncomeLensEnvGuard::set(temp.path().to_path_buf(), Some("http://example.test:9000/"));
    let mut stored = AppConfig::default();
    stored.api.base_url = "http://stored.test".to_string();
    config::save(&stored).expect("save config");

    let loaded = config::load_or_default().expect("load config");

    assert_eq!(loaded.api.base_url, "http://example.test:9000");
    assert_eq!(
        loaded.api.predict_url(),
        "http://example.test:9000/api/v1/income/predict-file"
    );
    assert!(temp.path().join(".income-lens").join("config.toml").is_file());
}
