//! Calls to the remote prediction service.
//!
//! Everything here is blocking and meant to run off the UI thread.

use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::config::ApiSettings;
use crate::http_client::read_response_bytes;

use super::file_select::{FileSelectError, SelectedFile};
use super::wire::{ErrorPayload, HealthPayload, PredictionResult, PredictionResultWire};

/// Multipart field carrying the dataset.
pub const FILE_FIELD: &str = "file";
/// Shown when a failed response carries no reason of its own.
pub const UPLOAD_FAILED_MESSAGE: &str = "Не удалось загрузить файл";
const UNEXPECTED_PREFIX: &str = "Непредвиденная ошибка";
pub(crate) const TIMEOUT_MESSAGE: &str = "Сервер не ответил вовремя";
const MALFORMED_MESSAGE: &str = "Некорректный ответ сервера";

/// Reasons a prediction request did not produce a result.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Server returned HTTP {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] std::io::Error),
    #[error("Malformed response payload: {0}")]
    MalformedPayload(String),
    #[error(transparent)]
    ReadFile(#[from] FileSelectError),
    #[error("Failed to prepare request: {0}")]
    ClientSetup(#[source] reqwest::Error),
}

impl PredictError {
    fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }

    /// Text for the status line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { message, .. } => message
                .clone()
                .unwrap_or_else(|| UPLOAD_FAILED_MESSAGE.to_string()),
            Self::Timeout(_) => TIMEOUT_MESSAGE.to_string(),
            Self::Transport(err) => format!("{UNEXPECTED_PREFIX}: {err}"),
            Self::ReadBody(err) => format!("{UNEXPECTED_PREFIX}: {err}"),
            Self::MalformedPayload(_) => MALFORMED_MESSAGE.to_string(),
            Self::ReadFile(err) => err.to_string(),
            Self::ClientSetup(err) => format!("{UNEXPECTED_PREFIX}: {err}"),
        }
    }
}

/// Result of the health probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    /// Service answered and reports its model loaded.
    Ready,
    /// Service answered but the model is not loaded.
    ModelMissing,
    /// Service answered with something other than a healthy status.
    Degraded(String),
    /// Service could not be reached.
    Unreachable(String),
}

impl HealthStatus {
    pub fn label(&self) -> String {
        match self {
            Self::Ready => "Сервер доступен".to_string(),
            Self::ModelMissing => "Сервер доступен, модель не загружена".to_string(),
            Self::Degraded(status) => format!("Сервер отвечает: {status}"),
            Self::Unreachable(_) => "Сервер недоступен".to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Upload `file` as one multipart POST and interpret the response.
pub fn submit_file(
    client: &Client,
    settings: &ApiSettings,
    file: &SelectedFile,
) -> Result<PredictionResult, PredictError> {
    let bytes = file.read_bytes()?;
    let part = Part::bytes(bytes)
        .file_name(file.name().to_string())
        .mime_str(file.mime())
        .map_err(PredictError::ClientSetup)?;
    let form = Form::new().part(FILE_FIELD, part);
    let url = settings.predict_url();
    tracing::debug!("POST {url} ({} bytes)", file.size());
    let response = client
        .post(&url)
        .multipart(form)
        .send()
        .map_err(PredictError::from_send)?;
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = read_response_bytes(response, settings.max_response_bytes)
        .map_err(PredictError::ReadBody)?;
    interpret_response(status, content_type.as_deref(), &body, file.name())
}

/// Turn a raw response into a result or an error.
///
/// Bodies are only parsed when the content type says JSON; any other body is
/// treated as absent.
pub fn interpret_response(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
    uploaded_name: &str,
) -> Result<PredictionResult, PredictError> {
    let payload = if is_json(content_type) {
        serde_json::from_slice::<serde_json::Value>(body).ok()
    } else {
        None
    };
    if !(200..300).contains(&status) {
        let message = payload
            .and_then(|value| serde_json::from_value::<ErrorPayload>(value).ok())
            .and_then(|payload| payload.reason());
        return Err(PredictError::Server { status, message });
    }
    let Some(payload) = payload else {
        return Err(PredictError::MalformedPayload(
            "success response without a JSON body".to_string(),
        ));
    };
    let wire: PredictionResultWire = serde_json::from_value(payload)
        .map_err(|err| PredictError::MalformedPayload(err.to_string()))?;
    Ok(wire.into_result(uploaded_name))
}

/// Probe `GET /health`. Never fails; unreachable servers map to
/// [`HealthStatus::Unreachable`].
pub fn check_health(client: &Client, settings: &ApiSettings) -> HealthStatus {
    let response = match client.get(settings.health_url()).send() {
        Ok(response) => response,
        Err(err) => return HealthStatus::Unreachable(err.to_string()),
    };
    let status = response.status();
    let body = match read_response_bytes(response, settings.max_response_bytes) {
        Ok(body) => body,
        Err(err) => return HealthStatus::Unreachable(err.to_string()),
    };
    if !status.is_success() {
        return HealthStatus::Degraded(format!("HTTP {}", status.as_u16()));
    }
    match serde_json::from_slice::<HealthPayload>(&body) {
        Ok(payload) if payload.status.eq_ignore_ascii_case("healthy") => {
            if payload.model_loaded {
                HealthStatus::Ready
            } else {
                HealthStatus::ModelMissing
            }
        }
        Ok(payload) => HealthStatus::Degraded(payload.status),
        Err(err) => HealthStatus::Degraded(err.to_string()),
    }
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::http_client::build_client;
    use crate::http_client::test_server::{json_response, serve_once};
    use crate::prediction::file_select::{FileCandidate, validate};

    const SUCCESS_BODY: &str = r#"{"request_id":"r1","file_name":"data.csv","n_rows":3,"target":[10,20,30],"summary":{"target_mean":20,"target_median":20,"target_min":10,"target_max":30}}"#;

    fn api_settings(base_url: &str) -> ApiSettings {
        ApiSettings {
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
            ..ApiSettings::default()
        }
    }

    fn data_csv() -> SelectedFile {
        validate(FileCandidate::from_bytes(
            "data.csv",
            "text/csv",
            Arc::from(&b"id;income\n1;100\n"[..]),
        ))
        .unwrap()
    }

    #[test]
    fn uploads_file_field_and_parses_success() {
        let (url, rx) = serve_once(json_response("200 OK", SUCCESS_BODY));
        let settings = api_settings(&url);
        let client = build_client(&settings).unwrap();

        let result = submit_file(&client, &settings, &data_csv()).unwrap();

        assert_eq!(result.request_id, "r1");
        assert_eq!(result.row_count, 3);
        assert_eq!(result.target_values, vec![10.0, 20.0, 30.0]);
        assert_eq!(result.summary.mean, 20.0);

        let request = String::from_utf8_lossy(&rx.recv_timeout(Duration::from_secs(5)).unwrap())
            .into_owned();
        assert!(request.starts_with("POST /api/v1/income/predict-file "));
        assert!(request.contains("multipart/form-data"));
        assert!(request.contains(r#"name="file""#));
        assert!(request.contains(r#"filename="data.csv""#));
        assert!(request.contains("id;income\n1;100\n"));
    }

    #[test]
    fn server_message_is_used_verbatim() {
        let (url, _rx) = serve_once(json_response(
            "500 Internal Server Error",
            r#"{"message":"bad file"}"#,
        ));
        let settings = api_settings(&url);
        let client = build_client(&settings).unwrap();

        let err = submit_file(&client, &settings, &data_csv()).unwrap_err();

        assert!(matches!(err, PredictError::Server { status: 500, .. }));
        assert_eq!(err.user_message(), "bad file");
    }

    #[test]
    fn non_json_failure_falls_back_to_generic_message() {
        let err = interpret_response(500, Some("text/html"), b"<h1>oops</h1>", "data.csv")
            .unwrap_err();
        assert_eq!(err.user_message(), UPLOAD_FAILED_MESSAGE);

        let err = interpret_response(502, Some("application/json"), b"not json", "data.csv")
            .unwrap_err();
        assert_eq!(err.user_message(), UPLOAD_FAILED_MESSAGE);
    }

    #[test]
    fn fastapi_detail_is_used_when_message_missing() {
        let err = interpret_response(
            400,
            Some("application/json"),
            r#"{"detail":"Формат файла должен быть CSV"}"#.as_bytes(),
            "data.csv",
        )
        .unwrap_err();
        assert_eq!(err.user_message(), "Формат файла должен быть CSV");
    }

    #[test]
    fn success_without_json_is_malformed() {
        let err = interpret_response(200, Some("text/plain"), b"ok", "data.csv").unwrap_err();
        assert!(matches!(err, PredictError::MalformedPayload(_)));
        assert_eq!(err.user_message(), MALFORMED_MESSAGE);

        let err = interpret_response(
            200,
            Some("application/json; charset=utf-8"),
            br#"{"target":"nope"}"#,
            "data.csv",
        )
        .unwrap_err();
        assert!(matches!(err, PredictError::MalformedPayload(_)));
    }

    #[test]
    fn content_type_check_is_case_insensitive() {
        let result =
            interpret_response(200, Some("Application/JSON"), SUCCESS_BODY.as_bytes(), "x.csv")
                .unwrap();
        assert_eq!(result.file_name, "data.csv");
    }

    #[test]
    fn connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let settings = api_settings(&format!("http://{addr}"));
        let client = build_client(&settings).unwrap();

        let err = submit_file(&client, &settings, &data_csv()).unwrap_err();

        assert!(matches!(err, PredictError::Transport(_)));
        assert!(err.user_message().starts_with("Непредвиденная ошибка: "));
    }

    #[test]
    fn health_probe_reports_model_state() {
        let (url, rx) = serve_once(json_response(
            "200 OK",
            r#"{"status":"healthy","model_loaded":true}"#,
        ));
        let settings = api_settings(&url);
        let client = build_client(&settings).unwrap();
        assert_eq!(check_health(&client, &settings), HealthStatus::Ready);
        let request = String::from_utf8_lossy(&rx.recv_timeout(Duration::from_secs(5)).unwrap())
            .into_owned();
        assert!(request.starts_with("GET /health "));

        let (url, _rx) = serve_once(json_response(
            "200 OK",
            r#"{"status":"healthy","model_loaded":false}"#,
        ));
        let settings = api_settings(&url);
        assert_eq!(check_health(&client, &settings), HealthStatus::ModelMissing);
    }

    #[test]
    fn health_probe_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let settings = api_settings(&format!("http://{addr}"));
        let client = build_client(&settings).unwrap();
        let status = check_health(&client, &settings);
        assert!(matches!(status, HealthStatus::Unreachable(_)));
        assert_eq!(status.label(), "Сервер недоступен");
    }
}
