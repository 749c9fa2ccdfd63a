use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults::{
    MAX_PREVIEW_VALUES, clamp_timeout, default_base_url, default_connect_timeout_secs,
    default_max_response_bytes, default_preview_values, default_request_timeout_secs,
    default_true,
};

/// Path of the prediction endpoint relative to the service base URL.
pub const PREDICT_PATH: &str = "/api/v1/income/predict-file";
/// Path of the service health probe.
pub const HEALTH_PATH: &str = "/health";

/// Application settings stored in `config.toml`.
///
/// Config keys (TOML): `[api] base_url`, `request_timeout_secs`,
/// `connect_timeout_secs`, `max_response_bytes`; `[ui] preview_values`,
/// `show_advisory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppConfig {
    /// Clamp out-of-range values and tidy the base URL.
    pub fn normalized(self) -> Self {
        Self {
            api: self.api.normalized(),
            ui: self.ui.normalized(),
        }
    }

    /// Replace the base URL when the override is non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = url;
        }
        self.normalized()
    }
}

/// Connection settings for the remote prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Service root, e.g. `http://localhost:8000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound on a whole upload round trip.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Largest response body the client will buffer.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

impl ApiSettings {
    fn normalized(self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            default_base_url()
        } else {
            trimmed.to_string()
        };
        Self {
            base_url,
            request_timeout_secs: clamp_timeout(self.request_timeout_secs),
            connect_timeout_secs: clamp_timeout(self.connect_timeout_secs),
            max_response_bytes: self.max_response_bytes.max(1024),
        }
    }

    /// Full URL of the file prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}{PREDICT_PATH}", self.base_url)
    }

    /// Full URL of the health probe.
    pub fn health_url(&self) -> String {
        format!("{}{HEALTH_PATH}", self.base_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Presentation preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// How many leading target values the result panel lists.
    #[serde(default = "default_preview_values")]
    pub preview_values: usize,
    /// Whether the advisory panels are shown beside the results.
    #[serde(default = "default_true")]
    pub show_advisory: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            preview_values: default_preview_values(),
            show_advisory: true,
        }
    }
}

impl UiSettings {
    fn normalized(self) -> Self {
        Self {
            preview_values: self.preview_values.min(MAX_PREVIEW_VALUES),
            ..self
        }
    }
}
