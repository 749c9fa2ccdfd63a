//! JSON shapes exchanged with the prediction service.
//!
//! The service answers in snake_case (`request_id`, `n_rows`, `target`,
//! `summary.target_mean`, ...). camelCase spellings are accepted as aliases.

use serde::{Deserialize, Serialize};

use super::stats;

/// Summary statistics of the predicted income target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionSummary {
    #[serde(rename = "target_mean", alias = "mean")]
    pub mean: f64,
    #[serde(rename = "target_median", alias = "median")]
    pub median: f64,
    #[serde(rename = "target_min", alias = "min")]
    pub min: f64,
    #[serde(rename = "target_max", alias = "max")]
    pub max: f64,
}

/// Outcome of one successful submission. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub request_id: String,
    pub file_name: String,
    pub row_count: u64,
    pub target_values: Vec<f64>,
    pub summary: PredictionSummary,
}

/// Loosely-typed success payload. Missing fields are tolerated and filled in
/// by [`PredictionResultWire::into_result`].
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct PredictionResultWire {
    #[serde(default, alias = "requestId")]
    request_id: Option<String>,
    #[serde(default, alias = "fileName")]
    file_name: Option<String>,
    #[serde(default, alias = "rowCount")]
    n_rows: Option<u64>,
    #[serde(default, alias = "targetValues")]
    target: Option<Vec<f64>>,
    #[serde(default)]
    summary: Option<PredictionSummary>,
}

impl PredictionResultWire {
    /// Build a result, falling back to the uploaded file name, the target
    /// length, and statistics computed from the targets when the service
    /// omits them.
    pub(crate) fn into_result(self, uploaded_name: &str) -> PredictionResult {
        let target_values = self.target.unwrap_or_default();
        let row_count = self.n_rows.unwrap_or(target_values.len() as u64);
        let summary = self
            .summary
            .or_else(|| stats::summarize(&target_values))
            .unwrap_or_default();
        PredictionResult {
            request_id: self.request_id.unwrap_or_default(),
            file_name: self
                .file_name
                .unwrap_or_else(|| uploaded_name.to_string()),
            row_count,
            target_values,
            summary,
        }
    }
}

/// Error payload; any of the fields may carry the human-readable reason.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorPayload {
    /// First non-empty reason, preferring `message`, then `error`, then a
    /// string `detail`.
    pub(crate) fn reason(&self) -> Option<String> {
        let detail = self.detail.as_ref().and_then(|value| value.as_str());
        [self.message.as_deref(), self.error.as_deref(), detail]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(str::to_string)
    }
}

/// Body of `GET /health`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct HealthPayload {
    #[serde(default)]
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) model_loaded: bool,
}
