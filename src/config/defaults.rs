pub(super) const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub(super) const MIN_TIMEOUT_SECS: u64 = 1;
pub(super) const MAX_TIMEOUT_SECS: u64 = 3_600;
pub(super) const MAX_PREVIEW_VALUES: usize = 50;

pub(super) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(super) fn default_request_timeout_secs() -> u64 {
    120
}

pub(super) fn default_connect_timeout_secs() -> u64 {
    10
}

pub(super) fn default_max_response_bytes() -> usize {
    32 * 1024 * 1024
}

pub(super) fn default_preview_values() -> usize {
    5
}

pub(super) fn default_true() -> bool {
    true
}

pub(super) fn clamp_timeout(secs: u64) -> u64 {
    secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
}
