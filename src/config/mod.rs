//! Persisted application settings (`config.toml` under the app root).

mod defaults;
mod errors;
mod io;
mod types;


pub use errors::ConfigError;
pub use io::{config_path, load_from_path, load_or_default, save, save_to_path};
pub use types::{ApiSettings, AppConfig, UiSettings};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides the prediction service base URL.
pub const API_URL_ENV: &str = "INCOME_LENS_API_URL";
