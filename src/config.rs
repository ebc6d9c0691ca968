//! Build-time Configuration
//!
//! Values are baked in when the wasm bundle is compiled:
//! - `TASKBOARD_API_BASE_URL`: backend root (default `http://localhost:5000/api`)
//! - `TASKBOARD_PAGE_SIZE`: rows per list page (default 10)
//! - `TASKBOARD_DASHBOARD_ROWS`: rows per dashboard section (default 5)
//! - `TASKBOARD_LOOKUP_PAGE_SIZE`: projects offered in the task form (default 100)
//! - `TASKBOARD_RECAPTCHA_SITE_KEY`: reCAPTCHA site key for the register form
//! - `TASKBOARD_LOG_LEVEL`: `error` | `warn` | `info` | `debug` | `trace`

use std::str::FromStr;

use log::LevelFilter;
use taskboard_client::ClientConfig;

/// Parse an optional build variable, warning about values that don't parse.
fn parsed<T: FromStr>(name: &str, value: Option<&str>) -> Option<T> {
    let raw = value?;
    match raw.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a number", name, raw);
            None
        }
    }
}

pub fn client_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(url) = option_env!("TASKBOARD_API_BASE_URL") {
        config = config.with_base_url(url);
    }
    if let Some(size) = parsed("TASKBOARD_PAGE_SIZE", option_env!("TASKBOARD_PAGE_SIZE")) {
        config = config.with_page_size(size);
    }
    if let Some(rows) = parsed("TASKBOARD_DASHBOARD_ROWS", option_env!("TASKBOARD_DASHBOARD_ROWS")) {
        config = config.with_dashboard_rows(rows);
    }
    if let Some(size) = parsed("TASKBOARD_LOOKUP_PAGE_SIZE", option_env!("TASKBOARD_LOOKUP_PAGE_SIZE")) {
        config = config.with_lookup_page_size(size);
    }

    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            log::error!("Invalid client configuration ({}); using defaults", err);
            ClientConfig::default()
        }
    }
}

pub fn recaptcha_site_key() -> &'static str {
    option_env!("TASKBOARD_RECAPTCHA_SITE_KEY").unwrap_or("")
}

pub fn log_level() -> LevelFilter {
    option_env!("TASKBOARD_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
