//! Client Configuration

use thiserror::Error;

/// API base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Rows per page in the Projects and Tasks views.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Rows per section on the dashboard.
pub const DEFAULT_DASHBOARD_ROWS: usize = 5;

/// Page size used when a form needs "all" projects for a selector.
pub const DEFAULT_LOOKUP_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL `{0}` must start with http:// or https://")]
    InvalidBaseUrl(String),
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Configuration for the API client and the views built on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, without trailing slash (e.g. `https://host/api`).
    pub base_url: String,
    pub page_size: u32,
    pub dashboard_rows: usize,
    pub lookup_page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            dashboard_rows: DEFAULT_DASHBOARD_ROWS,
            lookup_page_size: DEFAULT_LOOKUP_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Trailing slashes are dropped so paths can be appended with `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_dashboard_rows(mut self, rows: usize) -> Self {
        self.dashboard_rows = rows;
        self
    }

    pub fn with_lookup_page_size(mut self, page_size: u32) -> Self {
        self.lookup_page_size = page_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Zero("page_size"));
        }
        if self.dashboard_rows == 0 {
            return Err(ConfigError::Zero("dashboard_rows"));
        }
        if self.lookup_page_size == 0 {
            return Err(ConfigError::Zero("lookup_page_size"));
        }
        Ok(())
    }
}
