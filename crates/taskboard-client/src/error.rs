//! API Error Types
//!
//! Every failed call ends up as an [`ApiError`]: an HTTP-status-derived
//! [`ErrorKind`] plus whatever message and field errors the server sent.

use serde::Deserialize;

/// Error value the backend puts in `error` when the JWT has expired.
pub const EXPIRY_MARKER: &str = "jwt expired";

/// Common result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// User-correctable input (400/422 or client-side validation)
    Validation,
    /// Resource already exists (409)
    Conflict,
    /// Server reported the expiry marker
    AuthExpired,
    /// Anonymous access, or a token the server rejected without the marker
    AuthRequired,
    /// 403/404
    NotFoundOrForbidden,
    /// Any other non-2xx
    Server,
    /// Transport-level failure
    Network,
    /// 2xx with a body that did not match the expected shape
    Decode,
    /// Not sent: another request from the same view is still in flight
    Busy,
}

impl ErrorKind {
    /// Map a non-2xx status to its category.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => ErrorKind::Validation,
            401 => ErrorKind::AuthRequired,
            403 | 404 => ErrorKind::NotFoundOrForbidden,
            409 => ErrorKind::Conflict,
            _ => ErrorKind::Server,
        }
    }

    /// Whether the failure means the stored credential is unusable.
    pub fn is_credential_failure(self) -> bool {
        matches!(self, ErrorKind::AuthExpired | ErrorKind::AuthRequired)
    }

    fn fallback_message(self) -> &'static str {
        match self {
            ErrorKind::Validation => "Please check the highlighted fields.",
            ErrorKind::Conflict => "That record already exists.",
            ErrorKind::AuthExpired => "Session expired. Please login again.",
            ErrorKind::AuthRequired => "Please login to continue.",
            ErrorKind::NotFoundOrForbidden => "The requested record is not available.",
            ErrorKind::Server => "The server could not complete the request.",
            ErrorKind::Network => "Could not reach the server. Please try again.",
            ErrorKind::Decode => "Unexpected response from the server.",
            ErrorKind::Busy => "Please wait for the current request to finish.",
        }
    }
}

/// One entry of an express-validator style `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(default, alias = "param")]
    pub path: Option<String>,
}

/// Error body shape shared by every endpoint
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// Classified API failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: Option<String>,
    pub errors: Vec<FieldError>,
}

impl ApiError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            status: None,
            message: None,
            errors: Vec::new(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation).with_message(message)
    }

    pub fn auth_required() -> Self {
        Self::new(ErrorKind::AuthRequired)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network).with_message(message)
    }

    pub fn busy() -> Self {
        Self::new(ErrorKind::Busy)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode).with_message(message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Classify a non-2xx response from its status and raw body.
    ///
    /// The expiry marker wins over the status code; bodies that are not JSON
    /// are kept as the message when non-empty.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(_) => {
                let trimmed = body.trim();
                let mut err = Self::new(ErrorKind::from_status(status)).with_status(status);
                if !trimmed.is_empty() {
                    err.message = Some(trimmed.to_string());
                }
                return err;
            }
        };

        let kind = if parsed.error.as_deref() == Some(EXPIRY_MARKER) {
            ErrorKind::AuthExpired
        } else {
            ErrorKind::from_status(status)
        };

        Self {
            kind,
            status: Some(status),
            message: parsed.message.or(parsed.error),
            errors: parsed.errors,
        }
    }

    /// Text to show the user: first field error, then the server message,
    /// then a per-kind fallback.
    pub fn user_message(&self) -> String {
        self.detail()
            .unwrap_or_else(|| self.kind.fallback_message().to_string())
    }

    /// Server-supplied text only (first field error, then message).
    ///
    /// Transport failures have none, so callers can substitute their own
    /// wording.
    pub fn detail(&self) -> Option<String> {
        if self.kind == ErrorKind::Network {
            return None;
        }
        if let Some(first) = self.errors.first() {
            return Some(first.msg.clone());
        }
        self.message.clone().filter(|m| !m.is_empty())
    }

    pub fn is_credential_failure(&self) -> bool {
        self.kind.is_credential_failure()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} ({}): {}", self.kind, status, self.user_message()),
            None => write!(f, "{:?}: {}", self.kind, self.user_message()),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::decode(err.to_string())
        } else {
            let mut api_err = ApiError::network(err.to_string());
            api_err.status = err.status().map(|s| s.as_u16());
            api_err
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::decode(err.to_string())
    }
}
