//! Login and Registration Flows

use crate::api::TaskboardApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{LoginRequest, MessageResponse, RegisterRequest};
use crate::session::SessionStore;

pub const CAPTCHA_MISSING: &str = "Please complete the reCAPTCHA";
pub const LOGIN_FAILED: &str = "Failed to login. Please try again.";
pub const REGISTER_FAILED: &str = "Failed to register. Please try again.";

/// Message to toast for a failed auth call
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    err.detail().unwrap_or_else(|| fallback.to_string())
}

/// Log in and persist the session on success.
///
/// Returns the server's welcome message.
pub async fn sign_in(
    api: &dyn TaskboardApi,
    store: &dyn SessionStore,
    email: &str,
    password: &str,
    captcha_token: Option<String>,
) -> ApiResult<String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    let response = api
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            recaptcha_token: captcha_token.filter(|t| !t.is_empty()),
        })
        .await?;

    store.set_session(&response.token, email);
    log::info!("Signed in as {}", email);
    Ok(response.message)
}

/// Register a new account; no request is sent without a captcha token.
pub async fn sign_up(
    api: &dyn TaskboardApi,
    user_name: &str,
    email: &str,
    password: &str,
    captcha_token: Option<String>,
) -> ApiResult<MessageResponse> {
    let recaptcha_token = captcha_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation(CAPTCHA_MISSING))?;

    api.register(&RegisterRequest {
        user_name: user_name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        recaptcha_token,
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::session::MemorySessionStore;
    use crate::testing::{FakeBackend, VALID_PASSWORD, VALID_TOKEN};

    #[tokio::test]
    async fn test_sign_in_stores_token_and_identity() {
        let backend = FakeBackend::seeded(0, 0);
        let store = MemorySessionStore::new();

        let message = sign_in(&backend, &store, "ana@example.com", VALID_PASSWORD, None)
            .await
            .unwrap();

        assert_eq!(message, "Login successful");
        assert_eq!(store.token().as_deref(), Some(VALID_TOKEN));
        assert_eq!(store.identity().as_deref(), Some("ana@example.com"));
    }

    #[tokio::test]
    async fn test_sign_in_failure_leaves_store_empty() {
        let backend = FakeBackend::seeded(0, 0);
        let store = MemorySessionStore::new();

        let err = sign_in(&backend, &store, "ana@example.com", "wrong", None)
            .await
            .unwrap_err();

        assert_eq!(failure_message(&err, LOGIN_FAILED), "Invalid credentials");
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_up_without_captcha_sends_nothing() {
        let backend = FakeBackend::seeded(0, 0);

        let err = sign_up(&backend, "ana", "ana@example.com", "secret", Some(String::new()))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), CAPTCHA_MISSING);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sign_up_surfaces_first_validation_error() {
        let backend = FakeBackend::seeded(0, 0);

        let err = sign_up(&backend, "ana", "not-an-email", "secret", Some("captcha".into()))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(failure_message(&err, REGISTER_FAILED), "Please enter a valid email");
    }

    #[tokio::test]
    async fn test_sign_up_existing_account_conflicts() {
        let backend = FakeBackend::seeded(0, 0);

        let err = sign_up(&backend, "ana", "taken@example.com", "secret", Some("captcha".into()))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(failure_message(&err, REGISTER_FAILED), "User already exists");
    }

    #[test]
    fn test_transport_failure_uses_fallback() {
        let err = ApiError::network("dns error");
        assert_eq!(failure_message(&err, LOGIN_FAILED), LOGIN_FAILED);
    }
}
