//! Dashboard Summary
//!
//! Read-only: first page of both collections, cut to a few rows each. No
//! pagination of its own.

use crate::api::TaskboardApi;
use crate::error::ApiResult;
use crate::gate::{GateOutcome, SessionGate};
use crate::models::{Project, Task};

/// One dashboard section
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(GateOutcome),
}

impl<T> Section<T> {
    fn from_result(result: ApiResult<Vec<T>>, gate: &SessionGate, rows: usize) -> Self {
        match result {
            Ok(mut items) => {
                items.truncate(rows);
                Section::Loaded(items)
            }
            Err(err) => Section::Failed(gate.intercept(err)),
        }
    }

    pub fn rows(&self) -> &[T] {
        match self {
            Section::Loaded(items) => items,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub identity: Option<String>,
    pub projects: Section<Project>,
    pub tasks: Section<Task>,
}

impl DashboardData {
    pub fn loading(identity: Option<String>) -> Self {
        Self {
            identity,
            projects: Section::Loading,
            tasks: Section::Loading,
        }
    }
}

/// Fetch both sections.
///
/// Anonymous users are redirected before any request. A credential failure
/// on the first call ends the session, so the second call is skipped.
pub async fn load_dashboard(
    api: &dyn TaskboardApi,
    gate: &SessionGate,
    rows: usize,
) -> Result<DashboardData, GateOutcome> {
    let token = gate.require_session()?;
    let identity = gate.store().identity();

    let projects = api
        .list_projects(&token, Some(1), None)
        .await
        .map(|list| list.projects);
    let projects = Section::from_result(projects, gate, rows);
    if let Section::Failed(outcome) = &projects {
        if outcome.is_redirect() {
            return Err(outcome.clone());
        }
    }

    let tasks = api
        .list_tasks(&token, Some(1), None)
        .await
        .map(|list| list.tasks);
    let tasks = Section::from_result(tasks, gate, rows);
    if let Section::Failed(outcome) = &tasks {
        if outcome.is_redirect() {
            return Err(outcome.clone());
        }
    }

    Ok(DashboardData {
        identity,
        projects,
        tasks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sign_in;
    use crate::error::ApiError;
    use crate::route::Route;
    use crate::session::{MemorySessionStore, SessionStore};
    use crate::testing::{FakeBackend, RecordingNavigator, VALID_PASSWORD};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_login_then_dashboard_shows_all_rows() {
        let backend = FakeBackend::seeded(3, 5);
        let store = Arc::new(MemorySessionStore::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let gate = SessionGate::new(store.clone(), navigator.clone());

        sign_in(&backend, store.as_ref(), "ana@example.com", VALID_PASSWORD, None)
            .await
            .unwrap();
        assert!(store.is_authenticated());

        let data = load_dashboard(&backend, &gate, 5).await.unwrap();
        assert_eq!(data.identity.as_deref(), Some("ana@example.com"));
        assert_eq!(data.projects.rows().len(), 3);
        assert_eq!(data.tasks.rows().len(), 5);
        assert_eq!(data.tasks.rows()[0].project_name(), Some("Project 1"));
    }

    #[tokio::test]
    async fn test_dashboard_cuts_to_row_limit() {
        let backend = FakeBackend::seeded(8, 12);
        let store = Arc::new(MemorySessionStore::with_session(crate::testing::VALID_TOKEN, "ana@example.com"));
        let gate = SessionGate::new(store, Arc::new(RecordingNavigator::default()));

        let data = load_dashboard(&backend, &gate, 5).await.unwrap();
        assert_eq!(data.projects.rows().len(), 5);
        assert_eq!(data.tasks.rows().len(), 5);
    }

    #[tokio::test]
    async fn test_dashboard_section_failure_is_local() {
        let backend = FakeBackend::seeded(2, 2);
        backend.fail_next(ApiError::from_response(500, "{}"));
        let store = Arc::new(MemorySessionStore::with_session(crate::testing::VALID_TOKEN, "ana@example.com"));
        let gate = SessionGate::new(store.clone(), Arc::new(RecordingNavigator::default()));

        let data = load_dashboard(&backend, &gate, 5).await.unwrap();
        assert!(matches!(data.projects, Section::Failed(GateOutcome::Local(_))));
        assert_eq!(data.tasks.rows().len(), 2);
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_dashboard_expired_redirects_once() {
        let backend = FakeBackend::seeded(2, 2);
        backend.expire_tokens();
        let store = Arc::new(MemorySessionStore::with_session(crate::testing::VALID_TOKEN, "ana@example.com"));
        let navigator = Arc::new(RecordingNavigator::default());
        let gate = SessionGate::new(store.clone(), navigator.clone());

        let outcome = load_dashboard(&backend, &gate, 5).await.unwrap_err();
        assert!(outcome.is_redirect());
        assert_eq!(backend.calls_named("list_tasks"), 0);
        assert_eq!(navigator.visits(), vec![Route::Login]);
        assert!(!store.is_authenticated());
    }
}
