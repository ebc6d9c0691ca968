//! Taskboard Client Core
//!
//! Everything the web client does that is not markup:
//! - api: typed REST bindings, token passed in per call
//! - session / gate: credential storage and the single failure-to-action mapping
//! - controller: paginated list state machine with re-fetch after mutation
//! - dashboard, forms, auth: the remaining view contracts
//!
//! No browser APIs are used here, so the whole crate runs under native tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod gate;
pub mod guard;
pub mod models;
pub mod paging;
pub mod resources;
pub mod route;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, TaskboardApi};
pub use config::{ClientConfig, ConfigError};
pub use controller::{CollectionController, CollectionState, LoadState, PagedResource};
pub use dashboard::{load_dashboard, DashboardData, Section};
pub use error::{ApiError, ApiResult, ErrorKind};
pub use forms::{ProjectDraft, TaskDraft, TaskForm};
pub use gate::{GateOutcome, SessionGate};
pub use guard::MountGuard;
pub use paging::{Page, PageControls};
pub use resources::{Projects, Tasks};
pub use route::{Navigator, Route};
pub use session::{MemorySessionStore, NotifyingStore, Session, SessionStore};
