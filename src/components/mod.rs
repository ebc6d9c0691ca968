//! UI Components
//!
//! Reusable Leptos components.

mod modal;
mod nav_link;
mod navbar;
mod pagination;
mod project_fields;
mod task_fields;
mod toast_stack;

pub use modal::Modal;
pub use nav_link::NavLink;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use project_fields::ProjectFields;
pub use task_fields::{TaskEditFields, TaskFields};
pub use toast_stack::ToastStack;
