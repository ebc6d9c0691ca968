//! Pages
//!
//! One component per route.

mod collection;
mod dashboard;
mod home;
mod login;
mod projects;
mod register;
mod tasks;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use projects::ProjectsPage;
pub use register::RegisterPage;
pub use tasks::TasksPage;
