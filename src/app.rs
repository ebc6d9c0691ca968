//! Taskboard Frontend App
//!
//! Root component: provides the context and store, and swaps the page for
//! the active route.

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_client::Route;

use crate::components::{Navbar, ToastStack};
use crate::config;
use crate::context::AppContext;
use crate::navigation::current_route;
use crate::pages::{DashboardPage, HomePage, LoginPage, ProjectsPage, RegisterPage, TasksPage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let route = RwSignal::new(current_route());
    let ctx = AppContext::new(config::client_config(), route);
    ctx.navigator().listen_popstate();
    log::info!("Taskboard client started (API {})", ctx.config.base_url);

    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    view! {
        <Navbar />
        <ToastStack />
        <main class="container">
            {move || match route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Register => view! { <RegisterPage /> }.into_any(),
                Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                Route::Projects => view! { <ProjectsPage /> }.into_any(),
                Route::Tasks => view! { <TasksPage /> }.into_any(),
            }}
        </main>
    }
}
