//! Dashboard Page
//!
//! Read-only summary: the first few projects and tasks, each with a link to
//! the full list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::models::{Project, Task};
use taskboard_client::{load_dashboard, DashboardData, MountGuard, Route, Section};

use crate::components::NavLink;
use crate::context::use_app;
use crate::store::{store_report, use_app_store};

fn section_view<T>(
    section: &Section<T>,
    loading: &'static str,
    empty: &'static str,
    row: impl Fn(&T) -> AnyView,
) -> AnyView {
    match section {
        Section::Loading => view! { <p class="loading">{loading}</p> }.into_any(),
        Section::Failed(outcome) => {
            view! { <div class="alert alert-danger">{outcome.message()}</div> }.into_any()
        }
        Section::Loaded(items) if items.is_empty() => view! { <p class="empty">{empty}</p> }.into_any(),
        Section::Loaded(items) => view! {
            <ul class="list-group">{items.iter().map(row).collect_view()}</ul>
        }
        .into_any(),
    }
}

fn project_row(project: &Project) -> AnyView {
    view! {
        <li class="list-group-item">
            <strong>{project.name.clone()}</strong>
            " - "
            {project.description.clone()}
        </li>
    }
    .into_any()
}

fn task_row(task: &Task) -> AnyView {
    view! {
        <li class="list-group-item">
            <strong>{task.title.clone()}</strong>
            " - "
            {task.status.label()}
            <span class="task-project">{task.project_name().unwrap_or("-").to_string()}</span>
        </li>
    }
    .into_any()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let data = RwSignal::new(DashboardData::loading(ctx.identity()));

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });
    spawn_local(async move {
        match load_dashboard(ctx.api.as_ref(), &ctx.gate, ctx.config.dashboard_rows).await {
            Ok(loaded) => {
                guard.apply(loaded, |loaded| data.set(loaded));
            }
            Err(outcome) => store_report(&store, &outcome),
        }
    });

    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>
            <p class="identity">
                "You are logged in as: "
                <strong>{move || data.with(|d| d.identity.clone().unwrap_or_default())}</strong>
            </p>

            <div class="dashboard-section">
                <div class="section-header">
                    <h4>"Projects"</h4>
                    <NavLink to=Route::Projects class="btn btn-link">"View all projects"</NavLink>
                </div>
                {move || data.with(|d| {
                    section_view(&d.projects, "Loading projects...", "No projects found.", project_row)
                })}
            </div>

            <div class="dashboard-section">
                <div class="section-header">
                    <h4>"Tasks"</h4>
                    <NavLink to=Route::Tasks class="btn btn-link">"View all tasks"</NavLink>
                </div>
                {move || data.with(|d| section_view(&d.tasks, "Loading tasks...", "No tasks found.", task_row))}
            </div>
        </div>
    }
}
