//! Tasks Page
//!
//! Paginated task table with create, edit and delete. The create form needs
//! the user's projects, fetched once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::models::{Project, Task};
use taskboard_client::{CollectionController, LoadState, MountGuard, TaskDraft, TaskForm, Tasks};

use super::collection::{mount_collection, spawn_go_to_page, spawn_load, spawn_mutation};
use crate::components::{Modal, Pagination, TaskEditFields, TaskFields};
use crate::context::use_app;
use crate::store::{store_push_toast, store_report, use_app_store, ToastKind};

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let controller = CollectionController::shared(
        Tasks::new(ctx.api.clone()),
        ctx.gate.clone(),
        ctx.config.page_size,
    );
    let state = mount_collection(&controller);
    spawn_load(controller.clone(), store, 1);

    let busy = Memo::new(move |_| state.with(|s| s.is_busy()));
    let controls = Signal::derive(move || state.with(|s| s.controls()));
    let controller = StoredValue::new(controller);
    let api = StoredValue::new(ctx.api.clone());

    // Project selector options
    let projects = RwSignal::new(Vec::<Project>::new());
    let projects_loaded = RwSignal::new(false);
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });
    {
        let ctx = ctx.clone();
        spawn_local(async move {
            // without a session the task list load reports the redirect
            let Ok(token) = ctx.gate.require_session() else {
                return;
            };
            let lookup = ctx
                .api
                .list_projects(&token, Some(1), Some(ctx.config.lookup_page_size))
                .await;
            match lookup {
                Ok(list) => {
                    guard.apply(list.projects, |list| {
                        projects.set(list);
                        projects_loaded.set(true);
                    });
                }
                Err(err) => {
                    let outcome = ctx.gate.intercept(err);
                    if !outcome.is_redirect() && guard.is_live() {
                        store_report(&store, &outcome);
                    }
                }
            }
        });
    }
    let no_projects = move || projects_loaded.get() && projects.with(|p| p.is_empty());

    // Create dialog
    let create_open = RwSignal::new(false);
    let form = RwSignal::new(TaskForm::default());

    // Edit dialog, seeded from the loaded row
    let edit_open = RwSignal::new(false);
    let draft = RwSignal::new(None::<TaskDraft>);

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = match form.with_untracked(TaskForm::to_new_task) {
            Ok(data) => data,
            Err(err) => {
                store_push_toast(&store, ToastKind::Error, err.user_message());
                return;
            }
        };
        let api = api.get_value();
        spawn_mutation(
            controller.get_value(),
            store,
            move |token| async move { api.create_task(&token, &data).await.map(|r| r.message) },
            move || {
                create_open.try_set(false);
                form.try_set(TaskForm::default());
            },
        );
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = draft.get_untracked() else {
            return;
        };
        let changes = match current.to_changes() {
            Ok(changes) => changes,
            Err(err) => {
                store_push_toast(&store, ToastKind::Error, err.user_message());
                return;
            }
        };
        let api = api.get_value();
        spawn_mutation(
            controller.get_value(),
            store,
            move |token| async move {
                api.update_task(&token, &current.id, &changes).await.map(|r| r.message)
            },
            move || {
                edit_open.try_set(false);
                draft.try_set(None);
            },
        );
    };

    let start_edit = move |task: &Task| {
        draft.set(Some(TaskDraft::from_task(task)));
        edit_open.set(true);
    };

    let delete = move |id: String| {
        let api = api.get_value();
        spawn_mutation(
            controller.get_value(),
            store,
            move |token| async move { api.delete_task(&token, &id).await.map(|r| r.message) },
            || {},
        );
    };

    view! {
        <div class="page tasks-page">
            <div class="page-header">
                <h2>"Tasks"</h2>
                <Show
                    when=move || !no_projects()
                    fallback=|| view! {
                        <div class="alert alert-warning">
                            "No projects available. Please add a project first."
                        </div>
                    }
                >
                    <button
                        class="btn btn-primary"
                        disabled=move || busy.get()
                        on:click=move |_| create_open.set(true)
                    >
                        "Add Task"
                    </button>
                </Show>
            </div>

            {move || state.with(|s| match &s.load {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="loading">"Loading tasks..."</p> }.into_any()
                }
                LoadState::Failed(outcome) => {
                    view! { <div class="alert alert-danger">{outcome.message()}</div> }.into_any()
                }
                LoadState::Loaded(page) if page.is_empty() => {
                    view! { <p class="empty">"No tasks found."</p> }.into_any()
                }
                LoadState::Loaded(page) => {
                    let rows = page.items.iter().enumerate().map(|(i, task)| {
                        let number = page.row_number(i);
                        let id = task.id.clone();
                        let row = task.clone();
                        view! {
                            <tr>
                                <td>{number}</td>
                                <td>{task.title.clone()}</td>
                                <td>{task.description.clone()}</td>
                                <td>{task.status.label()}</td>
                                <td>{task.priority.label()}</td>
                                <td>{task.due_date.format("%Y-%m-%d").to_string()}</td>
                                <td>{task.project_name().unwrap_or("-").to_string()}</td>
                                <td class="actions">
                                    <button
                                        class="btn btn-sm btn-secondary"
                                        disabled=move || busy.get()
                                        on:click=move |_| start_edit(&row)
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn-sm btn-danger"
                                        disabled=move || busy.get()
                                        on:click=move |_| delete(id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Title"</th>
                                    <th>"Description"</th>
                                    <th>"Status"</th>
                                    <th>"Priority"</th>
                                    <th>"Due Date"</th>
                                    <th>"Project"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }.into_any()
                }
            })}

            <Pagination
                controls=controls
                busy=busy
                on_select=move |page: u32| spawn_go_to_page(controller.get_value(), store, page)
            />

            <Modal open=create_open title="Add Task">
                <form on:submit=on_create>
                    <TaskFields form=form projects=projects />
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        "Add Task"
                    </button>
                </form>
            </Modal>

            <Modal open=edit_open title="Edit Task">
                <form on:submit=on_save>
                    <TaskEditFields draft=draft />
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        "Save Changes"
                    </button>
                </form>
            </Modal>
        </div>
    }
}
