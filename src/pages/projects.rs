//! Projects Page
//!
//! Paginated project table with create, edit and delete.

use leptos::prelude::*;
use taskboard_client::models::{NewProject, Project};
use taskboard_client::{CollectionController, LoadState, ProjectDraft, Projects};

use super::collection::{mount_collection, spawn_go_to_page, spawn_load, spawn_mutation};
use crate::components::{Modal, Pagination, ProjectFields};
use crate::context::use_app;
use crate::store::{store_push_toast, use_app_store, ToastKind};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let controller = CollectionController::shared(
        Projects::new(ctx.api.clone()),
        ctx.gate.clone(),
        ctx.config.page_size,
    );
    let state = mount_collection(&controller);
    spawn_load(controller.clone(), store, 1);

    let busy = Memo::new(move |_| state.with(|s| s.is_busy()));
    let controls = Signal::derive(move || state.with(|s| s.controls()));
    let controller = StoredValue::new(controller);

    // Create dialog
    let create_open = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());

    // Edit dialog, seeded from the loaded row
    let edit_open = RwSignal::new(false);
    let edit_id = RwSignal::new(String::new());
    let edit_name = RwSignal::new(String::new());
    let edit_description = RwSignal::new(String::new());

    let api = StoredValue::new(ctx.api.clone());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = match (NewProject {
            name: new_name.get_untracked(),
            description: new_description.get_untracked(),
        })
        .validated()
        {
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
            move |token| async move { api.create_project(&token, &data).await.map(|r| r.message) },
            move || {
                create_open.try_set(false);
                new_name.try_set(String::new());
                new_description.try_set(String::new());
            },
        );
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ProjectDraft {
            id: edit_id.get_untracked(),
            name: edit_name.get_untracked(),
            description: edit_description.get_untracked(),
        };
        let data = match draft.to_update() {
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
            move |token| async move {
                api.update_project(&token, &draft.id, &data).await.map(|r| r.message)
            },
            move || {
                edit_open.try_set(false);
            },
        );
    };

    let start_edit = move |project: &Project| {
        let draft = ProjectDraft::from_project(project);
        edit_id.set(draft.id);
        edit_name.set(draft.name);
        edit_description.set(draft.description);
        edit_open.set(true);
    };

    let delete = move |id: String| {
        let api = api.get_value();
        spawn_mutation(
            controller.get_value(),
            store,
            move |token| async move { api.delete_project(&token, &id).await.map(|r| r.message) },
            || {},
        );
    };

    view! {
        <div class="page projects-page">
            <div class="page-header">
                <h2>"Projects"</h2>
                <button
                    class="btn btn-primary"
                    disabled=move || busy.get()
                    on:click=move |_| create_open.set(true)
                >
                    "Add Project"
                </button>
            </div>

            {move || state.with(|s| match &s.load {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="loading">"Loading projects..."</p> }.into_any()
                }
                LoadState::Failed(outcome) => {
                    view! { <div class="alert alert-danger">{outcome.message()}</div> }.into_any()
                }
                LoadState::Loaded(page) if page.is_empty() => {
                    view! { <p class="empty">"No projects found."</p> }.into_any()
                }
                LoadState::Loaded(page) => {
                    let rows = page.items.iter().enumerate().map(|(i, project)| {
                        let number = page.row_number(i);
                        let id = project.id.clone();
                        let row = project.clone();
                        view! {
                            <tr>
                                <td>{number}</td>
                                <td>{project.name.clone()}</td>
                                <td>{project.description.clone()}</td>
                                <td>{project.owner_name().unwrap_or("-").to_string()}</td>
                                <td>{project.created_at.format("%Y-%m-%d").to_string()}</td>
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
                                    <th>"Name"</th>
                                    <th>"Description"</th>
                                    <th>"Owner"</th>
                                    <th>"Created"</th>
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

            <Modal open=create_open title="Add Project">
                <form on:submit=on_create>
                    <ProjectFields name=new_name description=new_description />
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        "Add Project"
                    </button>
                </form>
            </Modal>

            <Modal open=edit_open title="Edit Project">
                <form on:submit=on_save>
                    <ProjectFields name=edit_name description=edit_description />
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        "Save Changes"
                    </button>
                </form>
            </Modal>
        </div>
    }
}
