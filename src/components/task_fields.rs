//! Task Form Fields
//!
//! `TaskFields` edits a full [`TaskForm`] for creation; `TaskEditFields`
//! only the fields a [`TaskDraft`] may change.

use leptos::prelude::*;
use taskboard_client::models::{Project, TaskPriority, TaskStatus};
use taskboard_client::{TaskDraft, TaskForm};

#[component]
fn StatusSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] allow_empty: bool,
) -> impl IntoView {
    view! {
        <select class="form-control" on:change=move |ev| on_change.run(event_target_value(&ev))>
            {allow_empty.then(|| view! {
                <option value="" selected=move || value.get().is_empty()>"Select status"</option>
            })}
            {TaskStatus::ALL.into_iter().map(|status| view! {
                <option value=status.as_str() selected=move || value.get() == status.as_str()>
                    {status.label()}
                </option>
            }).collect_view()}
        </select>
    }
}

#[component]
fn PrioritySelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] allow_empty: bool,
) -> impl IntoView {
    view! {
        <select class="form-control" on:change=move |ev| on_change.run(event_target_value(&ev))>
            {allow_empty.then(|| view! {
                <option value="" selected=move || value.get().is_empty()>"Select priority"</option>
            })}
            {TaskPriority::ALL.into_iter().map(|priority| view! {
                <option value=priority.as_str() selected=move || value.get() == priority.as_str()>
                    {priority.label()}
                </option>
            }).collect_view()}
        </select>
    }
}

/// Fields for a new task; `projects` fills the project selector
#[component]
pub fn TaskFields(
    form: RwSignal<TaskForm>,
    #[prop(into)] projects: Signal<Vec<Project>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>"Title"</label>
            <input
                type="text"
                class="form-control"
                placeholder="Enter task title"
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label>"Description"</label>
            <textarea
                class="form-control"
                placeholder="Enter task description"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label>"Status"</label>
            <StatusSelect
                value=Signal::derive(move || form.with(|f| f.status.clone()))
                on_change=move |value: String| form.update(|f| f.status = value)
                allow_empty=true
            />
        </div>
        <div class="form-group">
            <label>"Due Date"</label>
            <input
                type="date"
                class="form-control"
                prop:value=move || form.with(|f| f.due_date.clone())
                on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label>"Project"</label>
            <select
                class="form-control"
                on:change=move |ev| form.update(|f| f.project_id = event_target_value(&ev))
            >
                <option value="" selected=move || form.with(|f| f.project_id.is_empty())>
                    "Select project"
                </option>
                <For
                    each=move || projects.get()
                    key=|project: &Project| project.id.clone()
                    children=move |project: Project| {
                        let id = project.id.clone();
                        view! {
                            <option
                                value=project.id.clone()
                                selected=move || form.with(|f| f.project_id == id)
                            >
                                {project.name}
                            </option>
                        }
                    }
                />
            </select>
        </div>
        <div class="form-group">
            <label>"Priority"</label>
            <PrioritySelect
                value=Signal::derive(move || form.with(|f| f.priority.clone()))
                on_change=move |value: String| form.update(|f| f.priority = value)
                allow_empty=true
            />
        </div>
    }
}

fn edit_draft(draft: RwSignal<Option<TaskDraft>>, apply: impl FnOnce(&mut TaskDraft)) {
    draft.update(|d| {
        if let Some(d) = d.as_mut() {
            apply(d);
        }
    });
}

/// Fields an existing task may change
#[component]
pub fn TaskEditFields(draft: RwSignal<Option<TaskDraft>>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>"Description"</label>
            <textarea
                class="form-control"
                prop:value=move || draft.with(|d| d.as_ref().map(|d| d.description.clone()).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit_draft(draft, |d| d.description = value);
                }
            />
        </div>
        <div class="form-group">
            <label>"Status"</label>
            <StatusSelect
                value=Signal::derive(move || {
                    draft.with(|d| d.as_ref().map(|d| d.status.as_str().to_string()).unwrap_or_default())
                })
                on_change=move |value: String| {
                    if let Some(status) = TaskStatus::parse(&value) {
                        edit_draft(draft, |d| d.status = status);
                    }
                }
            />
        </div>
        <div class="form-group">
            <label>"Priority"</label>
            <PrioritySelect
                value=Signal::derive(move || {
                    draft.with(|d| d.as_ref().map(|d| d.priority.as_str().to_string()).unwrap_or_default())
                })
                on_change=move |value: String| {
                    if let Some(priority) = TaskPriority::parse(&value) {
                        edit_draft(draft, |d| d.priority = priority);
                    }
                }
            />
        </div>
    }
}
