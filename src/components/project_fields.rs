//! Project Form Fields
//!
//! Name and description inputs shared by the create and edit dialogs.

use leptos::prelude::*;

#[component]
pub fn ProjectFields(
    name: RwSignal<String>,
    description: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="project-name">"Name"</label>
            <input
                id="project-name"
                type="text"
                class="form-control"
                placeholder="Enter project name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for="project-description">"Description"</label>
            <textarea
                id="project-description"
                class="form-control"
                placeholder="Enter project description"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />
        </div>
    }
}
