//! Modal Component

use leptos::prelude::*;

/// Dialog shown while `open` is true; the close button resets it.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <div class="modal-header">
                        <h5 class="modal-title">{title.get_value()}</h5>
                        <button type="button" class="close-btn" on:click=move |_| open.set(false)>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
