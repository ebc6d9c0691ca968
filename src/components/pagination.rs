//! Pagination Component
//!
//! Previous / numbered / Next bar driven by [`PageControls`].

use leptos::prelude::*;
use taskboard_client::PageControls;

#[component]
pub fn Pagination(
    #[prop(into)] controls: Signal<Option<PageControls>>,
    /// Disables every button while a request is in flight
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    move || {
        controls.get().map(|controls| {
            let PageControls { pages, active, previous_enabled, next_enabled } = controls;
            view! {
                <nav class="pagination">
                    <button
                        class="page-btn"
                        disabled=move || busy.get() || !previous_enabled
                        on:click=move |_| on_select.run(active.saturating_sub(1))
                    >
                        "Previous"
                    </button>
                    {pages.into_iter().map(|page| {
                        let class = if page == active { "page-btn active" } else { "page-btn" };
                        view! {
                            <button
                                class=class
                                disabled=move || busy.get()
                                on:click=move |_| on_select.run(page)
                            >
                                {page}
                            </button>
                        }
                    }).collect_view()}
                    <button
                        class="page-btn"
                        disabled=move || busy.get() || !next_enabled
                        on:click=move |_| on_select.run(active + 1)
                    >
                        "Next"
                    </button>
                </nav>
            }
        })
    }
}
