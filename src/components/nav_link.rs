//! In-app Link Component

use leptos::prelude::*;
use taskboard_client::Route;

use crate::context::use_app;

/// Anchor that switches the route without a page load
#[component]
pub fn NavLink(
    to: Route,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app();
    let route = ctx.route;
    let class = move || {
        if route.get() == to {
            format!("{} active", class)
        } else {
            class.clone()
        }
    };
    view! {
        <a
            href=to.path()
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(to);
            }
        >
            {children()}
        </a>
    }
}
