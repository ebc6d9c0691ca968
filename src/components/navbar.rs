//! Navbar Component

use leptos::prelude::*;
use taskboard_client::Route;

use crate::components::NavLink;
use crate::context::use_app;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app();
    let session_changes = ctx.session_changes;
    let signed_in = Memo::new({
        let ctx = ctx.clone();
        move |_| {
            session_changes.track();
            ctx.is_authenticated()
        }
    });

    view! {
        <nav class="navbar">
            <NavLink to=Route::Home class="navbar-brand">"Taskboard"</NavLink>
            <ul class="navbar-nav">
                <li><NavLink to=Route::Dashboard class="nav-link">"Dashboard"</NavLink></li>
                <li><NavLink to=Route::Login class="nav-link">"Login"</NavLink></li>
                <li><NavLink to=Route::Register class="nav-link">"Register"</NavLink></li>
                <li><NavLink to=Route::Projects class="nav-link">"Projects"</NavLink></li>
                <li><NavLink to=Route::Tasks class="nav-link">"Tasks"</NavLink></li>
            </ul>
            <Show when=move || signed_in.get()>
                <button
                    class="btn btn-outline logout-btn"
                    on:click={
                        let ctx = ctx.clone();
                        move |_| ctx.logout()
                    }
                >
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
