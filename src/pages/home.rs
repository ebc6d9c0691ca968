//! Home Page

use leptos::prelude::*;
use taskboard_client::Route;

use crate::components::NavLink;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h1>"Taskboard"</h1>
            <p class="lead">"Organise your projects and keep track of every task."</p>
            <div class="home-actions">
                <NavLink to=Route::Login class="btn btn-primary">"Login"</NavLink>
                <NavLink to=Route::Register class="btn btn-secondary">"Register"</NavLink>
            </div>
        </div>
    }
}
