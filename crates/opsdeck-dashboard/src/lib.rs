//! OpsDeck Dashboard - Leptos Web Interface
//!
//! A client-side Rust dashboard for browsing projects, cloud resources and
//! middleware telemetry from the OpsDeck sample inventory.

pub mod api;
pub mod pages;
pub mod state;

use leptos::*;
use leptos_router::*;

use pages::{CloudResources, EditProject, Layout, Login, Overview, ProjectDetail, ProjectList};
use state::provide_app_state;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize app state
    provide_app_state();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/login" view=Login />

                    // Protected routes
                    <Route path="/" view=|| view! { <Layout><Overview /></Layout> } />
                    <Route path="/projects" view=|| view! { <Layout><ProjectList /></Layout> } />
                    <Route path="/projects/new" view=|| view! { <Layout><EditProject /></Layout> } />
                    <Route path="/projects/:id" view=|| view! { <Layout><ProjectDetail /></Layout> } />
                    <Route path="/projects/:id/edit" view=|| view! { <Layout><EditProject /></Layout> } />
                    <Route path="/resources" view=|| view! { <Layout><CloudResources /></Layout> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("failed to init logger: {}", e).into());
    }

    mount_to_body(App);
}
