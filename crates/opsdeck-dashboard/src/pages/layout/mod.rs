//! Protected page layout: session guard, sidebar and content area

mod sidebar;

pub use sidebar::Sidebar;

use leptos::*;
use leptos_router::*;
use opsdeck_common::routes::Route;
use opsdeck_common::session::RouteDecision;
use crate::state::use_app_state;

/// Wraps every protected page
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    let app_state = use_app_state();

    let (sidebar_open, set_sidebar_open) = create_signal(false);

    // Redirect if not authenticated
    create_effect(move |_| {
        let path = location.pathname.get();
        let decision = Route::parse(&path)
            .map(|route| app_state.guard(&route))
            .unwrap_or(RouteDecision::Allow);

        if let RouteDecision::Redirect(to) = decision {
            log::debug!("Redirecting {} to {}", path, to);
            navigate(&to.path(), Default::default());
        }
    });

    view! {
        <div class="dashboard-layout">
            <Sidebar open=sidebar_open on_close=move || set_sidebar_open.set(false) />

            <div class="main-column">
                // Mobile header
                <header class="mobile-header">
                    <button class="menu-btn" on:click=move |_| set_sidebar_open.set(true)>"☰"</button>
                    <span class="mobile-title">"OpsDeck"</span>
                </header>

                <main class="main-content">
                    {children()}
                </main>
            </div>
        </div>
    }
}
