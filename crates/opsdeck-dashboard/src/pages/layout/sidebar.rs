//! Sidebar navigation component

use leptos::*;
use leptos_router::*;
use opsdeck_common::routes::{nav_is_active, NavItem, NAV_ITEMS};
use crate::state::use_app_state;

/// Sidebar navigation component
#[component]
pub fn Sidebar<F>(open: ReadSignal<bool>, on_close: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let navigate = use_navigate();
    let app_state = use_app_state();

    let logout = move |_| {
        app_state.logout();
        navigate("/login", Default::default());
    };

    view! {
        // Mobile backdrop
        <Show when=move || open.get()>
            <div class="sidebar-backdrop" on:click=move |_| on_close()></div>
        </Show>

        <aside class=move || if open.get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <span class="sidebar-logo">"▲"</span>
                <span class="sidebar-title">"OpsDeck"</span>
            </div>

            <nav class="sidebar-nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| view! { <NavLink item=item on_close=on_close /> })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                <div class="session-role">
                    {move || app_state.role().map(|role| format!("Signed in as {}", role))}
                </div>
                <button class="logout-btn" on:click=logout>
                    <span class="logout-icon">"🚪"</span>
                    <span>"Sign Out"</span>
                </button>
            </div>
        </aside>
    }
}

/// Individual navigation item
#[component]
fn NavLink<F>(item: NavItem, on_close: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let location = use_location();
    let is_active = move || nav_is_active(item.path, &location.pathname.get());

    view! {
        <a
            href=item.path
            class=move || if is_active() { "nav-item active" } else { "nav-item" }
            on:click=move |_| on_close()
        >
            <span class="nav-icon">{item.icon}</span>
            <span>{item.label}</span>
        </a>
    }
}
