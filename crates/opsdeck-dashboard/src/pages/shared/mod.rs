//! Components shared across pages

mod charts;

pub use charts::{AreaChart, BarChart, LineChart};

use leptos::*;

/// Shown for an unknown project identifier
#[component]
pub fn NotFound(id: String) -> impl IntoView {
    view! {
        <div class="not-found card">
            <h2>"Project not found"</h2>
            <p>{format!("No project with identifier {} exists.", id)}</p>
            <a href="/projects" class="btn btn-primary">"Back to Projects"</a>
        </div>
    }
}

/// Summary tile with a single figure
#[component]
pub fn StatCard(title: &'static str, value: String, color: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {}", color)>{value}</div>
        </div>
    }
}
