//! Searchable project table

use leptos::*;
use opsdeck_common::filter::{ProjectFilter, ProjectRow, EMPTY_PROJECTS_MESSAGE};
use opsdeck_common::routes::Route;
use opsdeck_common::utils::{format_date, overflow_badge};
use crate::state::use_app_state;

/// Project list page
#[component]
pub fn ProjectList() -> impl IntoView {
    let app_state = use_app_state();

    let (search, set_search) = create_signal(String::new());
    let (owner, set_owner) = create_signal(String::new());

    let filter = create_memo(move |_| ProjectFilter::new(search.get(), owner.get()));

    let rows = move || {
        filter.with(|filter| {
            app_state.store.with_value(|store| {
                let matched = filter.apply(store.projects());
                if matched.is_empty() {
                    return view! {
                        <tr>
                            <td colspan="5" class="empty-row">{EMPTY_PROJECTS_MESSAGE}</td>
                        </tr>
                    }
                    .into_view();
                }

                matched
                    .into_iter()
                    .map(|p| project_row(ProjectRow::new(p)))
                    .collect_view()
            })
        })
    };

    view! {
        <div class="page projects-page">
            <div class="page-header with-actions">
                <div>
                    <h1>"Projects"</h1>
                    <p class="page-subtitle">"Manage project domains and team access"</p>
                </div>
                <a href=Route::NewProject.path() class="btn btn-primary">"+ New Project"</a>
            </div>

            <div class="card filter-bar">
                <input
                    type="text"
                    class="form-input"
                    placeholder="Search by name or domain..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    class="form-input"
                    placeholder="Filter by owner..."
                    prop:value=owner
                    on:input=move |ev| set_owner.set(event_target_value(&ev))
                />
            </div>

            <div class="card table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Project"</th>
                            <th>"Domains"</th>
                            <th>"Owner"</th>
                            <th>"Team"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}

fn project_row(row: ProjectRow<'_>) -> View {
    let project = row.project;
    let detail = Route::ProjectDetail(project.id.clone()).path();
    let edit = Route::EditProject(project.id.clone()).path();

    view! {
        <tr>
            <td>
                <a href=detail class="cell-title link">{project.name.clone()}</a>
                <div class="cell-sub">
                    {format!("{} · updated {}", project.id, format_date(&project.updated_at))}
                </div>
            </td>
            <td>
                <div class="chip-list">
                    {row
                        .visible_domains
                        .iter()
                        .map(|d| view! { <span class="chip">{d.clone()}</span> })
                        .collect_view()}
                    {overflow_badge(row.hidden_domains).map(|b| view! { <span class="chip muted">{b}</span> })}
                </div>
            </td>
            <td>
                <div class="user-cell">
                    <span class="avatar" title=project.owner.email.clone()>{project.owner.initial().to_string()}</span>
                    <span>{project.owner.name.clone()}</span>
                </div>
            </td>
            <td>
                <div class="avatar-stack">
                    {row
                        .visible_developers
                        .iter()
                        .map(|u| view! {
                            <span class="avatar" title=u.name.clone()>{u.initial().to_string()}</span>
                        })
                        .collect_view()}
                    {row
                        .team_overflow
                        .and_then(overflow_badge)
                        .map(|b| view! { <span class="avatar muted">{b}</span> })}
                </div>
            </td>
            <td>
                <a href=edit class="btn btn-ghost">"Edit"</a>
            </td>
        </tr>
    }
    .into_view()
}
