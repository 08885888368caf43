//! Project detail page with telemetry charts and the AI health panel

use chrono::Utc;
use leptos::*;
use leptos_router::*;
use opsdeck_common::analysis::{panel_text, AnalysisRequest};
use opsdeck_common::chart::time_label;
use opsdeck_common::routes::Route;
use opsdeck_common::telemetry::generate_middleware_stats;
use opsdeck_common::utils::format_date;
use opsdeck_common::{MiddlewareStat, Project, User};
use crate::api::analyze_health;
use crate::pages::shared::{AreaChart, LineChart, NotFound};
use crate::state::{alert, use_app_state};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Middleware,
    AccessLogs,
}

impl DetailTab {
    const ALL: [DetailTab; 3] = [DetailTab::Overview, DetailTab::Middleware, DetailTab::AccessLogs];

    fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Middleware => "Middleware Resources",
            DetailTab::AccessLogs => "Access Logs",
        }
    }
}

/// Project detail page
#[component]
pub fn ProjectDetail() -> impl IntoView {
    let params = use_params_map();
    let app_state = use_app_state();

    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let project = create_memo(move |_| app_state.store.with_value(|s| s.project(&id()).cloned()));

    view! {
        {move || match project.get() {
            Some(project) => view! { <ProjectView project=project /> }.into_view(),
            None => view! { <NotFound id=id() /> }.into_view(),
        }}
    }
}

#[component]
fn ProjectView(project: Project) -> impl IntoView {
    let (tab, set_tab) = create_signal(DetailTab::Overview);

    // Fresh synthetic telemetry on every visit
    let stats = create_rw_signal(generate_middleware_stats(&mut rand::thread_rng(), Utc::now()));
    log::debug!("Generated {} telemetry points for {}", stats.with_untracked(Vec::len), project.id);

    let edit_href = Route::EditProject(project.id.clone()).path();
    let subtitle = format!("{} · Last updated {}", project.id, format_date(&project.updated_at));
    let name = project.name.clone();

    view! {
        <div class="page project-detail-page">
            <div class="page-header with-actions">
                <div>
                    <a href=Route::Projects.path() class="back-link">"← Projects"</a>
                    <h1>{name}</h1>
                    <p class="page-subtitle">{subtitle}</p>
                </div>
                <a href=edit_href class="btn btn-secondary">"Edit Project"</a>
            </div>

            <div class="tabs">
                {DetailTab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class=move || if tab.get() == t { "tab active" } else { "tab" }
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                DetailTab::Overview => view! { <OverviewTab project=project.clone() /> }.into_view(),
                DetailTab::Middleware => view! { <MiddlewareTab stats=stats /> }.into_view(),
                DetailTab::AccessLogs => view! { <AccessLogsTab stats=stats /> }.into_view(),
            }}
        </div>
    }
}

fn member_list(users: &[User]) -> View {
    if users.is_empty() {
        return view! { <span class="muted">"None assigned"</span> }.into_view();
    }
    users
        .iter()
        .map(|u| view! {
            <div class="user-cell">
                <span class="avatar">{u.initial().to_string()}</span>
                <span>{u.name.clone()}</span>
                <span class="cell-sub">{u.email.clone()}</span>
            </div>
        })
        .collect_view()
}

#[component]
fn OverviewTab(project: Project) -> impl IntoView {
    let description = project
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "No description provided.".to_string());

    view! {
        <div class="detail-grid">
            <div class="card">
                <h3>"Description"</h3>
                <p>{description}</p>

                <h3>"Domains"</h3>
                <ul class="domain-list">
                    {project
                        .domains
                        .iter()
                        .map(|d| {
                            let href = format!("https://{}", d);
                            view! { <li><a href=href target="_blank" rel="noreferrer" class="link">{d.clone()}</a></li> }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class="card">
                <h3>"Owner"</h3>
                {member_list(std::slice::from_ref(&project.owner))}

                <h3>"Admins"</h3>
                {member_list(&project.admins)}

                <h3>"Developers"</h3>
                {member_list(&project.developers)}
            </div>
        </div>
    }
}

fn series(stats: RwSignal<Vec<MiddlewareStat>>, pick: fn(&MiddlewareStat) -> u32) -> Signal<Vec<f64>> {
    Signal::derive(move || stats.with(|s| s.iter().map(|p| f64::from(pick(p))).collect()))
}

fn labels(stats: RwSignal<Vec<MiddlewareStat>>) -> Signal<Vec<String>> {
    Signal::derive(move || stats.with(|s| s.iter().map(|p| time_label(&p.timestamp)).collect()))
}

#[component]
fn MiddlewareTab(stats: RwSignal<Vec<MiddlewareStat>>) -> impl IntoView {
    view! {
        <div class="detail-grid">
            <div class="card chart-card">
                <h3>"CPU Usage (%)"</h3>
                <LineChart values=series(stats, |p| p.cpu) labels=labels(stats) stroke="#8b5cf6" />
            </div>
            <div class="card chart-card">
                <h3>"Memory Usage (%)"</h3>
                <LineChart values=series(stats, |p| p.memory) labels=labels(stats) stroke="#10b981" />
            </div>
        </div>

        <AnalysisPanel stats=stats />
    }
}

#[component]
fn AccessLogsTab(stats: RwSignal<Vec<MiddlewareStat>>) -> impl IntoView {
    view! {
        <div class="card chart-card">
            <h3>"Requests & Errors (24h)"</h3>
            <AreaChart
                values=series(stats, |p| p.requests)
                overlay=series(stats, |p| p.errors)
                labels=labels(stats)
            />
        </div>
    }
}

/// Health summary generated from the latest telemetry window
#[component]
fn AnalysisPanel(stats: RwSignal<Vec<MiddlewareStat>>) -> impl IntoView {
    let app_state = use_app_state();
    let (analysis, set_analysis) = create_signal(String::new());

    let analyze = create_action(move |stats: &Vec<MiddlewareStat>| {
        let config = app_state.config.with_value(|c| c.analysis.clone());
        let stats = stats.clone();
        async move { analyze_health(config, stats).await }
    });

    // Last response wins
    create_effect(move |_| {
        if let Some(outcome) = analyze.value().get() {
            set_analysis.set(panel_text(&outcome));
        }
    });

    let busy = analyze.pending();

    let handle_analyze = move |_| {
        let snapshot = stats.get_untracked();
        let prepared = app_state
            .config
            .with_value(|c| AnalysisRequest::prepare(&c.analysis, &snapshot));

        if let Err(e) = prepared {
            if e.is_user_facing() {
                alert(e.detail());
            } else {
                log::error!("Could not prepare analysis: {}", e);
            }
            return;
        }

        set_analysis.set(String::new());
        analyze.dispatch(snapshot);
    };

    view! {
        <div class="card analysis-panel">
            <div class="panel-header">
                <h3>"✨ AI Health Analysis"</h3>
                <button class="btn btn-primary" on:click=handle_analyze disabled=move || busy.get()>
                    {move || if busy.get() { "Analyzing..." } else { "Analyze with Gemini" }}
                </button>
            </div>
            <Show
                when=move || !analysis.with(String::is_empty)
                fallback=move || view! {
                    <p class="muted">
                        {move || if busy.get() {
                            "Reviewing the last five telemetry points..."
                        } else {
                            "Run an analysis to get a health summary and recommendations."
                        }}
                    </p>
                }
            >
                <pre class="analysis-text">{move || analysis.get()}</pre>
            </Show>
        </div>
    }
}
