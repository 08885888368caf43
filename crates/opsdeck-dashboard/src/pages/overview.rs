//! Overview page: headline counts and two summary charts

use leptos::*;
use opsdeck_common::summary::DashboardSummary;
use opsdeck_common::utils::format_count;
use crate::pages::shared::{BarChart, LineChart, StatCard};
use crate::state::use_app_state;

/// Overview page
#[component]
pub fn Overview() -> impl IntoView {
    let app_state = use_app_state();
    let summary = app_state.store.with_value(DashboardSummary::from_store);

    let by_type: Vec<(&'static str, u32)> = summary
        .resources_by_type
        .iter()
        .map(|p| (p.label, p.value))
        .collect();
    let traffic_values: Vec<f64> = summary.traffic.iter().map(|p| f64::from(p.value)).collect();
    let traffic_labels: Vec<String> = summary.traffic.iter().map(|p| p.label.to_string()).collect();

    view! {
        <div class="page overview-page">
            <div class="page-header">
                <h1>"Dashboard Overview"</h1>
                <p class="page-subtitle">"Projects, infrastructure and alerts at a glance"</p>
            </div>

            <div class="stats-grid">
                <StatCard title="Total Projects" value=format_count(summary.project_count as u64) color="blue" />
                <StatCard title="Cloud Resources" value=format_count(summary.resource_count as u64) color="purple" />
                <StatCard title="Running EC2" value=format_count(summary.running_ec2 as u64) color="green" />
                <StatCard title="Active Alerts" value=format_count(summary.alerts as u64) color="red" />
            </div>

            <div class="charts-grid">
                <div class="card chart-card">
                    <h3>"Resources by Type"</h3>
                    <BarChart points=by_type />
                </div>
                <div class="card chart-card">
                    <h3>"Traffic (requests)"</h3>
                    <LineChart
                        values=Signal::derive(move || traffic_values.clone())
                        labels=Signal::derive(move || traffic_labels.clone())
                        stroke="#3b82f6"
                    />
                </div>
            </div>
        </div>
    }
}
