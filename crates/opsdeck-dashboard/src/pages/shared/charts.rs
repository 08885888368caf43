//! Inline SVG charts

use leptos::*;
use opsdeck_common::chart::ChartFrame;

const FRAME: ChartFrame = ChartFrame::new(600.0, 200.0, 10.0);

/// Every n-th label is printed under the chart.
const LABEL_STRIDE: usize = 4;

fn x_labels(labels: Vec<String>) -> impl IntoView {
    let stride = if labels.len() > 8 { LABEL_STRIDE } else { 1 };
    view! {
        <div class="chart-x-labels">
            {labels
                .into_iter()
                .step_by(stride)
                .map(|l| view! { <span>{l}</span> })
                .collect_view()}
        </div>
    }
}

fn grid_lines() -> impl IntoView {
    [50.0, 100.0, 150.0]
        .into_iter()
        .map(|y| view! { <line x1="0" y1=y x2=FRAME.width y2=y class="grid-line"/> })
        .collect_view()
}

/// Single-series line chart
#[component]
pub fn LineChart(
    values: Signal<Vec<f64>>,
    labels: Signal<Vec<String>>,
    #[prop(into)] stroke: String,
) -> impl IntoView {
    view! {
        <div class="chart-body">
            <svg class="line-chart" viewBox=FRAME.view_box() preserveAspectRatio="none">
                {grid_lines()}
                <path
                    d=move || values.with(|v| FRAME.line_path(v))
                    stroke=stroke
                    stroke-width="2"
                    fill="none"
                />
            </svg>
            {move || x_labels(labels.get())}
        </div>
    }
}

/// Area series with an optional overlaid line series on the same y axis
#[component]
pub fn AreaChart(
    values: Signal<Vec<f64>>,
    #[prop(optional)] overlay: Option<Signal<Vec<f64>>>,
    labels: Signal<Vec<String>>,
) -> impl IntoView {
    let ceiling = create_memo(move |_| {
        let base = values.with(|v| ChartFrame::ceiling(v));
        overlay.map_or(base, |o| o.with(|v| ChartFrame::ceiling(v)).max(base))
    });

    view! {
        <div class="chart-body">
            <svg class="line-chart" viewBox=FRAME.view_box() preserveAspectRatio="none">
                {grid_lines()}
                <path d=move || values.with(|v| FRAME.area_path_within(v, ceiling.get())) class="chart-area-requests"/>
                <path d=move || values.with(|v| FRAME.line_path_within(v, ceiling.get())) class="chart-line-requests" fill="none"/>
                {overlay.map(|overlay| view! {
                    <path d=move || overlay.with(|v| FRAME.line_path_within(v, ceiling.get())) class="chart-line-errors" fill="none"/>
                })}
            </svg>
            {move || x_labels(labels.get())}
        </div>
    }
}

/// Labelled bar chart over a fixed series
#[component]
pub fn BarChart(points: Vec<(&'static str, u32)>) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|(_, v)| f64::from(*v)).collect();
    let bars = FRAME.bars(&values, 0.6);

    view! {
        <div class="chart-body">
            <svg class="bar-chart" viewBox=FRAME.view_box() preserveAspectRatio="none">
                {grid_lines()}
                {bars
                    .into_iter()
                    .map(|bar| view! {
                        <rect x=bar.x y=bar.y width=bar.width height=bar.height class="chart-bar"/>
                    })
                    .collect_view()}
            </svg>
            <div class="chart-x-labels">
                {points
                    .into_iter()
                    .map(|(label, value)| view! { <span>{format!("{} ({})", label, value)}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
