//! Cloud resource inventory with type tabs and a simulated sync

use leptos::*;
use opsdeck_common::filter::{ResourceTabs, SyncState};
use opsdeck_common::utils::format_date;
use opsdeck_common::{CloudResource, ResourceType};
use crate::state::use_app_state;

/// Cloud resources page
#[component]
pub fn CloudResources() -> impl IntoView {
    let app_state = use_app_state();

    let tabs = create_rw_signal(ResourceTabs::default());
    let sync = create_rw_signal(SyncState::default());

    let sync_action = create_action(move |_: &()| {
        let delay = app_state.config.with_value(|c| c.timing.sync_delay());
        async move {
            gloo_timers::future::sleep(delay).await;
            sync.update(SyncState::finish);
        }
    });

    let start_sync = move |_| {
        let mut started = false;
        sync.update(|s| started = s.begin());
        if started {
            log::info!("Syncing resources with AWS");
            sync_action.dispatch(());
        }
    };

    let rows = move || {
        let active = tabs.get();
        app_state.store.with_value(|store| {
            active
                .visible(store.resources())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page resources-page">
            <div class="page-header with-actions">
                <div>
                    <h1>"Cloud Resources"</h1>
                    <p class="page-subtitle">"AWS Account ID: 1234-5678-9012 (US-EAST-1)"</p>
                </div>
                <button
                    class="btn btn-secondary"
                    on:click=start_sync
                    disabled=move || sync.with(SyncState::is_busy)
                >
                    <span class=move || if sync.with(SyncState::is_busy) { "sync-icon spinning" } else { "sync-icon" }>"⟳"</span>
                    {move || sync.with(SyncState::button_label)}
                </button>
            </div>

            <div class="tabs">
                {ResourceType::ALL
                    .into_iter()
                    .map(|ty| view! {
                        <button
                            class=move || if tabs.with(|t| t.is_active(ty)) { "tab active" } else { "tab" }
                            on:click=move |_| tabs.update(|t| t.select(ty))
                        >
                            {ResourceTabs::label(ty)}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="card table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name / ID"</th>
                            <th>"Status"</th>
                            <th>"Region"</th>
                            <th>"Details"</th>
                            <th>"Last Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|r| r.id.clone()
                            children=|resource| view! { <ResourceRow resource=resource /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn ResourceRow(resource: CloudResource) -> impl IntoView {
    let details = match (&resource.ip_address, &resource.spec) {
        (Some(ip), Some(spec)) => format!("{} · {}", ip, spec),
        (Some(ip), None) => ip.clone(),
        (None, Some(spec)) => spec.clone(),
        (None, None) => "-".to_string(),
    };

    view! {
        <tr>
            <td>
                <div class="cell-title">{resource.name.clone()}</div>
                <div class="cell-sub mono">{resource.resource_id.clone()}</div>
            </td>
            <td>
                <span class=format!("badge {}", resource.status.badge_class())>
                    {resource.status.to_string()}
                </span>
            </td>
            <td>{resource.region.clone()}</td>
            <td class="mono">{details}</td>
            <td>{format_date(&resource.updated_at)}</td>
        </tr>
    }
}
