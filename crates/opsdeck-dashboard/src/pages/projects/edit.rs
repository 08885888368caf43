//! Project create/edit form
//! Saving is a mock: the buffer is discarded and the user is sent back to the list

use chrono::Utc;
use leptos::*;
use leptos_router::*;
use opsdeck_common::edit::{candidates, EditBuffer, EditMode};
use opsdeck_common::error::DashboardError;
use opsdeck_common::routes::Route;
use opsdeck_common::TeamRole;
use crate::pages::shared::NotFound;
use crate::state::{alert, use_app_state};

/// Create or edit page, depending on whether the route carries an id
#[component]
pub fn EditProject() -> impl IntoView {
    let params = use_params_map();
    let app_state = use_app_state();

    let open_buffer = move || -> Result<EditBuffer, DashboardError> {
        let id = params.with(|p| p.get("id").cloned());
        app_state.store.with_value(|store| match id {
            Some(id) => EditBuffer::edit(store, &id),
            None => Ok(EditBuffer::create(store, &mut rand::thread_rng(), Utc::now())),
        })
    };

    let buffer = create_memo(move |_| open_buffer());

    view! {
        {move || match buffer.get() {
            Ok(buffer) => view! { <ProjectForm buffer=buffer /> }.into_view(),
            Err(e) if e.is_not_found() => {
                log::warn!("Cannot open project form: {}", e);
                view! { <NotFound id=e.detail().to_string() /> }.into_view()
            }
            Err(e) => {
                log::error!("Cannot open project form: {}", e);
                view! { <div class="card error-panel">{e.to_string()}</div> }.into_view()
            }
        }}
    }
}

#[component]
fn ProjectForm(buffer: EditBuffer) -> impl IntoView {
    let navigate = use_navigate();

    let mode = buffer.mode();
    let buffer = create_rw_signal(Some(buffer));

    let title = match mode {
        EditMode::Create => "Create New Project",
        EditMode::Edit => "Edit Project",
    };

    let field = move |f: fn(&EditBuffer) -> String| {
        move || buffer.with(|b| b.as_ref().map(f).unwrap_or_default())
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = buffer.try_update(Option::take).flatten() else {
            return;
        };
        let outcome = draft.submit();
        alert(outcome.message);
        navigate(&outcome.redirect.path(), Default::default());
    };

    view! {
        <div class="page project-form-page">
            <div class="page-header">
                <a href=Route::Projects.path() class="back-link">"← Projects"</a>
                <h1>{title}</h1>
            </div>

            <form class="card project-form" on:submit=on_submit>
                <div class="form-row">
                    <label class="form-label">"Project ID"</label>
                    <input
                        type="text"
                        class="form-input"
                        disabled=true
                        prop:value=field(|b| b.draft().id.clone())
                    />
                </div>

                <div class="form-row">
                    <label class="form-label">"Project Name"</label>
                    <input
                        type="text"
                        class="form-input"
                        required=true
                        placeholder="e.g. Payment Gateway Service"
                        prop:value=field(|b| b.draft().name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            buffer.update(|b| if let Some(b) = b { b.set_name(value) });
                        }
                    />
                </div>

                <div class="form-row">
                    <label class="form-label">"Description"</label>
                    <textarea
                        class="form-input"
                        rows="3"
                        prop:value=field(|b| b.draft().description.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            buffer.update(|b| if let Some(b) = b { b.set_description(value) });
                        }
                    ></textarea>
                </div>

                <div class="team-grid">
                    <TeamPicker title="Developers" role=TeamRole::Developer buffer=buffer />
                    <TeamPicker title="Admins" role=TeamRole::Admin buffer=buffer />
                </div>

                <div class="form-actions">
                    <a href=Route::Projects.path() class="btn btn-ghost">"Cancel"</a>
                    <button type="submit" class="btn btn-primary">
                        {match mode {
                            EditMode::Create => "Create Project",
                            EditMode::Edit => "Save Changes",
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Checkbox list of the users eligible for one team
#[component]
fn TeamPicker(
    title: &'static str,
    role: TeamRole,
    buffer: RwSignal<Option<EditBuffer>>,
) -> impl IntoView {
    let app_state = use_app_state();
    let users = app_state
        .store
        .with_value(|store| candidates(store, role).into_iter().cloned().collect::<Vec<_>>());

    view! {
        <fieldset class="team-picker">
            <legend>{title}</legend>
            {users
                .into_iter()
                .map(|user| {
                    let id = user.id.clone();
                    let checked = {
                        let id = id.clone();
                        move || buffer.with(|b| b.as_ref().is_some_and(|b| b.is_member(&id, role)))
                    };
                    let toggle = move |_| {
                        buffer.update(|b| {
                            if let Some(b) = b {
                                app_state.store.with_value(|store| b.toggle_member(store, &id, role));
                            }
                        });
                    };

                    view! {
                        <label class="team-option">
                            <input type="checkbox" prop:checked=checked on:change=toggle />
                            <span class="avatar">{user.initial().to_string()}</span>
                            <span>{user.name.clone()}</span>
                            <span class="cell-sub">{user.role.to_string()}</span>
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}
