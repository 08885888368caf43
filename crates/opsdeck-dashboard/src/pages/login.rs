//! Login page component
//! Single sign-on is simulated with a fixed delay

use leptos::*;
use leptos_router::*;
use opsdeck_common::UserRole;
use crate::state::use_app_state;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let navigate = use_navigate();
    let app_state = use_app_state();

    let (loading, set_loading) = create_signal(false);

    // Simulate the identity-provider round trip
    let handle_login = move |_| {
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        log::info!("Starting mock SSO login");

        let navigate = navigate.clone();
        let delay = app_state.config.with_value(|c| c.timing.login_delay());
        set_timeout(move || {
            app_state.login(UserRole::Admin);
            set_loading.set(false);
            navigate("/", Default::default());
        }, delay);
    };

    view! {
        <div class="login-container">
            <div class="login-content">
                // Logo Section
                <div class="logo-section">
                    <div class="logo">
                        <svg viewBox="0 0 100 100" width="64" height="64">
                            <rect width="100" height="100" rx="20" fill="#3b82f6"/>
                            <path d="M30 60 L50 30 L70 60 Z" fill="none" stroke="white" stroke-width="4" stroke-linejoin="round"/>
                            <circle cx="50" cy="70" r="6" fill="white"/>
                        </svg>
                    </div>
                    <h1 class="welcome-text">"OpsDeck"</h1>
                    <div class="design-line"></div>
                    <p class="secured-text">"Sign in to manage projects and cloud resources"</p>
                </div>

                <div class="form-section">
                    <button
                        class="auth-button"
                        on:click=handle_login
                        disabled=move || loading.get()
                    >
                        <Show
                            when=move || loading.get()
                            fallback=|| view! {
                                <span class="lock-icon">"🔒"</span>
                                <span>"Login with Keycloak SSO"</span>
                            }
                        >
                            <div class="spinner" style="width: 20px; height: 20px;"></div>
                            <span>"Redirecting..."</span>
                        </Show>
                    </button>

                    <div class="demo-hint">
                        <p>"Protected by Enterprise SSO."</p>
                        <p>"Contact IT support for access issues."</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
