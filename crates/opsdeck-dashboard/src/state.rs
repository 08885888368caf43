//! Application state management for OpsDeck Dashboard

use leptos::*;
use opsdeck_common::config::DashboardConfig;
use opsdeck_common::error::{DashboardError, Result};
use opsdeck_common::routes::Route;
use opsdeck_common::session::{RouteDecision, Session, SessionStorage};
use opsdeck_common::store::SampleStore;
use opsdeck_common::UserRole;
use web_sys::window;

/// Session flags kept in `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage> {
        window()
            .ok_or_else(|| DashboardError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|_| DashboardError::Storage("localStorage access denied".to_string()))?
            .ok_or_else(|| DashboardError::Storage("localStorage unavailable".to_string()))
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local()?
            .get_item(key)
            .map_err(|_| DashboardError::Storage(format!("failed to read {}", key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::local()?
            .set_item(key, value)
            .map_err(|_| DashboardError::Storage(format!("failed to write {}", key)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::local()?
            .remove_item(key)
            .map_err(|_| DashboardError::Storage(format!("failed to remove {}", key)))
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    pub store: StoredValue<SampleStore>,
    pub config: StoredValue<DashboardConfig>,
    pub authenticated: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let state = Self {
            store: store_value(SampleStore::default()),
            config: store_value(config),
            authenticated: create_rw_signal(false),
        };
        state.authenticated.set(state.session().is_authenticated());
        state
    }

    /// Session over browser storage using the configured keys.
    pub fn session(&self) -> Session<BrowserStorage> {
        Session::new(BrowserStorage, self.config.with_value(|c| c.session.clone()))
    }

    /// Record the mock login
    pub fn login(&self, role: UserRole) {
        if let Err(e) = self.session().login(role) {
            log::error!("Failed to persist session: {}", e);
        }
        self.authenticated.set(self.session().is_authenticated());
    }

    /// Role recorded at login; re-reads when the session changes.
    pub fn role(&self) -> Option<UserRole> {
        self.authenticated.track();
        self.session().role()
    }

    /// Clear session from storage and state
    pub fn logout(&self) {
        if let Err(e) = self.session().logout() {
            log::error!("Failed to clear session: {}", e);
        }
        self.authenticated.set(false);
    }

    /// Decide whether a route may be shown; re-runs when the session changes.
    pub fn guard(&self, route: &Route) -> RouteDecision {
        self.authenticated.track();
        self.session().guard(route)
    }
}

/// Element holding an optional TOML configuration block.
const CONFIG_ELEMENT_ID: &str = "opsdeck-config";

/// Build configuration from the page and build-time values.
///
/// The TOML block in `#opsdeck-config` sets the base. `data-api-key` and
/// `data-analysis-endpoint` on `<html>` override the `API_KEY` value baked in
/// at compile time.
pub fn load_config() -> DashboardConfig {
    let document = window().and_then(|w| w.document());

    let embedded = document
        .as_ref()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    let mut config = DashboardConfig::from_embedded(embedded.as_deref())
        .with_api_key(option_env!("API_KEY"));

    let root = document.and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Some(key) = root.get_attribute("data-api-key") {
            config = config.with_api_key(Some(&key));
        }
        if let Some(endpoint) = root.get_attribute("data-analysis-endpoint") {
            if !endpoint.is_empty() {
                config.analysis.endpoint = endpoint;
            }
        }
    }

    log::debug!(
        "Loaded config (analysis key configured: {})",
        config.analysis.api_key.is_some()
    );
    config
}

/// Provide application state context
pub fn provide_app_state() -> AppState {
    let state = AppState::new(load_config());
    provide_context(state);
    state
}

/// Use application state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}
