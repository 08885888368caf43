//! OpsDeck Session - Client-Local Session Guard
//!
//! An explicit session object over a key/value storage backend. It gates
//! navigation to protected routes on a single flag and is trivially
//! bypassable: it is not a security boundary.
//!
//! Key Features:
//! - Pluggable storage (browser localStorage or in-memory)
//! - Mock login writing the authenticated and role flags
//! - Route guard redirecting to the login page
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::config::SessionConfig;
use crate::error::Result;
use crate::routes::Route;
use crate::types::UserRole;
use std::cell::RefCell;
use std::collections::HashMap;

// =============================================================================
// Storage
// =============================================================================

/// String key/value storage holding the session flags.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage, used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// Session
// =============================================================================

/// Outcome of activating a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}

/// Session state backed by a storage implementation.
#[derive(Debug)]
pub struct Session<S> {
    storage: S,
    keys: SessionConfig,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S, keys: SessionConfig) -> Self {
        Self { storage, keys }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True when the authenticated flag is present. Storage failures count as signed out.
    pub fn is_authenticated(&self) -> bool {
        match self.storage.get(&self.keys.authenticated_key) {
            Ok(flag) => flag.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "session storage unreadable");
                false
            }
        }
    }

    /// Role recorded at login, if any.
    pub fn role(&self) -> Option<UserRole> {
        self.storage
            .get(&self.keys.role_key)
            .ok()
            .flatten()
            .and_then(|r| UserRole::parse(&r))
    }

    /// Record a successful (mock) login.
    pub fn login(&self, role: UserRole) -> Result<()> {
        self.storage.set(&self.keys.authenticated_key, "true")?;
        self.storage.set(&self.keys.role_key, role.as_str())?;
        tracing::info!(%role, "session started");
        Ok(())
    }

    /// Clear both session flags.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(&self.keys.authenticated_key)?;
        self.storage.remove(&self.keys.role_key)?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// Decide whether the route may be shown.
    pub fn guard(&self, route: &Route) -> RouteDecision {
        if !route.is_protected() || self.is_authenticated() {
            RouteDecision::Allow
        } else {
            tracing::debug!(%route, "redirecting unauthenticated visit to login");
            RouteDecision::Redirect(Route::Login)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    fn session() -> Session<MemoryStorage> {
        Session::new(MemoryStorage::new(), SessionConfig::default())
    }

    #[test]
    fn test_starts_signed_out() {
        let session = session();
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
        assert_eq!(
            session.guard(&Route::Projects),
            RouteDecision::Redirect(Route::Login)
        );
        assert_eq!(session.guard(&Route::Login), RouteDecision::Allow);
    }

    #[test]
    fn test_login_and_logout() {
        let session = session();
        session.login(UserRole::Admin).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(UserRole::Admin));
        assert_eq!(session.storage().get("isAuthenticated").unwrap().as_deref(), Some("true"));
        assert_eq!(session.guard(&Route::Resources), RouteDecision::Allow);

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.storage().get("userRole").unwrap(), None);
        assert_eq!(
            session.guard(&Route::ProjectDetail("P-1001".into())),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_any_flag_value_counts() {
        let session = session();
        session.storage().set("isAuthenticated", "false").unwrap();
        assert!(session.is_authenticated());
    }

    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(DashboardError::Storage("denied".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(DashboardError::Storage("denied".into()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(DashboardError::Storage("denied".into()))
        }
    }

    #[test]
    fn test_broken_storage() {
        let session = Session::new(BrokenStorage, SessionConfig::default());
        assert!(!session.is_authenticated());
        assert!(session.login(UserRole::Dev).is_err());
        assert_eq!(
            session.guard(&Route::Overview),
            RouteDecision::Redirect(Route::Login)
        );
    }
}
