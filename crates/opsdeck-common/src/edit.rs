//! OpsDeck Edit - Project Create/Edit Buffer
//!
//! A transient, in-memory copy of a project used by the project form. Changes
//! made through an [`EditBuffer`] are never committed: submitting consumes the
//! buffer and the sample store is left exactly as it was.
//!
//! Key Features:
//! - Create mode with a fresh random identifier
//! - Edit mode over a copy of a stored project
//! - Team membership toggles restricted to eligible users
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::error::{DashboardError, Result};
use crate::routes::Route;
use crate::store::SampleStore;
use crate::types::{Project, TeamRole, User, UserRole};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Confirmation shown after the form is submitted.
pub const SAVE_MESSAGE: &str = "Data saved! (Mock implementation)";

/// How the buffer was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit,
}

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: &'static str,
    pub redirect: Route,
}

/// Working copy of a project behind the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    mode: EditMode,
    draft: Project,
}

impl EditBuffer {
    /// Open a buffer for a new project with a random `P-<n>` identifier.
    ///
    /// Identifiers already held by a stored project are redrawn.
    pub fn create<R: Rng>(store: &SampleStore, rng: &mut R, now: DateTime<Utc>) -> Self {
        let id = loop {
            let id = format!("P-{}", rng.gen_range(0..10_000u32));
            if store.project(&id).is_none() {
                break id;
            }
        };
        tracing::debug!(%id, "opened create buffer");

        Self {
            mode: EditMode::Create,
            draft: Project {
                id,
                name: String::new(),
                domains: Vec::new(),
                owner: store.first_user().clone(),
                developers: Vec::new(),
                admins: Vec::new(),
                updated_at: now,
                description: Some(String::new()),
            },
        }
    }

    /// Open a buffer holding a copy of an existing project.
    pub fn edit(store: &SampleStore, id: &str) -> Result<Self> {
        let project = store
            .project(id)
            .ok_or_else(|| DashboardError::ProjectNotFound(id.to_string()))?;

        Ok(Self {
            mode: EditMode::Edit,
            draft: project.clone(),
        })
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn draft(&self) -> &Project {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = Some(description.into());
    }

    pub fn is_member(&self, user_id: &str, role: TeamRole) -> bool {
        self.draft.team(role).iter().any(|u| u.id == user_id)
    }

    /// Add the user to the team if absent, remove them if present.
    ///
    /// Unknown user identifiers are ignored. Returns whether the user is a
    /// member of the team afterwards.
    pub fn toggle_member(&mut self, store: &SampleStore, user_id: &str, role: TeamRole) -> bool {
        let Some(user) = store.user(user_id) else {
            tracing::warn!(user_id, "ignoring toggle for unknown user");
            return false;
        };

        let team = self.draft.team_mut(role);
        if let Some(pos) = team.iter().position(|u| u.id == user_id) {
            team.remove(pos);
            false
        } else {
            team.push(user.clone());
            true
        }
    }

    /// Discard the buffer. Nothing is written back to the store.
    pub fn submit(self) -> SubmitOutcome {
        tracing::info!(id = %self.draft.id, "project form submitted (not persisted)");
        SubmitOutcome {
            message: SAVE_MESSAGE,
            redirect: Route::Projects,
        }
    }
}

/// Users that may be picked for the given team.
pub fn candidates(store: &SampleStore, role: TeamRole) -> Vec<&User> {
    store
        .users()
        .iter()
        .filter(|u| match role {
            TeamRole::Developer => matches!(u.role, UserRole::Dev | UserRole::Admin),
            TeamRole::Admin => u.role == UserRole::Admin,
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_create_defaults() {
        let store = SampleStore::default();
        let buffer = EditBuffer::create(&store, &mut StdRng::seed_from_u64(3), Utc::now());

        assert_eq!(buffer.mode(), EditMode::Create);
        let draft = buffer.draft();
        assert!(draft.id.starts_with("P-"));
        assert!(draft.name.is_empty());
        assert!(draft.domains.is_empty());
        assert!(draft.developers.is_empty());
        assert!(draft.admins.is_empty());
        assert_eq!(draft.owner.id, "u1");
        assert_eq!(draft.description.as_deref(), Some(""));
    }

    #[test]
    fn test_create_never_reuses_stored_id() {
        let store = SampleStore::default();
        for seed in 0..20_000 {
            let buffer = EditBuffer::create(&store, &mut StdRng::seed_from_u64(seed), Utc::now());
            let id = &buffer.draft().id;
            assert!(store.project(id).is_none(), "seed {} produced stored id {}", seed, id);
        }
    }

    #[test]
    fn test_edit_copies_project() {
        let store = SampleStore::default();
        let mut buffer = EditBuffer::edit(&store, "P-1002").unwrap();
        assert_eq!(buffer.mode(), EditMode::Edit);
        assert_eq!(buffer.draft(), store.project("P-1002").unwrap());

        buffer.set_name("Payments v2");
        buffer.set_description("");
        assert_eq!(buffer.draft().name, "Payments v2");
        assert_eq!(store.project("P-1002").unwrap().name, "Payment Gateway Service");
    }

    #[test]
    fn test_edit_unknown_project() {
        let store = SampleStore::default();
        let err = EditBuffer::edit(&store, "P-0000").unwrap_err();
        assert_eq!(err, DashboardError::ProjectNotFound("P-0000".to_string()));
    }

    #[test]
    fn test_toggle_member() {
        let store = SampleStore::default();
        let mut buffer = EditBuffer::edit(&store, "P-1001").unwrap();

        assert!(buffer.is_member("u2", TeamRole::Developer));
        assert!(!buffer.toggle_member(&store, "u2", TeamRole::Developer));
        assert!(!buffer.is_member("u2", TeamRole::Developer));
        assert_eq!(buffer.draft().developers.len(), 1);

        assert!(buffer.toggle_member(&store, "u2", TeamRole::Developer));
        assert_eq!(buffer.draft().developers.last().unwrap().id, "u2");

        // Admin team is independent of the developer team.
        assert!(!buffer.is_member("u2", TeamRole::Admin));
    }

    #[test]
    fn test_toggle_unknown_user() {
        let store = SampleStore::default();
        let mut buffer = EditBuffer::edit(&store, "P-1003").unwrap();
        let before = buffer.clone();
        assert!(!buffer.toggle_member(&store, "u404", TeamRole::Admin));
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_submit_discards() {
        let store = SampleStore::default();
        let mut buffer = EditBuffer::edit(&store, "P-1001").unwrap();
        buffer.set_name("Renamed");

        let outcome = buffer.submit();
        assert_eq!(outcome.message, SAVE_MESSAGE);
        assert_eq!(outcome.redirect, Route::Projects);
        assert_eq!(store.project("P-1001").unwrap().name, "E-Commerce Core");
    }

    #[test]
    fn test_candidates() {
        let store = SampleStore::default();
        let devs: Vec<_> = candidates(&store, TeamRole::Developer).iter().map(|u| u.id.as_str()).collect();
        assert_eq!(devs, vec!["u1", "u2", "u3", "u4"]);

        let admins: Vec<_> = candidates(&store, TeamRole::Admin).iter().map(|u| u.id.as_str()).collect();
        assert_eq!(admins, vec!["u1", "u3"]);
    }
}
