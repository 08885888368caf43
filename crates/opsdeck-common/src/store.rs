//! OpsDeck Store - Static Sample Data
//!
//! The fixed inventory standing in for a real backend. Timestamps are built
//! relative to a caller-supplied instant so views and tests agree on "now".
//!
//! Key Features:
//! - Four users, three projects and five cloud resources
//! - Lookups by user and project identifier
//! - Read-only after construction
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::types::{CloudResource, Project, ResourceStatus, ResourceType, User, UserRole};
use chrono::{DateTime, Duration, Utc};

// =============================================================================
// Sample Store
// =============================================================================

/// In-memory collections of users, projects and cloud resources.
#[derive(Debug, Clone)]
pub struct SampleStore {
    users: Vec<User>,
    projects: Vec<Project>,
    resources: Vec<CloudResource>,
}

impl SampleStore {
    /// Build the sample inventory relative to `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        let users = sample_users();
        let projects = sample_projects(&users, now);
        let resources = sample_resources(now);

        tracing::debug!(
            users = users.len(),
            projects = projects.len(),
            resources = resources.len(),
            "sample store initialized"
        );

        Self {
            users,
            projects,
            resources,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn resources(&self) -> &[CloudResource] {
        &self.resources
    }

    /// Look up a user by identifier.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up a project by identifier.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Default owner for newly created projects.
    pub fn first_user(&self) -> &User {
        &self.users[0]
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

fn user(id: &str, name: &str, seed: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", seed),
        avatar: format!("https://picsum.photos/seed/{}/32/32", seed),
        role,
    }
}

fn sample_users() -> Vec<User> {
    vec![
        user("u1", "Alice Ops", "alice", UserRole::Admin),
        user("u2", "Bob Dev", "bob", UserRole::Dev),
        user("u3", "Charlie Manager", "charlie", UserRole::Admin),
        user("u4", "Dave Coder", "dave", UserRole::Dev),
        user("u5", "Eve Monitor", "eve", UserRole::Viewer),
    ]
}

fn sample_projects(users: &[User], now: DateTime<Utc>) -> Vec<Project> {
    let domains = |list: &[&str]| list.iter().map(|d| d.to_string()).collect::<Vec<_>>();

    vec![
        Project {
            id: "P-1001".to_string(),
            name: "E-Commerce Core".to_string(),
            domains: domains(&[
                "shop.example.com",
                "api.shop.example.com",
                "admin.shop.example.com",
                "cdn.shop.example.com",
            ]),
            owner: users[0].clone(),
            developers: vec![users[1].clone(), users[3].clone()],
            admins: vec![users[0].clone(), users[2].clone()],
            updated_at: now - Duration::minutes(30),
            description: Some("Main monolith for the online store.".to_string()),
        },
        Project {
            id: "P-1002".to_string(),
            name: "Payment Gateway Service".to_string(),
            domains: domains(&["pay.example.com"]),
            owner: users[2].clone(),
            developers: vec![users[1].clone()],
            admins: vec![users[2].clone()],
            updated_at: now - Duration::days(1),
            description: Some("Microservice handling stripe integrations.".to_string()),
        },
        Project {
            id: "P-1003".to_string(),
            name: "Logistics Tracker".to_string(),
            domains: domains(&["track.example.com", "driver.example.com"]),
            owner: users[0].clone(),
            developers: vec![users[3].clone()],
            admins: vec![users[0].clone()],
            updated_at: now - Duration::days(2),
            description: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    resource_id: &str,
    name: &str,
    resource_type: ResourceType,
    status: ResourceStatus,
    spec: &str,
    ip_address: Option<&str>,
    now: DateTime<Utc>,
) -> CloudResource {
    CloudResource {
        id: id.to_string(),
        resource_id: resource_id.to_string(),
        name: name.to_string(),
        resource_type,
        status,
        region: "us-east-1".to_string(),
        ip_address: ip_address.map(str::to_string),
        spec: Some(spec.to_string()),
        updated_at: now,
    }
}

fn sample_resources(now: DateTime<Utc>) -> Vec<CloudResource> {
    use ResourceStatus::*;
    use ResourceType::*;

    vec![
        resource("c1", "i-0a1b2c3d4e5f", "web-server-01", Ec2, Running, "t3.medium", Some("10.0.1.5"), now),
        resource("c2", "i-1a2b3c4d5e6f", "worker-node-01", Ec2, Stopped, "m5.large", Some("10.0.2.10"), now),
        resource("c3", "redis-cache-primary", "Session Cache", Redis, Available, "cache.t3.micro", None, now),
        resource("c4", "db-prod-primary", "Production DB", Rds, Available, "db.r5.large", None, now),
        resource("c5", "db-prod-replica", "Read Replica 1", Rds, Available, "db.r5.large", None, now),
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn store() -> SampleStore {
        SampleStore::new(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_collection_sizes() {
        let store = store();
        assert_eq!(store.users().len(), 5);
        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.resources().len(), 5);
    }

    #[test]
    fn test_lookups() {
        let store = store();
        assert_eq!(store.user("u3").unwrap().name, "Charlie Manager");
        assert_eq!(store.project("P-1002").unwrap().owner.id, "u3");
        assert!(store.project("P-9999").is_none());
        assert!(store.user("u0").is_none());
        assert_eq!(store.first_user().id, "u1");
    }

    #[test]
    fn test_relative_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let store = SampleStore::new(now);

        let ages: Vec<_> = store
            .projects()
            .iter()
            .map(|p| (now - p.updated_at).num_minutes())
            .collect();
        assert_eq!(ages, vec![30, 24 * 60, 48 * 60]);
        assert!(store.resources().iter().all(|r| r.updated_at == now));
    }

    #[test]
    fn test_optional_fields() {
        let store = store();
        assert!(store.project("P-1003").unwrap().description.is_none());

        let redis = store.resources().iter().find(|r| r.id == "c3").unwrap();
        assert!(redis.ip_address.is_none());
        assert_eq!(redis.spec.as_deref(), Some("cache.t3.micro"));
    }
}
