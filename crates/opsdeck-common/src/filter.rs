//! OpsDeck Filter - List Views Over the Sample Store
//!
//! Derives the subsets shown by the project list and the cloud resource tabs.
//! All filters preserve store order and never mutate the store.
//!
//! Key Features:
//! - Case-insensitive project search over name and domains, plus owner filter
//! - Table row model with domain and team overflow badges
//! - Resource-type tabs and the simulated sync busy flag
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::types::{CloudResource, Project, ResourceType, User};

// =============================================================================
// Project Filtering
// =============================================================================

/// Search state of the project list. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search: String,
    pub owner: String,
}

impl ProjectFilter {
    pub fn new(search: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            owner: owner.into(),
        }
    }

    /// True if the project satisfies both the search term and the owner filter.
    pub fn matches(&self, project: &Project) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = project.name.to_lowercase().contains(&term)
            || project
                .domains
                .iter()
                .any(|d| d.to_lowercase().contains(&term));

        let matches_owner = self.owner.is_empty()
            || project
                .owner
                .name
                .to_lowercase()
                .contains(&self.owner.to_lowercase());

        matches_search && matches_owner
    }

    /// Matching projects in store order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Message shown when no project matches.
pub const EMPTY_PROJECTS_MESSAGE: &str = "No projects found matching your criteria.";

/// Domains shown inline in the project table before collapsing.
const VISIBLE_DOMAINS: usize = 3;

/// Developer avatars shown inline in the project table.
const VISIBLE_DEVELOPERS: usize = 2;

/// Display model for one row of the project table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow<'a> {
    pub project: &'a Project,
    pub visible_domains: &'a [String],
    pub hidden_domains: usize,
    pub visible_developers: &'a [User],
    /// Count for the `+N` team badge, when shown.
    pub team_overflow: Option<usize>,
}

impl<'a> ProjectRow<'a> {
    pub fn new(project: &'a Project) -> Self {
        let shown = project.domains.len().min(VISIBLE_DOMAINS);
        let dev_shown = project.developers.len().min(VISIBLE_DEVELOPERS);
        let team = project.developers.len() + project.admins.len();

        Self {
            project,
            visible_domains: &project.domains[..shown],
            hidden_domains: project.domains.len() - shown,
            visible_developers: &project.developers[..dev_shown],
            team_overflow: (team > 3).then(|| team - VISIBLE_DEVELOPERS),
        }
    }
}

// =============================================================================
// Resource Tabbing
// =============================================================================

/// Resources of exactly the given type, in store order.
pub fn filter_by_type(resources: &[CloudResource], resource_type: ResourceType) -> Vec<&CloudResource> {
    resources
        .iter()
        .filter(|r| r.resource_type == resource_type)
        .collect()
}

/// Active tab of the cloud resource view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceTabs {
    active: ResourceType,
}

impl ResourceTabs {
    pub fn active(&self) -> ResourceType {
        self.active
    }

    pub fn select(&mut self, resource_type: ResourceType) {
        self.active = resource_type;
    }

    pub fn is_active(&self, resource_type: ResourceType) -> bool {
        self.active == resource_type
    }

    /// Resources shown under the active tab.
    pub fn visible<'a>(&self, resources: &'a [CloudResource]) -> Vec<&'a CloudResource> {
        filter_by_type(resources, self.active)
    }

    pub fn label(resource_type: ResourceType) -> &'static str {
        match resource_type {
            ResourceType::Ec2 => "AWS EC2",
            ResourceType::Redis => "AWS Redis",
            ResourceType::Rds => "AWS RDS",
        }
    }
}

impl Default for ResourceTabs {
    fn default() -> Self {
        Self {
            active: ResourceType::Ec2,
        }
    }
}

/// Busy flag of the simulated resource sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncState {
    busy: bool,
}

impl SyncState {
    /// Start a sync. Returns false if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        tracing::debug!("resource sync started");
        true
    }

    /// Finish the sync. Nothing is fetched or mutated.
    pub fn finish(&mut self) {
        self.busy = false;
        tracing::debug!("resource sync finished");
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy {
            "Syncing with AWS..."
        } else {
            "Sync Resources"
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SampleStore;

    fn names<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let store = SampleStore::default();
        let result = ProjectFilter::default().apply(store.projects());
        assert_eq!(result.len(), store.projects().len());
        assert!(result.iter().zip(store.projects()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_search_by_name_and_domain() {
        let store = SampleStore::default();

        let result = ProjectFilter::new("pay", "").apply(store.projects());
        assert_eq!(names(&result), vec!["Payment Gateway Service"]);

        let result = ProjectFilter::new("DRIVER.example", "").apply(store.projects());
        assert_eq!(names(&result), vec!["Logistics Tracker"]);

        let result = ProjectFilter::new("example.com", "").apply(store.projects());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_owner_filter() {
        let store = SampleStore::default();

        let result = ProjectFilter::new("", "alice").apply(store.projects());
        assert_eq!(names(&result), vec!["E-Commerce Core", "Logistics Tracker"]);

        let result = ProjectFilter::new("shop", "charlie").apply(store.projects());
        assert!(result.is_empty());
    }

    #[test]
    fn test_project_rows() {
        let store = SampleStore::default();

        let row = ProjectRow::new(store.project("P-1001").unwrap());
        assert_eq!(row.visible_domains.len(), 3);
        assert_eq!(row.hidden_domains, 1);
        assert_eq!(row.visible_developers.len(), 2);
        assert_eq!(row.team_overflow, Some(2));

        let row = ProjectRow::new(store.project("P-1002").unwrap());
        assert_eq!(row.hidden_domains, 0);
        assert_eq!(row.team_overflow, None);
    }

    #[test]
    fn test_tabs() {
        let store = SampleStore::default();
        let mut tabs = ResourceTabs::default();
        assert!(tabs.is_active(ResourceType::Ec2));
        assert_eq!(tabs.visible(store.resources()).len(), 2);

        tabs.select(ResourceType::Rds);
        let visible = tabs.visible(store.resources());
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.resource_type == ResourceType::Rds));
        assert_eq!(ResourceTabs::label(ResourceType::Redis), "AWS Redis");
    }

    #[test]
    fn test_sync_state() {
        let mut sync = SyncState::default();
        assert_eq!(sync.button_label(), "Sync Resources");
        assert!(sync.begin());
        assert!(!sync.begin());
        assert!(sync.is_busy());
        assert_eq!(sync.button_label(), "Syncing with AWS...");
        sync.finish();
        assert!(!sync.is_busy());
    }
}
