//! OpsDeck Types - Core Data Types
//!
//! Shapes of everything the dashboard displays. Field names serialize in the
//! camelCase form consumed by the chart and storage layers.
//!
//! Key Features:
//! - Users with enumerated roles
//! - Projects with owner, developer and admin teams
//! - Cloud resources with type and lifecycle status
//! - Synthetic middleware telemetry points
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Users
// =============================================================================

/// Role of a dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Dev,
    Viewer,
}

impl UserRole {
    /// Wire form, as stored in the session role flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Dev => "DEV",
            UserRole::Viewer => "VIEWER",
        }
    }

    /// Parse the wire form. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(UserRole::Admin),
            "DEV" => Some(UserRole::Dev),
            "VIEWER" => Some(UserRole::Viewer),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sample user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: UserRole,
}

impl User {
    /// Single-letter fallback shown when the avatar image is missing.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

// =============================================================================
// Projects
// =============================================================================

/// Team a user can be assigned to within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamRole {
    Developer,
    Admin,
}

/// A project with its domains and team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub domains: Vec<String>,
    pub owner: User,
    pub developers: Vec<User>,
    pub admins: Vec<User>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    /// Members of the given team.
    pub fn team(&self, role: TeamRole) -> &[User] {
        match role {
            TeamRole::Developer => &self.developers,
            TeamRole::Admin => &self.admins,
        }
    }

    pub(crate) fn team_mut(&mut self, role: TeamRole) -> &mut Vec<User> {
        match role {
            TeamRole::Developer => &mut self.developers,
            TeamRole::Admin => &mut self.admins,
        }
    }
}

// =============================================================================
// Cloud Resources
// =============================================================================

/// Kind of managed cloud resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceType {
    Ec2,
    Redis,
    Rds,
}

impl ResourceType {
    /// All resource types in tab order.
    pub const ALL: [ResourceType; 3] = [ResourceType::Ec2, ResourceType::Redis, ResourceType::Rds];
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Ec2 => write!(f, "EC2"),
            ResourceType::Redis => write!(f, "REDIS"),
            ResourceType::Rds => write!(f, "RDS"),
        }
    }
}

/// Lifecycle status reported for a cloud resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Running,
    Stopped,
    Terminated,
    Available,
}

impl ResourceStatus {
    /// CSS modifier for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ResourceStatus::Running => "success",
            ResourceStatus::Stopped => "danger",
            ResourceStatus::Available => "info",
            ResourceStatus::Terminated => "muted",
        }
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceStatus::Running => write!(f, "running"),
            ResourceStatus::Stopped => write!(f, "stopped"),
            ResourceStatus::Terminated => write!(f, "terminated"),
            ResourceStatus::Available => write!(f, "available"),
        }
    }
}

/// A read-only cloud resource listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudResource {
    pub id: String,
    pub resource_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub status: ResourceStatus,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Telemetry
// =============================================================================

/// One synthetic middleware telemetry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddlewareStat {
    pub timestamp: DateTime<Utc>,
    pub cpu: u32,
    pub memory: u32,
    pub requests: u32,
    pub errors: u32,
}

// =============================================================================
// Tests
// =============================================================================
