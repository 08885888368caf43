//! OpsDeck Error - Unified Error Types
//!
//! Error handling for every dashboard operation. Failures are always local to
//! the view that triggered them; nothing here is fatal to the application and
//! nothing is retried.
//!
//! Key Features:
//! - Missing-configuration errors reported before any network attempt
//! - Remote-call failures mapped to a static display message
//! - Explicit not-found condition for unknown project identifiers
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Unified error type for all dashboard operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    // Configuration errors
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    // Remote errors
    #[error("remote call failed: {0}")]
    Remote(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    // Lookup errors
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    // Storage errors
    #[error("storage unavailable: {0}")]
    Storage(String),
}

// =============================================================================
// Type Aliases
// =============================================================================

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

// =============================================================================
// Error Classification
// =============================================================================

impl DashboardError {
    /// Returns true if the error must interrupt the user with a blocking alert.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, DashboardError::MissingConfiguration(_))
    }

    /// Returns true if the error came from the outbound analysis call.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            DashboardError::Remote(_) | DashboardError::Serialization(_)
        )
    }

    /// Returns true if a looked-up entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DashboardError::ProjectNotFound(_))
    }

    /// The message without its category prefix, as shown in alerts.
    pub fn detail(&self) -> &str {
        match self {
            DashboardError::MissingConfiguration(msg)
            | DashboardError::Configuration(msg)
            | DashboardError::Remote(msg)
            | DashboardError::Serialization(msg)
            | DashboardError::ProjectNotFound(msg)
            | DashboardError::Storage(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::Configuration(err.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(DashboardError::MissingConfiguration("API_KEY".into()).is_user_facing());
        assert!(!DashboardError::Remote("503".into()).is_user_facing());

        assert!(DashboardError::Remote("timeout".into()).is_remote());
        assert!(DashboardError::Serialization("eof".into()).is_remote());
        assert!(!DashboardError::ProjectNotFound("P-9".into()).is_remote());

        assert!(DashboardError::ProjectNotFound("P-9".into()).is_not_found());
    }

    #[test]
    fn test_display() {
        let err = DashboardError::ProjectNotFound("P-4242".to_string());
        assert_eq!(err.to_string(), "project not found: P-4242");
        assert_eq!(err.detail(), "P-4242");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DashboardError = err.into();
        assert!(matches!(err, DashboardError::Serialization(_)));
    }
}
