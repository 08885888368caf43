//! OpsDeck Config - Configuration Structures
//!
//! Configuration types for the dashboard. Supports loading from TOML and
//! programmatic construction; the web interface layers document attributes
//! and build-time environment values on top of the defaults.
//!
//! Key Features:
//! - Session storage keys
//! - Simulated latency for the login and resource-sync actions
//! - Health-analysis endpoint, model and API key
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Session Configuration
// =============================================================================

/// Storage keys used by the session guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub authenticated_key: String,
    pub role_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            authenticated_key: "isAuthenticated".to_string(),
            role_key: "userRole".to_string(),
        }
    }
}

// =============================================================================
// Timing Configuration
// =============================================================================

/// Artificial delays standing in for network round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub login_delay_ms: u64,
    pub sync_delay_ms: u64,
}

impl TimingConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn sync_delay(&self) -> Duration {
        Duration::from_millis(self.sync_delay_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1500,
            sync_delay_ms: 2000,
        }
    }
}

// =============================================================================
// Analysis Configuration
// =============================================================================

/// Configuration for the external text-generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Number of most recent stats included in the prompt.
    pub window: usize,
}

impl AnalysisConfig {
    /// Return the API key, or a missing-configuration error when absent or blank.
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(DashboardError::MissingConfiguration(
                "API_KEY environment variable missing for Gemini Demo.".to_string(),
            )),
        }
    }

    /// Full URL of the generate-content call, without the key parameter.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            window: 5,
        }
    }
}

// =============================================================================
// Dashboard Configuration
// =============================================================================

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub session: SessionConfig,
    pub timing: TimingConfig,
    pub analysis: AnalysisConfig,
}

impl DashboardConfig {
    /// Parse configuration from TOML text. Missing sections keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(DashboardError::from)
    }

    /// Configuration from an optional embedded TOML block.
    ///
    /// Absent or blank text gives the defaults, as does text that fails to
    /// parse, after a warning.
    pub fn from_embedded(content: Option<&str>) -> Self {
        let Some(content) = content.filter(|c| !c.trim().is_empty()) else {
            return Self::default();
        };

        Self::from_toml(content).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring embedded configuration");
            Self::default()
        })
    }

    /// Set the analysis API key if one is provided and not blank.
    pub fn with_api_key(mut self, key: Option<&str>) -> Self {
        if let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) {
            self.analysis.api_key = Some(key.to_string());
        }
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
