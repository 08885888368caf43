//! OpsDeck Analysis - Health Analysis Codec
//!
//! Prompt construction and wire format for the external text-generation
//! endpoint that summarizes middleware health. The HTTP call itself lives in
//! the web interface; everything that can be decided without the network is
//! decided here.
//!
//! Key Features:
//! - Prompt built from the most recent telemetry window
//! - generateContent request and response bodies
//! - Mapping of every outcome to the text shown in the results panel
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::config::AnalysisConfig;
use crate::error::{DashboardError, Result};
use crate::telemetry::recent;
use crate::types::MiddlewareStat;
use serde::{Deserialize, Serialize};

/// Panel text when the service answered without any text.
pub const EMPTY_ANALYSIS: &str = "No analysis generated.";

/// Panel text for any failed call.
pub const FAILED_ANALYSIS: &str = "Failed to generate analysis. Check API Key or console logs.";

// =============================================================================
// Wire Format
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Body of a generateContent request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Body of a generateContent response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        (!text.is_empty()).then_some(text)
    }
}

// =============================================================================
// Requests
// =============================================================================

/// A fully prepared analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub url: String,
    pub api_key: String,
    pub body: GenerateRequest,
}

impl AnalysisRequest {
    /// Prepare a call for the given stats.
    ///
    /// Fails with a missing-configuration error, before anything else is
    /// built, when no API key is configured.
    pub fn prepare(config: &AnalysisConfig, stats: &[MiddlewareStat]) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let prompt = build_prompt(recent(stats, config.window))?;

        Ok(Self {
            url: config.generate_url(),
            api_key,
            body: GenerateRequest {
                contents: vec![Content {
                    parts: vec![Part { text: prompt }],
                }],
            },
        })
    }
}

/// Instruction sent to the model for a telemetry window.
pub fn build_prompt(window: &[MiddlewareStat]) -> Result<String> {
    let data = serde_json::to_string(window)?;
    Ok(format!(
        "Analyze the following middleware metrics for the last {} hours and provide a brief \
         operational health summary and 3 recommendations for a DevOps engineer.\n\
         Data: {}\n\
         Output format: Markdown.",
        window.len(),
        data
    ))
}

// =============================================================================
// Outcomes
// =============================================================================

/// Decode a raw response body into the panel text.
pub fn decode_response(body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    Ok(response.text().unwrap_or_else(|| EMPTY_ANALYSIS.to_string()))
}

/// Text shown in the results panel for a finished call.
pub fn panel_text(outcome: &Result<String>) -> String {
    match outcome {
        Ok(text) => text.clone(),
        Err(e) if e.is_remote() => {
            tracing::error!(error = %e, "health analysis call failed");
            FAILED_ANALYSIS.to_string()
        }
        Err(e) => {
            tracing::error!(error = %e, "health analysis could not be prepared");
            FAILED_ANALYSIS.to_string()
        }
    }
}

/// Map a non-success HTTP status to an error.
pub fn status_error(status: u16, body: &str) -> DashboardError {
    let detail = body.chars().take(200).collect::<String>();
    DashboardError::Remote(format!("analysis endpoint returned status {}: {}", status, detail))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::generate_middleware_stats;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stats() -> Vec<MiddlewareStat> {
        generate_middleware_stats(&mut StdRng::seed_from_u64(11), Utc::now())
    }

    fn keyed() -> AnalysisConfig {
        AnalysisConfig {
            api_key: Some("k".to_string()),
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn test_missing_key_fails_first() {
        let err = AnalysisRequest::prepare(&AnalysisConfig::default(), &stats()).unwrap_err();
        assert!(matches!(err, DashboardError::MissingConfiguration(_)));
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_prompt_uses_last_five() {
        let stats = stats();
        let request = AnalysisRequest::prepare(&keyed(), &stats).unwrap();
        let prompt = &request.body.contents[0].parts[0].text;

        let expected = serde_json::to_string(&stats[19..]).unwrap();
        assert!(prompt.contains(&expected));
        assert!(prompt.contains("last 5 hours"));
        assert!(prompt.ends_with("Output format: Markdown."));
        assert!(request.url.ends_with("/models/gemini-2.5-flash:generateContent"));
        assert_eq!(request.api_key, "k");
    }

    #[test]
    fn test_request_body_shape() {
        let request = AnalysisRequest::prepare(&keyed(), &stats()[..2]).unwrap();
        let json = serde_json::to_value(&request.body).unwrap();
        assert!(json["contents"][0]["parts"][0]["text"].is_string());
    }

    #[test]
    fn test_decode_response() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"All "},{"text":"green."}],"role":"model"}}]}"#;
        assert_eq!(decode_response(body).unwrap(), "All green.");

        assert_eq!(decode_response(r#"{"candidates":[]}"#).unwrap(), EMPTY_ANALYSIS);
        assert_eq!(decode_response(r#"{"candidates":[{}]}"#).unwrap(), EMPTY_ANALYSIS);
        assert!(decode_response("<html>").is_err());
    }

    #[test]
    fn test_panel_text() {
        assert_eq!(panel_text(&Ok("ok".to_string())), "ok");
        assert_eq!(
            panel_text(&Err(DashboardError::Remote("down".into()))),
            FAILED_ANALYSIS
        );
        assert_eq!(
            panel_text(&Err(DashboardError::MissingConfiguration("API_KEY".into()))),
            FAILED_ANALYSIS
        );
    }

    #[test]
    fn test_status_error() {
        let err = status_error(403, "forbidden");
        assert!(err.is_remote());
        assert!(err.to_string().contains("403"));
    }
}
