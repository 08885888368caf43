//! API client for the health-analysis service
//!
//! Makes the one outbound HTTP call of the dashboard: a generateContent
//! request to the configured text-generation endpoint.

use gloo_net::http::Request;
use opsdeck_common::analysis::{decode_response, status_error, AnalysisRequest};
use opsdeck_common::config::AnalysisConfig;
use opsdeck_common::error::DashboardError;
use opsdeck_common::MiddlewareStat;

/// API error type.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub status_code: Option<u16>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError {
            message: err.to_string(),
            status_code: None,
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        ApiError {
            message: err.to_string(),
            status_code: None,
        }
    }
}

impl From<ApiError> for DashboardError {
    fn from(err: ApiError) -> Self {
        match err.status_code {
            Some(status) => status_error(status, &err.message),
            None => DashboardError::Remote(err.message),
        }
    }
}

/// Client for the text-generation endpoint.
pub struct AnalysisClient {
    config: AnalysisConfig,
}

impl AnalysisClient {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Prepare a request. Fails before any network activity if no API key is set.
    pub fn prepare(&self, stats: &[MiddlewareStat]) -> Result<AnalysisRequest, DashboardError> {
        AnalysisRequest::prepare(&self.config, stats)
    }

    /// Send a prepared request and return the generated text.
    pub async fn send(&self, request: &AnalysisRequest) -> Result<String, ApiError> {
        log::info!("Requesting health analysis from {}", request.url);

        let response = Request::post(&request.url)
            .query([("key", request.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request.body)?
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !response.ok() {
            return Err(ApiError {
                message: body,
                status_code: Some(status),
            });
        }

        decode_response(&body).map_err(Into::into)
    }
}

/// Run a full analysis for the given stats (convenience wrapper).
pub async fn analyze_health(
    config: AnalysisConfig,
    stats: Vec<MiddlewareStat>,
) -> Result<String, DashboardError> {
    let client = AnalysisClient::new(config);
    let request = client.prepare(&stats)?;
    client.send(&request).await.map_err(Into::into)
}
