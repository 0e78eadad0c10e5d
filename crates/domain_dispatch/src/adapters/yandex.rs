//! External Courier Dispatch Adapter
//!
//! REST adapter for the Yandex Delivery claims API, implementing the
//! `ClaimInfoPort` trait. The adapter owns a pooled `reqwest::Client` with a
//! configured timeout and bearer-token authentication.
//!
//! # Error Handling
//!
//! External API errors are mapped to `PortError` variants:
//! - 404 -> `PortError::NotFound`
//! - 401/403 -> `PortError::Unauthorized`
//! - 429 -> `PortError::RateLimited`
//! - 5xx -> `PortError::ServiceUnavailable`
//! - Timeouts -> `PortError::Timeout`
//! - Other non-success -> `PortError::Upstream` with the provider's message
//!   extracted from the error body when it parses

use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};

use core_kernel::{
    AdapterHealth, ClaimRef, DispatchPort, HealthCheckResult, HealthCheckable, PortError,
};

use crate::claim::ClaimInfo;
use crate::ports::ClaimInfoPort;

/// Path of the claim-info operation on the provider side
const CLAIM_INFO_PATH: &str = "/b2b/cargo/integration/v2/claims/info";

/// Configuration for the external dispatch adapter
#[derive(Debug, Clone)]
pub struct DispatchApiConfig {
    /// Base URL of the dispatch API (e.g., "https://b2b.taxi.yandex.net")
    pub base_url: String,

    /// OAuth token for authentication
    pub token: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Value sent in the Accept-Language header; the provider localizes
    /// status texts inside the claim payload based on it
    pub accept_language: String,
}

impl Default for DispatchApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://b2b.taxi.yandex.net".to_string(),
            token: String::new(),
            timeout_secs: 10,
            accept_language: "ru".to_string(),
        }
    }
}

/// Error body shape used by the provider for non-success responses
#[derive(Debug, Deserialize)]
struct ProviderError {
    #[allow(dead_code)]
    code: Option<String>,
    message: Option<String>,
}

/// External dispatch adapter implementing the ClaimInfoPort trait
///
/// # Example
///
/// ```rust,ignore
/// use domain_dispatch::{YandexDispatchAdapter, DispatchApiConfig};
///
/// let adapter = YandexDispatchAdapter::new(DispatchApiConfig {
///     base_url: "https://b2b.taxi.yandex.net".to_string(),
///     token: std::env::var("DISPATCH_TOKEN").unwrap(),
///     ..Default::default()
/// })?;
///
/// let info = adapter.claim_info(&claim_ref).await?;
/// ```
#[derive(Debug)]
pub struct YandexDispatchAdapter {
    config: DispatchApiConfig,
    client: reqwest::Client,
}

impl YandexDispatchAdapter {
    /// Creates a new dispatch adapter with the given configuration
    pub fn new(config: DispatchApiConfig) -> Result<Self, PortError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PortError::Internal {
                message: "failed to build HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { config, client })
    }

    /// Returns the base URL of the external dispatch API
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Maps a transport-level failure to a `PortError`
    fn transport_error(&self, err: reqwest::Error, operation: &str) -> PortError {
        if err.is_timeout() {
            PortError::Timeout {
                operation: operation.to_string(),
                duration_ms: self.config.timeout_secs * 1000,
            }
        } else {
            PortError::Connection {
                message: format!("dispatch API request failed: {}", err),
                source: Some(Box::new(err)),
            }
        }
    }

    /// Maps a non-success HTTP response to a `PortError`, consuming the body
    async fn status_error(&self, response: reqwest::Response, claim: &ClaimRef) -> PortError {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ProviderError>(&body).ok())
            .and_then(|e| e.message);

        match status.as_u16() {
            401 | 403 => PortError::Unauthorized {
                message: message
                    .unwrap_or_else(|| "dispatch API rejected credentials".to_string()),
            },
            404 => PortError::not_found("Claim", claim),
            429 => PortError::RateLimited {
                retry_after_secs: retry_after.unwrap_or(1),
            },
            s if status.is_server_error() => {
                tracing::warn!(status = s, claim = %claim, "dispatch API server error");
                PortError::ServiceUnavailable {
                    service: "dispatch".to_string(),
                }
            }
            s => match message {
                Some(m) => PortError::upstream_with_message(s, m),
                None => PortError::upstream(s),
            },
        }
    }
}

impl DispatchPort for YandexDispatchAdapter {}

#[async_trait]
impl HealthCheckable for YandexDispatchAdapter {
    /// Probes the provider base URL to verify connectivity.
    ///
    /// Any HTTP response counts as reachable; only transport failures mark the
    /// adapter unhealthy.
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();

        let result = self.client.get(&self.config.base_url).send().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(response) => HealthCheckResult {
                adapter_id: "yandex-dispatch-adapter".to_string(),
                status: if response.status().is_server_error() {
                    AdapterHealth::Degraded
                } else {
                    AdapterHealth::Healthy
                },
                latency_ms,
                message: None,
                checked_at: chrono::Utc::now(),
            },
            Err(e) => HealthCheckResult::unhealthy(
                "yandex-dispatch-adapter",
                latency_ms,
                format!("dispatch API unreachable: {}", e),
            ),
        }
    }
}

#[async_trait]
impl ClaimInfoPort for YandexDispatchAdapter {
    async fn claim_info(&self, claim: &ClaimRef) -> Result<ClaimInfo, PortError> {
        let url = format!("{}{}", self.config.base_url, CLAIM_INFO_PATH);

        tracing::debug!(claim = %claim, "requesting claim info from dispatch API");

        let response = self
            .client
            .post(&url)
            .query(&[("claim_id", claim.as_str())])
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.config.accept_language)
            .send()
            .await
            .map_err(|e| self.transport_error(e, "claim_info"))?;

        if !response.status().is_success() {
            return Err(self.status_error(response, claim).await);
        }

        let payload = response.json().await.map_err(|e| PortError::Internal {
            message: "dispatch API returned an unparseable claim payload".to_string(),
            source: Some(Box::new(e)),
        })?;

        Ok(ClaimInfo::new(payload))
    }
}
