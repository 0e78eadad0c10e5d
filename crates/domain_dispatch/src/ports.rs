//! Dispatch Domain Ports
//!
//! The `ClaimInfoPort` trait defines what the gateway needs from the external
//! courier system. Adapters implement it:
//!
//! - **External API Adapter**: calls the courier dispatch REST API
//! - **Mock Adapter**: canned responses for testing without network access
//!
//! Application code receives the port as `Arc<dyn ClaimInfoPort>`, so the
//! choice of adapter is made once at startup.

use async_trait::async_trait;

use core_kernel::{ClaimRef, DispatchPort, HealthCheckable, PortError};

use crate::claim::ClaimInfo;

/// Port for delivery-claim lookups against the external courier provider
///
/// A single best-effort call per invocation: no retries, no caching. Transient
/// failures surface as `PortError` and classification is left to the caller.
#[async_trait]
pub trait ClaimInfoPort: DispatchPort + HealthCheckable {
    /// Fetches the current state of a delivery claim.
    ///
    /// # Arguments
    ///
    /// * `claim` - The validated claim reference
    ///
    /// # Returns
    ///
    /// The provider's claim payload, or a `PortError` describing the failure.
    async fn claim_info(&self, claim: &ClaimRef) -> Result<ClaimInfo, PortError>;
}

/// Mock implementation of ClaimInfoPort for testing
///
/// Returns a fixed outcome and records every claim reference it was invoked
/// with, so tests can assert on call counts and arguments.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    enum Outcome {
        Succeed(ClaimInfo),
        Fail(Box<dyn Fn() -> PortError + Send + Sync>),
    }

    /// In-memory mock implementation of ClaimInfoPort
    pub struct MockClaimInfoPort {
        outcome: Outcome,
        calls: Arc<RwLock<Vec<ClaimRef>>>,
    }

    impl MockClaimInfoPort {
        /// Creates a mock that resolves every lookup with the given payload
        pub fn returning(info: ClaimInfo) -> Self {
            Self {
                outcome: Outcome::Succeed(info),
                calls: Arc::new(RwLock::new(Vec::new())),
            }
        }

        /// Creates a mock that fails every lookup with a freshly built error
        pub fn failing_with<F>(make_error: F) -> Self
        where
            F: Fn() -> PortError + Send + Sync + 'static,
        {
            Self {
                outcome: Outcome::Fail(Box::new(make_error)),
                calls: Arc::new(RwLock::new(Vec::new())),
            }
        }

        /// Returns every claim reference this mock was invoked with, in order
        pub async fn recorded_calls(&self) -> Vec<ClaimRef> {
            self.calls.read().await.clone()
        }
    }

    impl DispatchPort for MockClaimInfoPort {}

    #[async_trait]
    impl HealthCheckable for MockClaimInfoPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-claim-info-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: chrono::Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ClaimInfoPort for MockClaimInfoPort {
        async fn claim_info(&self, claim: &ClaimRef) -> Result<ClaimInfo, PortError> {
            self.calls.write().await.push(claim.clone());
            match &self.outcome {
                Outcome::Succeed(info) => Ok(info.clone()),
                Outcome::Fail(make_error) => Err(make_error()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockClaimInfoPort;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_port_returns_payload_and_records_call() {
        let port = MockClaimInfoPort::returning(ClaimInfo::new(json!({"id": "c1"})));
        let claim = ClaimRef::new("c1").unwrap();

        let info = port.claim_info(&claim).await.unwrap();
        assert_eq!(info.id(), Some("c1"));

        let calls = port.recorded_calls().await;
        assert_eq!(calls, vec![claim]);
    }

    #[tokio::test]
    async fn test_mock_port_failure() {
        let port = MockClaimInfoPort::failing_with(|| PortError::upstream(502));
        let claim = ClaimRef::new("c1").unwrap();

        let err = port.claim_info(&claim).await.unwrap_err();
        assert!(matches!(err, PortError::Upstream { status: 502, .. }));
        assert_eq!(port.recorded_calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_port_health_check() {
        let port = MockClaimInfoPort::returning(ClaimInfo::new(json!({})));
        let result = port.health_check().await;
        assert_eq!(result.status, core_kernel::AdapterHealth::Healthy);
    }
}
