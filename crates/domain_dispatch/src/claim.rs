//! Delivery claim model
//!
//! The external provider owns the claim schema. This module keeps the payload
//! opaque while exposing the couple of fields the gateway itself reads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot of a delivery claim as returned by the external provider.
///
/// The structure is deliberately opaque: the provider's schema evolves
/// independently of this gateway, and the claim-info endpoint returns the
/// payload verbatim. Convenience accessors exist for the well-known fields
/// used in logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimInfo(pub Value);

impl ClaimInfo {
    /// Wraps a raw provider payload
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Returns the raw payload
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the claim, yielding the raw payload
    pub fn into_value(self) -> Value {
        self.0
    }

    /// The provider-side claim id, when the payload carries one
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// The provider-side claim status, when the payload carries one
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }
}

impl From<Value> for ClaimInfo {
    fn from(payload: Value) -> Self {
        Self(payload)
    }
}
