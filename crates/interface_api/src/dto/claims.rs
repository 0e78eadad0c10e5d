//! Claims DTOs

use serde::Deserialize;
use serde_json::Value;

use core_kernel::ClaimRef;

/// Body of the claim-info request: `{ "claimId": <value> }`
///
/// Parsing is deliberately permissive. A malformed or absent body is treated
/// as an empty object, and `claimId` may arrive as any JSON value; coercion
/// to a usable claim reference happens in [`ClaimInfoRequest::claim_ref`].
#[derive(Debug, Default, Deserialize)]
pub struct ClaimInfoRequest {
    #[serde(default, rename = "claimId")]
    pub claim_id: Value,
}

impl ClaimInfoRequest {
    /// Parses a raw request body, never failing.
    ///
    /// Anything that does not deserialize into the expected shape (invalid
    /// JSON, a non-object body, an empty body) yields the default request,
    /// which then fails claim-ref coercion downstream.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// Coerces `claimId` to a validated claim reference.
    ///
    /// Strings are used as-is, numbers are rendered to their digits; any other
    /// JSON value counts as absent. Trimming and the empty check live in
    /// `ClaimRef`.
    pub fn claim_ref(&self) -> Option<ClaimRef> {
        match &self.claim_id {
            Value::String(s) => ClaimRef::new(s),
            Value::Number(n) => ClaimRef::new(&n.to_string()),
            _ => None,
        }
    }
}
