//! Strongly-typed identifiers for external delivery claims
//!
//! The external dispatch provider assigns claim identifiers as opaque strings.
//! Wrapping them in a newtype keeps validation in one place: a `ClaimRef` is
//! always non-empty and carries no surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated reference to a delivery claim held by the external provider.
///
/// Construction trims whitespace and rejects values that are empty after
/// trimming, so any `ClaimRef` handed to an adapter is safe to put on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimRef(String);

impl ClaimRef {
    /// Creates a claim reference from a raw string.
    ///
    /// Returns `None` if the value is empty or whitespace-only.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing an empty claim reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyClaimRef;

impl fmt::Display for EmptyClaimRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "claim reference is empty")
    }
}

impl std::error::Error for EmptyClaimRef {}

impl FromStr for ClaimRef {
    type Err = EmptyClaimRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimRef::new(s).ok_or(EmptyClaimRef)
    }
}

impl From<ClaimRef> for String {
    fn from(claim: ClaimRef) -> String {
        claim.0
    }
}
