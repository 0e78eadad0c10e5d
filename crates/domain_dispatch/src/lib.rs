//! Dispatch Domain - delivery-claim lookups against the external courier provider
//!
//! This crate defines the `ClaimInfoPort` trait (the hexagonal port for claim
//! lookups) together with its adapters:
//!
//! - `YandexDispatchAdapter`: REST adapter for the courier dispatch API
//! - `MockClaimInfoPort`: in-memory adapter for tests (behind the `mock` feature)
//!
//! The claim payload itself is opaque: its schema is owned by the provider and
//! passed through verbatim.

pub mod claim;
pub mod ports;
pub mod adapters;

pub use claim::ClaimInfo;
pub use ports::ClaimInfoPort;
pub use adapters::{YandexDispatchAdapter, DispatchApiConfig};
