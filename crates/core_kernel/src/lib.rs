//! Core Kernel - Foundational types and utilities for the courier gateway
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Validated identifiers for external delivery claims
//! - Unified error types for port operations
//! - Ports-and-adapters infrastructure (marker traits, health checks)

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::ClaimRef;
pub use error::PortError;
pub use ports::{
    DispatchPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
