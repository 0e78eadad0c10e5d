//! Request handlers

pub mod claims;
pub mod health;
