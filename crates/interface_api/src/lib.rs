//! HTTP API Layer
//!
//! This crate provides the REST API for the courier gateway using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Claim lookup and health endpoints
//! - **Middleware**: Request audit logging
//! - **DTOs**: Permissive request parsing for the claim-info body
//! - **Error Handling**: Fixed `{ "error": ... }` wire format
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(dispatch, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_dispatch::ClaimInfoPort;

use crate::config::ApiConfig;
use crate::handlers::{claims, health};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dispatch: Arc<dyn ClaimInfoPort>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `dispatch` - The claim-info port (real adapter or mock)
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(dispatch: Arc<dyn ClaimInfoPort>, config: ApiConfig) -> Router {
    let state = AppState { dispatch, config };

    // Public routes (no audit logging)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new().route("/info", post(claims::claim_info));

    // API routes
    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
