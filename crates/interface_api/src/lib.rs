//! HTTP API Layer
//!
//! This crate exposes the claim wizard over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: session lifecycle, section updates, navigation, files,
//!   submission, and policy listing
//! - **Sessions**: in-memory wizard sessions, one `ClaimWizard` each
//! - **DTOs**: request/response data transfer objects
//! - **Error Handling**: consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod sessions;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimRepository;
use domain_policy::PolicyProvider;
use domain_uploads::DocumentUploader;

use crate::config::ApiConfig;
use crate::handlers::{health, policies, wizard};
use crate::middleware::audit_middleware;
use crate::sessions::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub policies: Arc<dyn PolicyProvider>,
    pub uploader: Arc<dyn DocumentUploader>,
    pub claims: Arc<dyn ClaimRepository>,
    pub sessions: SessionStore,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(
        policies: Arc<dyn PolicyProvider>,
        uploader: Arc<dyn DocumentUploader>,
        claims: Arc<dyn ClaimRepository>,
        config: ApiConfig,
    ) -> Self {
        Self {
            policies,
            uploader,
            claims,
            sessions: SessionStore::new(),
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Wizard session routes
    let wizard_routes = Router::new()
        .route("/", post(wizard::create_session))
        .route("/:id", get(wizard::get_session))
        .route("/:id", delete(wizard::delete_session))
        .route("/:id/selection", put(wizard::update_selection))
        .route("/:id/intimation", put(wizard::update_intimation))
        .route("/:id/incident", put(wizard::update_incident))
        .route("/:id/claimant", put(wizard::update_claimant))
        .route("/:id/bank", put(wizard::update_bank))
        .route("/:id/advance", post(wizard::advance))
        .route("/:id/retreat", post(wizard::retreat))
        .route("/:id/documents", get(wizard::required_documents))
        .route("/:id/files", post(wizard::add_file))
        .route("/:id/files/:file_id", delete(wizard::remove_file))
        .route("/:id/files/:file_id/retry", post(wizard::retry_file))
        .route("/:id/submit", post(wizard::submit));

    // Policy routes
    let policy_routes = Router::new().route("/", get(policies::list_policies));

    let api_routes = Router::new()
        .nest("/wizard", wizard_routes)
        .nest("/policies", policy_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
