//! Claim Intake Core - API Server Binary
//!
//! This binary starts the HTTP API server for the claim intake wizard.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claim-intake-api
//!
//! # Run with environment variables
//! CLAIM_API_HOST=0.0.0.0 CLAIM_API_PORT=8080 cargo run --bin claim-intake-api
//! ```
//!
//! # Environment Variables
//!
//! * `CLAIM_API_HOST` - Server host (default: 0.0.0.0)
//! * `CLAIM_API_PORT` - Server port (default: 8080)
//! * `CLAIM_API_UPLOAD_BASE_URL` - Base URL for hosted documents
//! * `CLAIM_API_SEED_DEMO_POLICIES` - Seed demo policies on startup (default: true)
//! * `CLAIM_API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal_macros::dec;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::{Currency, Money, PolicyId, UserId};
use domain_claims::InMemoryClaimRepository;
use domain_policy::{InMemoryPolicyProvider, Policy};
use domain_uploads::InMemoryUploader;
use interface_api::{config::ApiConfig, create_router, AppState};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, wires the in-memory
/// collaborator adapters, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Claim Intake API Server"
    );

    // Collaborator adapters. A production deployment would swap in HTTP
    // adapters for the policy backend, document store, and claim service;
    // the ports keep the wiring identical either way.
    let policies = Arc::new(InMemoryPolicyProvider::new());
    let uploader = Arc::new(InMemoryUploader::new(config.upload_base_url.clone()));
    let claims = Arc::new(InMemoryClaimRepository::new());

    if config.seed_demo_policies {
        seed_demo_policies(&policies).await;
    }

    let state = AppState::new(policies, uploader, claims, config.clone());
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables, falling back to
/// defaults for anything unset.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("CLAIM_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("CLAIM_API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        upload_base_url: std::env::var("CLAIM_API_UPLOAD_BASE_URL")
            .unwrap_or_else(|_| "https://documents.claim-intake.local".to_string()),
        log_level: std::env::var("CLAIM_API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
        seed_demo_policies: std::env::var("CLAIM_API_SEED_DEMO_POLICIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true),
    })
}

/// Initializes the tracing subscriber with an env-filter
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Seeds one demo user with a policy per claim line so the wizard can be
/// exercised end-to-end with curl.
async fn seed_demo_policies(provider: &InMemoryPolicyProvider) {
    let demo_user = UserId::new();

    let seeds = [
        ("Health", "Family Shield Plus", "HLT-2024-0091", dec!(500000)),
        ("Term Life", "Secure Tomorrow", "LIF-2023-1147", dec!(5000000)),
        ("Motor", "Drive Secure Comprehensive", "CAR-2024-0412", dec!(800000)),
    ];

    for (policy_type, plan_name, number, coverage) in seeds {
        provider
            .insert(Policy {
                id: PolicyId::new(),
                holder_id: demo_user,
                policy_number: number.to_string(),
                plan_name: plan_name.to_string(),
                policy_type: policy_type.to_string(),
                coverage: Money::new(coverage, Currency::INR),
                valid_until: None,
                source_application_id: None,
                issued_at: Utc::now(),
            })
            .await;
    }

    tracing::info!(user_id = %demo_user, "seeded demo policies");
}

/// Resolves when the process receives a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
