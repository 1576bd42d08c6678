//! Policy Provider Port
//!
//! The wizard fetches the caller's policies through this port and filters
//! them client-side. Adapters can call the policy backend or serve a seeded
//! in-memory set; the wizard cannot tell the difference.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PolicyId,
    PortError, UserId,
};

use crate::policy::Policy;

/// Read-only access to a user's policies
#[async_trait]
pub trait PolicyProvider: DomainPort + HealthCheckable {
    /// Returns all policies held by the user
    ///
    /// Filtering by claim type is the caller's job; providers return the
    /// full set so the wizard's matching rules stay in one place.
    async fn policies_for(
        &self,
        user_id: UserId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Policy>, PortError>;

    /// Returns a single policy by id
    async fn get_policy(
        &self,
        id: PolicyId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Policy, PortError>;
}

/// In-memory implementation of `PolicyProvider`
///
/// Serves a seeded policy set. Used by unit tests and by the demo wiring of
/// the API server; a production deployment would put an HTTP adapter to the
/// policy backend behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryPolicyProvider {
    policies: Arc<RwLock<HashMap<PolicyId, Policy>>>,
}

impl InMemoryPolicyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the provider with policies
    pub async fn with_policies(policies: Vec<Policy>) -> Self {
        let provider = Self::new();
        for policy in policies {
            provider.policies.write().await.insert(policy.id, policy);
        }
        provider
    }

    /// Adds a policy after construction
    pub async fn insert(&self, policy: Policy) {
        self.policies.write().await.insert(policy.id, policy);
    }
}

impl DomainPort for InMemoryPolicyProvider {}

#[async_trait]
impl HealthCheckable for InMemoryPolicyProvider {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "in-memory-policy-provider".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl PolicyProvider for InMemoryPolicyProvider {
    async fn policies_for(
        &self,
        user_id: UserId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Policy>, PortError> {
        let policies = self.policies.read().await;
        let mut owned: Vec<Policy> = policies
            .values()
            .filter(|p| p.holder_id == user_id)
            .cloned()
            .collect();
        // Stable listing order for display
        owned.sort_by(|a, b| a.policy_number.cmp(&b.policy_number));
        Ok(owned)
    }

    async fn get_policy(
        &self,
        id: PolicyId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Policy, PortError> {
        self.policies
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Policy", id))
    }
}
