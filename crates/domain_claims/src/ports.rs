//! Claim Repository Port
//!
//! The wizard creates the claim record, then patches it with the hosted
//! document metadata once uploads have settled. Both calls go through this
//! port; the backend owns all persistence.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{
    AdapterHealth, ApplicationId, DocumentCategory, DomainPort, HealthCheckResult,
    HealthCheckable, OperationMetadata, PolicyId, PortError, UserId,
};

use crate::draft::{BankDetails, ClaimDetails, ClaimantInfo};

/// Status carried by a freshly submitted claim
pub const SUBMITTED_STATUS: &str = "submitted";

/// The payload sent to create a claim record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClaim {
    pub policy_id: PolicyId,
    pub user_id: UserId,
    pub details: ClaimDetails,
    pub claimant: ClaimantInfo,
    pub bank: BankDetails,
    pub intimation_date: NaiveDate,
    pub intimation_time: NaiveTime,
    pub incident_date: Option<NaiveDate>,
    pub incident_time: Option<NaiveTime>,
    pub incident_location: String,
    pub incident_description: String,
    pub status: String,
}

/// One hosted document attached to the claim at finalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub category: DocumentCategory,
    pub file_name: String,
    pub url: String,
    pub document_id: Option<String>,
    pub document_type: String,
}

/// Create/update access to claim records
#[async_trait]
pub trait ClaimRepository: DomainPort + HealthCheckable {
    /// Creates the claim and returns its application id.
    ///
    /// The id doubles as the user-visible claim number.
    async fn create_claim(
        &self,
        claim: NewClaim,
        metadata: Option<OperationMetadata>,
    ) -> Result<ApplicationId, PortError>;

    /// Patches the claim with its document metadata. Best-effort: a failure
    /// here does not roll anything back.
    async fn attach_documents(
        &self,
        id: ApplicationId,
        documents: Vec<DocumentRecord>,
        status: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}

/// A claim record as held by the in-memory repository
#[derive(Debug, Clone)]
pub struct StoredClaim {
    pub claim: NewClaim,
    pub documents: Vec<DocumentRecord>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory implementation of `ClaimRepository`
///
/// Used by unit tests and the demo wiring. Records every call and supports
/// scripted failures for either operation.
#[derive(Default)]
pub struct InMemoryClaimRepository {
    claims: Arc<RwLock<HashMap<ApplicationId, StoredClaim>>>,
    fail_create: std::sync::RwLock<Option<String>>,
    fail_attach: std::sync::RwLock<Option<String>>,
    create_calls: std::sync::atomic::AtomicUsize,
    attach_calls: std::sync::atomic::AtomicUsize,
}

impl InMemoryClaimRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the next create calls to fail with the given message
    pub fn fail_create(&self, message: impl Into<String>) {
        *self.fail_create.write().unwrap() = Some(message.into());
    }

    /// Scripts the next attach calls to fail with the given message
    pub fn fail_attach(&self, message: impl Into<String>) {
        *self.fail_attach.write().unwrap() = Some(message.into());
    }

    /// Clears scripted failures
    pub fn heal(&self) {
        *self.fail_create.write().unwrap() = None;
        *self.fail_attach.write().unwrap() = None;
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn attach_calls(&self) -> usize {
        self.attach_calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    /// Fetches a stored claim for assertions
    pub async fn get(&self, id: ApplicationId) -> Option<StoredClaim> {
        self.claims.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.claims.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.claims.read().await.is_empty()
    }
}

impl DomainPort for InMemoryClaimRepository {}

#[async_trait]
impl HealthCheckable for InMemoryClaimRepository {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "in-memory-claim-repository".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimRepository for InMemoryClaimRepository {
    async fn create_claim(
        &self,
        claim: NewClaim,
        _metadata: Option<OperationMetadata>,
    ) -> Result<ApplicationId, PortError> {
        self.create_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if let Some(message) = self.fail_create.read().unwrap().clone() {
            return Err(PortError::ServiceUnavailable { service: message });
        }

        let id = ApplicationId::new_v7();
        self.claims.write().await.insert(
            id,
            StoredClaim {
                claim,
                documents: Vec::new(),
                status: SUBMITTED_STATUS.to_string(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn attach_documents(
        &self,
        id: ApplicationId,
        documents: Vec<DocumentRecord>,
        status: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        self.attach_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if let Some(message) = self.fail_attach.read().unwrap().clone() {
            return Err(PortError::ServiceUnavailable { service: message });
        }

        let mut claims = self.claims.write().await;
        let stored = claims
            .get_mut(&id)
            .ok_or_else(|| PortError::not_found("Claim", id))?;
        stored.documents = documents;
        stored.status = status.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ClaimType;

    fn new_claim() -> NewClaim {
        NewClaim {
            policy_id: PolicyId::new(),
            user_id: UserId::new(),
            details: ClaimDetails::empty(ClaimType::Health),
            claimant: ClaimantInfo::default(),
            bank: BankDetails::default(),
            intimation_date: Utc::now().date_naive(),
            intimation_time: Utc::now().time(),
            incident_date: None,
            incident_time: None,
            incident_location: String::new(),
            incident_description: String::new(),
            status: SUBMITTED_STATUS.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_attach() {
        let repo = InMemoryClaimRepository::new();
        let id = repo.create_claim(new_claim(), None).await.unwrap();

        let documents = vec![DocumentRecord {
            category: DocumentCategory::from("claim-form"),
            file_name: "form.pdf".to_string(),
            url: "https://docs.example.com/x/form.pdf".to_string(),
            document_id: Some("doc-000001".to_string()),
            document_type: "claim-document".to_string(),
        }];
        repo.attach_documents(id, documents, SUBMITTED_STATUS, None)
            .await
            .unwrap();

        let stored = repo.get(id).await.unwrap();
        assert_eq!(stored.documents.len(), 1);
        assert_eq!(stored.status, SUBMITTED_STATUS);
        assert_eq!(repo.create_calls(), 1);
        assert_eq!(repo.attach_calls(), 1);
    }

    #[tokio::test]
    async fn test_scripted_create_failure() {
        let repo = InMemoryClaimRepository::new();
        repo.fail_create("claims service down");

        let error = repo.create_claim(new_claim(), None).await.unwrap_err();
        assert!(error.to_string().contains("claims service down"));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_attach_to_unknown_claim() {
        let repo = InMemoryClaimRepository::new();
        let error = repo
            .attach_documents(ApplicationId::new(), vec![], SUBMITTED_STATUS, None)
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }
}
