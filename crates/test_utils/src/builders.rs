//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about and take defaults for
//! everything else.

use std::sync::Arc;

use chrono::Utc;

use core_kernel::{ClaimType, DocumentCategory, Money, PolicyId, UserId};
use domain_claims::{ClaimDraft, HealthClaimCategory};
use domain_policy::Policy;
use domain_uploads::{FileSource, NewFile};

use crate::fixtures::{
    complete_bank_details, complete_claimant, MoneyFixtures, StringFixtures, TemporalFixtures,
};

/// Builder for policies served by the in-memory provider
pub struct TestPolicyBuilder {
    holder_id: UserId,
    claim_type: ClaimType,
    policy_number: Option<String>,
    plan_name: String,
    policy_type: String,
    coverage: Money,
    expired: bool,
}

impl TestPolicyBuilder {
    /// A policy whose type tag matches the given claim line
    pub fn new(holder_id: UserId, claim_type: ClaimType) -> Self {
        let (plan_name, policy_type) = match claim_type {
            ClaimType::Health => ("Family Shield Plus", "Health"),
            ClaimType::Life => ("Secure Tomorrow", "Term Life"),
            ClaimType::Car => ("Drive Secure Comprehensive", "Motor"),
        };
        Self {
            holder_id,
            claim_type,
            policy_number: None,
            plan_name: plan_name.to_string(),
            policy_type: policy_type.to_string(),
            coverage: MoneyFixtures::coverage(),
            expired: false,
        }
    }

    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = Some(number.into());
        self
    }

    pub fn with_plan_name(mut self, plan_name: impl Into<String>) -> Self {
        self.plan_name = plan_name.into();
        self
    }

    /// Overrides the backend type tag (e.g. to exercise plan-name fallback)
    pub fn with_policy_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = policy_type.into();
        self
    }

    pub fn with_coverage(mut self, coverage: Money) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn expired(mut self) -> Self {
        self.expired = true;
        self
    }

    pub fn build(self) -> Policy {
        let valid_until = if self.expired {
            Some(TemporalFixtures::recent_incident_date() - chrono::Days::new(30))
        } else {
            Some(TemporalFixtures::future_expiry())
        };

        Policy {
            id: PolicyId::new(),
            holder_id: self.holder_id,
            policy_number: self
                .policy_number
                .unwrap_or_else(|| StringFixtures::policy_number(self.claim_type)),
            plan_name: self.plan_name,
            policy_type: self.policy_type,
            coverage: self.coverage,
            valid_until,
            source_application_id: None,
            issued_at: Utc::now(),
        }
    }
}

/// Builder for drafts at various levels of completeness
pub struct ClaimDraftBuilder {
    draft: ClaimDraft,
}

impl ClaimDraftBuilder {
    pub fn new(user_id: UserId) -> Self {
        Self {
            draft: ClaimDraft::new(user_id),
        }
    }

    pub fn with_claim_type(mut self, claim_type: ClaimType) -> Self {
        self.draft.set_claim_type(claim_type);
        self
    }

    pub fn with_policy(mut self, policy_id: PolicyId) -> Self {
        self.draft.selected_policy_id = Some(policy_id);
        self
    }

    /// Fills the incident core plus the active type's anchor field so the
    /// incident gate passes
    pub fn with_incident_essentials(mut self) -> Self {
        self.draft.incident_date = Some(TemporalFixtures::recent_incident_date());
        self.draft.incident_location = "Pune".to_string();

        if let Some(details) = self.draft.details.as_mut() {
            match details {
                domain_claims::ClaimDetails::Health(health) => {
                    health.claim_category = Some(HealthClaimCategory::Reimbursement);
                    health.hospital_name = "City Hospital".to_string();
                    health.claim_amount = Some(MoneyFixtures::claim_amount());
                }
                domain_claims::ClaimDetails::Car(car) => {
                    car.accident_type = "collision".to_string();
                }
                domain_claims::ClaimDetails::Life(life) => {
                    life.date_of_death = Some(TemporalFixtures::recent_incident_date());
                    life.deceased_name = "R. Sharma".to_string();
                }
            }
        }
        self
    }

    /// Fills gate-passing claimant and bank blocks
    pub fn with_contact_and_bank(mut self) -> Self {
        self.draft.claimant = complete_claimant();
        self.draft.bank = complete_bank_details();
        self
    }

    pub fn build(self) -> ClaimDraft {
        self.draft
    }
}

/// Builder for file selections fed to the upload orchestrator
pub struct TestFileBuilder {
    name: String,
    mime_type: String,
    category: DocumentCategory,
    bytes: Vec<u8>,
}

impl TestFileBuilder {
    pub fn new(category: impl Into<DocumentCategory>) -> Self {
        let category = category.into();
        Self {
            name: format!("{category}.pdf"),
            mime_type: "application/pdf".to_string(),
            category,
            bytes: vec![0u8; 16],
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn build(self) -> NewFile {
        NewFile {
            source: FileSource::Memory(Arc::new(self.bytes.clone())),
            name: self.name,
            size: self.bytes.len() as u64,
            mime_type: self.mime_type,
            category: self.category,
        }
    }
}
