//! Submission orchestration
//!
//! Drives the four-stage submission from the review step: create the claim
//! record, upload outstanding documents under the new application id, patch
//! the claim with the hosted metadata, confirm. The phase machine makes the
//! lenient branch explicit: once the claim record exists, only the modeled
//! document-coverage shortfall keeps the user on review; a finalize failure
//! is downgraded to a warning because the claim and its documents already
//! exist server-side.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::ApplicationId;
use domain_uploads::CLAIM_DOCUMENT_TYPE;

use crate::documents::required_pairs;
use crate::error::SubmitError;
use crate::ports::{DocumentRecord, NewClaim, SUBMITTED_STATUS};
use crate::wizard::{ClaimWizard, WizardStep};

/// Where a submission attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    Idle,
    Creating,
    Uploading,
    Finalizing,
    Done,
    Failed,
}

/// The result handed to the confirmation step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    /// The application id, shown to the user as the claim number
    pub claim_number: ApplicationId,
    /// Non-fatal problems encountered on the way
    pub warnings: Vec<String>,
}

impl ClaimWizard {
    /// Submits the claim from the review step.
    ///
    /// On success the wizard lands on Confirmation with the application id
    /// as its claim number. Failures before the claim record exists leave
    /// no side effects; a document-coverage shortfall afterwards leaves
    /// the created record in place and keeps the user on review so they
    /// can retry.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, SubmitError> {
        if self.step != WizardStep::Review {
            return Err(SubmitError::NotAtReview(self.step));
        }

        // Synchronous preconditions; no network call happens before these
        let policy_id = self.draft.selected_policy_id.ok_or_else(|| {
            SubmitError::PreconditionFailed("Select a policy before submitting".to_string())
        })?;
        let details = self.draft.details.clone().ok_or_else(|| {
            SubmitError::PreconditionFailed("Select a claim type before submitting".to_string())
        })?;
        if self.draft.claimant.name.is_empty()
            || self.draft.claimant.phone.is_empty()
            || self.draft.claimant.email.is_empty()
        {
            return Err(SubmitError::PreconditionFailed(
                "Claimant contact details are incomplete".to_string(),
            ));
        }

        let required = required_pairs(&details);
        let present = self.uploads.categories_present();
        if let Some((_, display_name)) = required
            .iter()
            .find(|(category, _)| !present.contains(category))
        {
            return Err(SubmitError::PreconditionFailed(format!(
                "Missing required document: {display_name}"
            )));
        }

        self.phase = SubmissionPhase::Creating;
        let payload = NewClaim {
            policy_id,
            user_id: self.draft.user_id,
            details: details.clone(),
            claimant: self.draft.claimant.clone(),
            bank: self.draft.bank.clone(),
            intimation_date: self.draft.intimation_date,
            intimation_time: self.draft.intimation_time,
            incident_date: self.draft.incident_date,
            incident_time: self.draft.incident_time,
            incident_location: self.draft.incident_location.clone(),
            incident_description: self.draft.incident_description.clone(),
            status: SUBMITTED_STATUS.to_string(),
        };

        let application_id = match self.repository.create_claim(payload, None).await {
            Ok(id) => id,
            Err(error) => {
                // Nothing exists server-side yet; this is the one hard stop
                self.phase = SubmissionPhase::Failed;
                return Err(SubmitError::CreateFailed(error));
            }
        };
        self.claim_number = Some(application_id);
        info!(claim = %application_id, "claim record created");

        self.phase = SubmissionPhase::Uploading;
        let completed = match self
            .uploads
            .upload_outstanding(application_id, &required)
            .await
        {
            Ok(completed) => completed,
            Err(error) => {
                // The claim record stays; the user retries from review.
                // The orphaned record is left for manual cleanup.
                self.phase = SubmissionPhase::Failed;
                warn!(
                    claim = %application_id,
                    "submission aborted after claim creation; record left in place"
                );
                return Err(error.into());
            }
        };

        self.phase = SubmissionPhase::Finalizing;
        let documents: Vec<DocumentRecord> = completed
            .iter()
            .map(|upload| DocumentRecord {
                category: upload.category.clone(),
                file_name: upload.file_name.clone(),
                url: upload.url.clone(),
                document_id: upload.document_id.clone(),
                document_type: CLAIM_DOCUMENT_TYPE.to_string(),
            })
            .collect();

        if let Err(error) = self
            .repository
            .attach_documents(application_id, documents, SUBMITTED_STATUS, None)
            .await
        {
            // Lenient branch: claim and documents already exist server-side
            warn!(claim = %application_id, %error, "failed to attach document metadata");
            self.warnings.push(
                "Your claim was submitted, but attaching document details failed. \
                 Our team will reconcile them."
                    .to_string(),
            );
        }

        self.phase = SubmissionPhase::Done;
        self.step = WizardStep::Confirmation;
        info!(claim = %application_id, documents = completed.len(), "claim submitted");

        Ok(SubmissionOutcome {
            claim_number: application_id,
            warnings: self.warnings.clone(),
        })
    }
}
