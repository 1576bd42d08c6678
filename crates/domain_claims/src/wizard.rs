//! The wizard controller
//!
//! Owns the draft, the current step, the upload list, and the submission
//! state for one session. Forward navigation runs the current step's gate;
//! backward navigation is unconditional. Confirmation is reached only
//! through [`submit`](ClaimWizard::submit).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use core_kernel::{ApplicationId, ClaimType, PolicyId, UserId};
use domain_uploads::{DocumentUploader, UploadContext, UploadOrchestrator};

use crate::documents::{required_documents, RequiredDocument};
use crate::draft::ClaimDraft;
use crate::error::WizardError;
use crate::ports::ClaimRepository;
use crate::submission::SubmissionPhase;
use crate::validation;

/// The eight steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    TypeSelection,
    Intimation,
    IncidentDetails,
    Documents,
    ClaimantInfo,
    BankAccount,
    Review,
    Confirmation,
}

impl WizardStep {
    /// 1-based position for display ("Step 4 of 8")
    pub fn number(self) -> u8 {
        match self {
            WizardStep::TypeSelection => 1,
            WizardStep::Intimation => 2,
            WizardStep::IncidentDetails => 3,
            WizardStep::Documents => 4,
            WizardStep::ClaimantInfo => 5,
            WizardStep::BankAccount => 6,
            WizardStep::Review => 7,
            WizardStep::Confirmation => 8,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::TypeSelection),
            2 => Some(WizardStep::Intimation),
            3 => Some(WizardStep::IncidentDetails),
            4 => Some(WizardStep::Documents),
            5 => Some(WizardStep::ClaimantInfo),
            6 => Some(WizardStep::BankAccount),
            7 => Some(WizardStep::Review),
            8 => Some(WizardStep::Confirmation),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Heading shown above the step
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::TypeSelection => "Claim Type & Policy",
            WizardStep::Intimation => "Intimation Details",
            WizardStep::IncidentDetails => "Incident Details",
            WizardStep::Documents => "Upload Documents",
            WizardStep::ClaimantInfo => "Claimant Information",
            WizardStep::BankAccount => "Bank Details",
            WizardStep::Review => "Review & Submit",
            WizardStep::Confirmation => "Confirmation",
        }
    }
}

/// One claim-submission session
pub struct ClaimWizard {
    pub(crate) draft: ClaimDraft,
    pub(crate) step: WizardStep,
    pub(crate) uploads: UploadOrchestrator,
    pub(crate) repository: Arc<dyn ClaimRepository>,
    pub(crate) phase: SubmissionPhase,
    pub(crate) claim_number: Option<ApplicationId>,
    pub(crate) warnings: Vec<String>,
}

impl ClaimWizard {
    /// Opens a fresh session for the user
    pub fn new(
        user_id: UserId,
        uploader: Arc<dyn DocumentUploader>,
        repository: Arc<dyn ClaimRepository>,
    ) -> Self {
        let uploads = UploadOrchestrator::new(
            uploader,
            UploadContext {
                uploader_id: user_id,
                policy_id: None,
            },
        );

        Self {
            draft: ClaimDraft::new(user_id),
            step: WizardStep::TypeSelection,
            uploads,
            repository,
            phase: SubmissionPhase::Idle,
            claim_number: None,
            warnings: Vec::new(),
        }
    }

    pub fn draft(&self) -> &ClaimDraft {
        &self.draft
    }

    /// Field edits never validate; gates run on navigation only
    pub fn draft_mut(&mut self) -> &mut ClaimDraft {
        &mut self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn uploads(&self) -> &UploadOrchestrator {
        &self.uploads
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Set once the submission created the claim record
    pub fn claim_number(&self) -> Option<ApplicationId> {
        self.claim_number
    }

    /// Non-fatal problems collected during submission
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Selects the claim type, replacing any prior type's answers
    pub fn set_claim_type(&mut self, claim_type: ClaimType) {
        self.draft.set_claim_type(claim_type);
    }

    /// Selects the backing policy and scopes future uploads to it
    pub fn select_policy(&mut self, policy_id: PolicyId) {
        self.draft.selected_policy_id = Some(policy_id);
        self.uploads.set_policy(Some(policy_id));
    }

    /// The document table for the current draft; empty until a claim type
    /// is chosen
    pub fn required_documents(&self) -> Vec<RequiredDocument> {
        self.draft
            .details
            .as_ref()
            .map(required_documents)
            .unwrap_or_default()
    }

    /// Moves forward one step if the current gate passes
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let blocked = match self.step {
            WizardStep::TypeSelection => validation::check_selection(&self.draft),
            WizardStep::Intimation => None,
            WizardStep::IncidentDetails => validation::check_incident(&self.draft),
            WizardStep::Documents => {
                validation::check_documents(&self.draft, &self.uploads.categories_present())
            }
            WizardStep::ClaimantInfo => validation::check_claimant(&self.draft),
            WizardStep::BankAccount => validation::check_bank(&self.draft),
            WizardStep::Review => return Err(WizardError::SubmitRequired),
            WizardStep::Confirmation => return Err(WizardError::WizardComplete),
        };

        if let Some(message) = blocked {
            return Err(WizardError::StepBlocked {
                step: self.step,
                message,
            });
        }

        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Moves back one step; available on steps 2-7
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::TypeSelection => Err(WizardError::AlreadyAtFirstStep),
            WizardStep::Confirmation => Err(WizardError::WizardComplete),
            _ => {
                if let Some(prev) = self.step.prev() {
                    self.step = prev;
                }
                Ok(self.step)
            }
        }
    }
}
