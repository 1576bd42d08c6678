//! Claim intake errors

use thiserror::Error;

use core_kernel::PortError;
use domain_uploads::UploadsError;

use crate::wizard::WizardStep;

/// Errors raised by wizard navigation
#[derive(Debug, Error)]
pub enum WizardError {
    /// The current step's gate rejected the transition; the message names
    /// the first unmet condition
    #[error("{message}")]
    StepBlocked { step: WizardStep, message: String },

    #[error("Already at the first step")]
    AlreadyAtFirstStep,

    /// Review is left through submission, not plain forward navigation
    #[error("Submit the claim to continue")]
    SubmitRequired,

    /// The session already reached confirmation
    #[error("The claim has already been submitted")]
    WizardComplete,
}

/// Errors raised by the submission orchestration
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Submission is only available from the review step")]
    NotAtReview(WizardStep),

    /// A synchronous precondition failed before any network call
    #[error("{0}")]
    PreconditionFailed(String),

    /// The claim record could not be created; nothing was submitted
    #[error("Could not create the claim: {0}")]
    CreateFailed(#[source] PortError),

    /// Required document coverage failed after the aggregate upload pass.
    /// The claim record already exists and is left in place.
    #[error(
        "Required documents are still missing: {}. {succeeded} file(s) uploaded successfully.",
        .missing.join(", ")
    )]
    MissingDocuments {
        missing: Vec<String>,
        succeeded: usize,
    },

    /// An unexpected orchestrator failure during the upload pass
    #[error("Document upload failed: {0}")]
    Upload(#[source] UploadsError),
}

impl From<UploadsError> for SubmitError {
    fn from(error: UploadsError) -> Self {
        match error {
            UploadsError::MissingRequiredDocuments { missing, succeeded } => {
                SubmitError::MissingDocuments { missing, succeeded }
            }
            other => SubmitError::Upload(other),
        }
    }
}
