//! Claim Intake Domain
//!
//! This crate implements the claim-submission wizard: an eight-step flow
//! from claim-type selection to confirmation.
//!
//! ```text
//! Type & Policy -> Intimation -> Incident -> Documents -> Claimant -> Bank -> Review -> Confirmation
//! ```
//!
//! Forward navigation passes through per-step validation gates; backward
//! navigation is unconditional. The final transition to Confirmation only
//! happens through the submission orchestration, which creates the claim,
//! uploads outstanding documents under the new application id, and patches
//! the claim with the hosted document metadata.

pub mod draft;
pub mod documents;
pub mod validation;
pub mod wizard;
pub mod submission;
pub mod ports;
pub mod error;

pub use draft::{
    AccountType, BankDetails, CarDetails, ClaimDetails, ClaimDraft, ClaimantInfo,
    HealthClaimCategory, HealthDetails, LifeDetails,
};
pub use documents::{required_documents, required_pairs, RequiredDocument};
pub use wizard::{ClaimWizard, WizardStep};
pub use submission::{SubmissionOutcome, SubmissionPhase};
pub use ports::{ClaimRepository, DocumentRecord, InMemoryClaimRepository, NewClaim};
pub use error::{SubmitError, WizardError};
