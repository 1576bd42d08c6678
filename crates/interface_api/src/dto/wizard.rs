//! Wizard session DTOs
//!
//! Section updates are partial: every field is optional and only present
//! fields are applied to the draft. Validation at this boundary covers
//! input shape only (email format, pincode length); the wizard's gates own
//! the business rules and run on navigation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{ClaimType, FileId, PolicyId, UserId};
use domain_claims::{AccountType, ClaimDraft, RequiredDocument, SubmissionPhase, WizardStep};
use domain_uploads::FileSnapshot;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub step: WizardStep,
    pub step_number: u8,
}

/// Full view of one wizard session
#[derive(Debug, Serialize)]
pub struct WizardSnapshot {
    pub session_id: Uuid,
    pub step: WizardStep,
    pub step_number: u8,
    pub step_label: String,
    pub phase: SubmissionPhase,
    pub claim_number: Option<String>,
    pub warnings: Vec<String>,
    pub draft: ClaimDraft,
    pub files: Vec<FileSnapshot>,
    pub required_documents: Vec<RequiredDocument>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub claim_type: ClaimType,
    pub policy_id: PolicyId,
}

#[derive(Debug, Deserialize)]
pub struct IntimationRequest {
    pub intimation_date: Option<NaiveDate>,
    pub intimation_time: Option<NaiveTime>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HealthPatch {
    /// Free-form tag; anything not recognized as cashless counts as
    /// reimbursement
    pub claim_category: Option<String>,
    pub hospital_name: Option<String>,
    pub hospital_city: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub discharge_date: Option<NaiveDate>,
    pub room_category: Option<String>,
    pub ailment: Option<String>,
    pub treatment: Option<String>,
    /// User-entered amount string, parsed server-side
    pub claim_amount: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CarPatch {
    pub accident_type: Option<String>,
    pub accident_description: Option<String>,
    pub police_complaint_filed: Option<bool>,
    pub fir_number: Option<String>,
    pub police_station: Option<String>,
    pub third_party_involved: Option<bool>,
    pub third_party_details: Option<String>,
    pub driver_name: Option<String>,
    pub driver_license_number: Option<String>,
    pub vehicle_registration: Option<String>,
    pub garage_name: Option<String>,
    pub estimated_repair_cost: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LifePatch {
    pub deceased_name: Option<String>,
    pub date_of_death: Option<NaiveDate>,
    pub place_of_death: Option<String>,
    pub cause_of_death: Option<String>,
    pub relation_to_deceased: Option<String>,
    pub nominee_name: Option<String>,
    pub sum_assured: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IncidentRequest {
    pub incident_date: Option<NaiveDate>,
    pub incident_time: Option<NaiveTime>,
    pub incident_location: Option<String>,
    pub incident_description: Option<String>,
    /// Applied only when the draft's claim type matches
    pub health: Option<HealthPatch>,
    pub car: Option<CarPatch>,
    pub life: Option<LifePatch>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ClaimantRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    #[validate(length(min = 6, max = 6))]
    pub pincode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BankRequest {
    pub account_holder: Option<String>,
    pub account_number: Option<String>,
    pub confirm_account_number: Option<String>,
    pub ifsc: Option<String>,
    pub bank_name: Option<String>,
    pub branch: Option<String>,
    pub account_type: Option<AccountType>,
}

#[derive(Debug, Deserialize)]
pub struct AddFileRequest {
    pub name: String,
    pub mime_type: String,
    /// Document category slug from the required-documents table
    pub category: String,
    /// Inline file content; its length wins over `size` when present
    pub content: Option<String>,
    pub size: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct FileAddedResponse {
    pub file_id: FileId,
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step: WizardStep,
    pub step_number: u8,
    pub step_label: String,
}

impl StepResponse {
    pub fn from_step(step: WizardStep) -> Self {
        Self {
            step,
            step_number: step.number(),
            step_label: step.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub claim_number: String,
    pub warnings: Vec<String>,
}
