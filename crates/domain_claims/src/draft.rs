//! The claim draft
//!
//! One mutable draft exists per wizard session, created on entry and
//! discarded on navigation away or after a successful submission. The
//! type-specific answers live in a tagged union keyed by claim type, so
//! switching type replaces the whole bag and stale answers from the
//! previous type cannot leak into the payload.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimType, Money, PolicyId, UserId};

/// Health claims split into two document regimes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthClaimCategory {
    Cashless,
    Reimbursement,
}

impl HealthClaimCategory {
    /// Maps a backend/UI tag onto a category. Anything that is not
    /// recognizably cashless is treated as reimbursement.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("cashless") {
            HealthClaimCategory::Cashless
        } else {
            HealthClaimCategory::Reimbursement
        }
    }
}

/// Answers collected for a health claim
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthDetails {
    pub claim_category: Option<HealthClaimCategory>,
    pub hospital_name: String,
    pub hospital_city: String,
    pub admission_date: Option<NaiveDate>,
    pub discharge_date: Option<NaiveDate>,
    pub room_category: String,
    pub ailment: String,
    pub treatment: String,
    pub claim_amount: Option<Money>,
}

/// Answers collected for a car claim
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarDetails {
    pub accident_type: String,
    pub accident_description: String,
    /// None until the question is answered
    pub police_complaint_filed: Option<bool>,
    pub fir_number: String,
    pub police_station: String,
    /// None until the question is answered
    pub third_party_involved: Option<bool>,
    pub third_party_details: String,
    pub driver_name: String,
    pub driver_license_number: String,
    pub vehicle_registration: String,
    pub garage_name: String,
    pub estimated_repair_cost: Option<Money>,
}

/// Answers collected for a life claim
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifeDetails {
    pub deceased_name: String,
    pub date_of_death: Option<NaiveDate>,
    pub place_of_death: String,
    pub cause_of_death: String,
    pub relation_to_deceased: String,
    pub nominee_name: String,
    pub sum_assured: Option<Money>,
}

/// The type-specific detail bag, exactly one active at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "claim_type", rename_all = "lowercase")]
pub enum ClaimDetails {
    Health(HealthDetails),
    Car(CarDetails),
    Life(LifeDetails),
}

impl ClaimDetails {
    /// An empty bag for a freshly selected claim type
    pub fn empty(claim_type: ClaimType) -> Self {
        match claim_type {
            ClaimType::Health => ClaimDetails::Health(HealthDetails::default()),
            ClaimType::Car => ClaimDetails::Car(CarDetails::default()),
            ClaimType::Life => ClaimDetails::Life(LifeDetails::default()),
        }
    }

    pub fn claim_type(&self) -> ClaimType {
        match self {
            ClaimDetails::Health(_) => ClaimType::Health,
            ClaimDetails::Car(_) => ClaimType::Car,
            ClaimDetails::Life(_) => ClaimType::Life,
        }
    }

    pub fn as_health(&self) -> Option<&HealthDetails> {
        match self {
            ClaimDetails::Health(details) => Some(details),
            _ => None,
        }
    }

    pub fn as_car(&self) -> Option<&CarDetails> {
        match self {
            ClaimDetails::Car(details) => Some(details),
            _ => None,
        }
    }

    pub fn as_life(&self) -> Option<&LifeDetails> {
        match self {
            ClaimDetails::Life(details) => Some(details),
            _ => None,
        }
    }

    pub fn as_health_mut(&mut self) -> Option<&mut HealthDetails> {
        match self {
            ClaimDetails::Health(details) => Some(details),
            _ => None,
        }
    }

    pub fn as_car_mut(&mut self) -> Option<&mut CarDetails> {
        match self {
            ClaimDetails::Car(details) => Some(details),
            _ => None,
        }
    }

    pub fn as_life_mut(&mut self) -> Option<&mut LifeDetails> {
        match self {
            ClaimDetails::Life(details) => Some(details),
            _ => None,
        }
    }
}

/// Contact details of the claimant (or patient, for health claims)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimantInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
}

/// Settlement account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Savings,
    Current,
}

/// Settlement bank account captured in step 6
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_holder: String,
    pub account_number: String,
    pub confirm_account_number: String,
    pub ifsc: String,
    pub bank_name: String,
    pub branch: String,
    pub account_type: Option<AccountType>,
}

/// The whole form state of one wizard session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimDraft {
    pub user_id: UserId,
    pub selected_policy_id: Option<PolicyId>,
    pub intimation_date: NaiveDate,
    pub intimation_time: NaiveTime,
    pub incident_date: Option<NaiveDate>,
    pub incident_time: Option<NaiveTime>,
    pub incident_location: String,
    pub incident_description: String,
    /// None until the claim type is chosen in step 1
    pub details: Option<ClaimDetails>,
    pub claimant: ClaimantInfo,
    pub bank: BankDetails,
    pub created_at: DateTime<Utc>,
}

impl ClaimDraft {
    /// Creates a fresh draft with the intimation stamped "now"
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            selected_policy_id: None,
            intimation_date: now.date_naive(),
            intimation_time: now.time(),
            incident_date: None,
            incident_time: None,
            incident_location: String::new(),
            incident_description: String::new(),
            details: None,
            claimant: ClaimantInfo::default(),
            bank: BankDetails::default(),
            created_at: now,
        }
    }

    pub fn claim_type(&self) -> Option<ClaimType> {
        self.details.as_ref().map(ClaimDetails::claim_type)
    }

    /// Selects (or switches) the claim type.
    ///
    /// Switching replaces the detail bag with an empty one for the new
    /// type; re-selecting the current type keeps the answers entered so
    /// far.
    pub fn set_claim_type(&mut self, claim_type: ClaimType) {
        if self.claim_type() != Some(claim_type) {
            self.details = Some(ClaimDetails::empty(claim_type));
        }
    }
}
