//! Test Fixtures
//!
//! Pre-built domain data with realistic values. Identity-carrying fixtures
//! (names, contact details) come from `fake` so tests do not accumulate
//! hard-coded personal data; structural values (IFSC codes, categories)
//! are fixed so assertions stay stable.

use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use once_cell::sync::Lazy;

use core_kernel::{ClaimType, Currency, Money};
use domain_claims::{BankDetails, ClaimantInfo};

/// The reference "today" used by date fixtures, fixed so tests are stable
pub static FIXTURE_TODAY: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid fixture date"));

/// Date fixtures anchored to [`FIXTURE_TODAY`]
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// An incident a few days before the fixture today
    pub fn recent_incident_date() -> NaiveDate {
        *FIXTURE_TODAY - chrono::Days::new(5)
    }

    /// A policy expiry comfortably in the future
    pub fn future_expiry() -> NaiveDate {
        *FIXTURE_TODAY + chrono::Days::new(365)
    }
}

/// String fixtures for structural fields
pub struct StringFixtures;

impl StringFixtures {
    pub fn ifsc() -> &'static str {
        "HDFC0001234"
    }

    pub fn account_number() -> &'static str {
        "1234567890"
    }

    pub fn phone() -> &'static str {
        "9876543210"
    }

    pub fn pincode() -> &'static str {
        "411001"
    }

    pub fn policy_number(claim_type: ClaimType) -> String {
        match claim_type {
            ClaimType::Health => "HLT-2024-0091".to_string(),
            ClaimType::Life => "LIF-2023-1147".to_string(),
            ClaimType::Car => "CAR-2024-0412".to_string(),
        }
    }
}

/// Money fixtures in the default currency
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn coverage() -> Money {
        Money::parse("500000", Currency::INR).expect("valid fixture amount")
    }

    pub fn claim_amount() -> Money {
        Money::parse("125000", Currency::INR).expect("valid fixture amount")
    }
}

/// A complete, gate-passing claimant contact block
pub fn complete_claimant() -> ClaimantInfo {
    ClaimantInfo {
        name: Name().fake(),
        phone: StringFixtures::phone().to_string(),
        email: SafeEmail().fake(),
        address: "14 MG Road".to_string(),
        city: "Pune".to_string(),
        pincode: StringFixtures::pincode().to_string(),
    }
}

/// A complete, gate-passing bank block with matching confirmation
pub fn complete_bank_details() -> BankDetails {
    let account_number = StringFixtures::account_number().to_string();
    BankDetails {
        account_holder: Name().fake(),
        account_number: account_number.clone(),
        confirm_account_number: account_number,
        ifsc: StringFixtures::ifsc().to_string(),
        bank_name: "HDFC Bank".to_string(),
        branch: "Camp Branch".to_string(),
        account_type: Some(domain_claims::AccountType::Savings),
    }
}
