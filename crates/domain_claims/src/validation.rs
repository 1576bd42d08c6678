//! Step validation gates
//!
//! Each gate inspects the current draft synchronously and reports the first
//! unmet condition as a user-visible message; the remaining checks are not
//! evaluated. The check order below is fixed, so the reported message is
//! deterministic for a given draft.

use std::collections::HashSet;

use core_kernel::DocumentCategory;

use crate::documents::required_documents;
use crate::draft::{ClaimDetails, ClaimDraft};

/// Step 1: a claim type and a policy must be chosen
pub fn check_selection(draft: &ClaimDraft) -> Option<String> {
    if draft.details.is_none() {
        return Some("Select a claim type to continue".to_string());
    }
    if draft.selected_policy_id.is_none() {
        return Some("Select a policy to continue".to_string());
    }
    None
}

/// Step 3: the incident date plus the type-specific anchor field
pub fn check_incident(draft: &ClaimDraft) -> Option<String> {
    if draft.incident_date.is_none() {
        return Some("Incident date is required".to_string());
    }

    match draft.details.as_ref() {
        Some(ClaimDetails::Health(health)) if health.hospital_name.is_empty() => {
            Some("Hospital name is required".to_string())
        }
        Some(ClaimDetails::Car(car)) if car.accident_type.is_empty() => {
            Some("Accident type is required".to_string())
        }
        Some(ClaimDetails::Life(life)) if life.date_of_death.is_none() => {
            Some("Date of death is required".to_string())
        }
        _ => None,
    }
}

/// Step 4: every required document slot must have at least one file in the
/// list. Presence is enough here - upload success is only demanded at
/// final submission. The message names the first missing slot in table
/// order.
pub fn check_documents(
    draft: &ClaimDraft,
    present: &HashSet<DocumentCategory>,
) -> Option<String> {
    let details = draft.details.as_ref()?;
    required_documents(details)
        .into_iter()
        .filter(|doc| doc.required)
        .find(|doc| !present.contains(&doc.category))
        .map(|doc| format!("Missing required document: {}", doc.display_name))
}

/// Step 5: claimant contact essentials
pub fn check_claimant(draft: &ClaimDraft) -> Option<String> {
    if draft.claimant.name.is_empty() {
        return Some("Claimant name is required".to_string());
    }
    if draft.claimant.phone.is_empty() {
        return Some("Claimant phone number is required".to_string());
    }
    if draft.claimant.email.is_empty() {
        return Some("Claimant email is required".to_string());
    }
    None
}

/// Step 6: settlement account essentials, with exact confirmation match
pub fn check_bank(draft: &ClaimDraft) -> Option<String> {
    if draft.bank.account_holder.is_empty() {
        return Some("Account holder name is required".to_string());
    }
    if draft.bank.account_number.is_empty() {
        return Some("Account number is required".to_string());
    }
    if draft.bank.ifsc.is_empty() {
        return Some("IFSC code is required".to_string());
    }
    if draft.bank.account_number != draft.bank.confirm_account_number {
        return Some("Account numbers do not match".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{ClaimType, PolicyId, UserId};

    fn draft() -> ClaimDraft {
        ClaimDraft::new(UserId::new())
    }

    #[test]
    fn test_selection_checks_type_first() {
        let mut d = draft();
        assert_eq!(
            check_selection(&d).unwrap(),
            "Select a claim type to continue"
        );

        d.set_claim_type(ClaimType::Health);
        assert_eq!(check_selection(&d).unwrap(), "Select a policy to continue");

        d.selected_policy_id = Some(PolicyId::new());
        assert!(check_selection(&d).is_none());
    }

    #[test]
    fn test_incident_date_outranks_type_field() {
        let mut d = draft();
        d.set_claim_type(ClaimType::Car);
        assert_eq!(check_incident(&d).unwrap(), "Incident date is required");

        d.incident_date = chrono::NaiveDate::from_ymd_opt(2024, 3, 12);
        assert_eq!(check_incident(&d).unwrap(), "Accident type is required");

        d.details.as_mut().unwrap().as_car_mut().unwrap().accident_type =
            "collision".to_string();
        assert!(check_incident(&d).is_none());
    }

    #[test]
    fn test_bank_mismatch_is_reported_last() {
        let mut d = draft();
        d.bank.account_holder = "A Kumar".to_string();
        d.bank.account_number = "1234567890".to_string();
        d.bank.ifsc = "HDFC0001234".to_string();
        d.bank.confirm_account_number = "1234567891".to_string();
        assert_eq!(check_bank(&d).unwrap(), "Account numbers do not match");

        d.bank.confirm_account_number = "1234567890".to_string();
        assert!(check_bank(&d).is_none());
    }

    #[test]
    fn test_documents_gate_names_first_missing_slot() {
        let mut d = draft();
        d.set_claim_type(ClaimType::Life);
        let mut present = HashSet::new();
        present.insert(DocumentCategory::from("claim-form"));

        let message = check_documents(&d, &present).unwrap();
        assert_eq!(message, "Missing required document: Death Certificate");
    }
}
