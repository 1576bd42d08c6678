//! Document requirement tables
//!
//! A pure function of the active detail bag: which document slots exist for
//! this claim, in display order, and which of them are mandatory. Health
//! claims use different tables for cashless and reimbursement; car claims
//! flip two flags based on the police-complaint and third-party answers.
//! The result is recomputed on demand and never cached.

use serde::{Deserialize, Serialize};

use core_kernel::DocumentCategory;

use crate::draft::{ClaimDetails, HealthClaimCategory};

/// One document slot for the upload step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredDocument {
    pub category: DocumentCategory,
    pub display_name: String,
    pub required: bool,
}

impl RequiredDocument {
    fn new(slug: &str, display_name: &str, required: bool) -> Self {
        Self {
            category: DocumentCategory::from(slug),
            display_name: display_name.to_string(),
            required,
        }
    }
}

/// Resolves the ordered document table for the active claim details
pub fn required_documents(details: &ClaimDetails) -> Vec<RequiredDocument> {
    match details {
        ClaimDetails::Health(health) => {
            let category = health
                .claim_category
                .unwrap_or(HealthClaimCategory::Reimbursement);
            match category {
                HealthClaimCategory::Cashless => cashless_documents(),
                HealthClaimCategory::Reimbursement => reimbursement_documents(),
            }
        }
        ClaimDetails::Car(car) => car_documents(
            car.police_complaint_filed == Some(true),
            car.third_party_involved == Some(true),
        ),
        ClaimDetails::Life(_) => life_documents(),
    }
}

/// The `(category, display name)` pairs of the required slots only, in
/// table order - the shape the upload coverage check consumes.
pub fn required_pairs(details: &ClaimDetails) -> Vec<(DocumentCategory, String)> {
    required_documents(details)
        .into_iter()
        .filter(|doc| doc.required)
        .map(|doc| (doc.category, doc.display_name))
        .collect()
}

fn cashless_documents() -> Vec<RequiredDocument> {
    vec![
        RequiredDocument::new("claim-form", "Claim Form", true),
        RequiredDocument::new("pre-authorization", "Pre-Authorization Form", true),
        RequiredDocument::new("id-proof", "Photo ID Proof", true),
        RequiredDocument::new("health-card", "Health Card / Policy Copy", true),
        RequiredDocument::new("doctor-prescription", "Doctor's Prescription", true),
        RequiredDocument::new("investigation-reports", "Investigation Reports", false),
    ]
}

fn reimbursement_documents() -> Vec<RequiredDocument> {
    vec![
        RequiredDocument::new("claim-form", "Claim Form", true),
        RequiredDocument::new("discharge-summary", "Discharge Summary", true),
        RequiredDocument::new("hospital-bills", "Hospital Bills and Receipts", true),
        RequiredDocument::new("pharmacy-bills", "Pharmacy Bills", true),
        RequiredDocument::new("investigation-reports", "Investigation Reports", true),
        RequiredDocument::new("doctor-prescription", "Doctor's Prescription", true),
        RequiredDocument::new("id-proof", "Photo ID Proof", true),
        RequiredDocument::new("policy-copy", "Policy Copy", true),
        RequiredDocument::new("cancelled-cheque", "Cancelled Cheque", false),
    ]
}

fn car_documents(police_complaint_filed: bool, third_party_involved: bool) -> Vec<RequiredDocument> {
    vec![
        RequiredDocument::new("claim-form", "Claim Form", true),
        RequiredDocument::new("rc-copy", "Vehicle RC Copy", true),
        RequiredDocument::new("driving-license", "Driving License", true),
        RequiredDocument::new("policy-copy", "Policy Copy", true),
        RequiredDocument::new("repair-estimate", "Repair Estimate", true),
        RequiredDocument::new("fir-copy", "FIR Copy", police_complaint_filed),
        RequiredDocument::new(
            "third-party-documents",
            "Third-Party Documents",
            third_party_involved,
        ),
        RequiredDocument::new("accident-photos", "Accident Photographs", false),
    ]
}

fn life_documents() -> Vec<RequiredDocument> {
    vec![
        RequiredDocument::new("claim-form", "Claim Form", true),
        RequiredDocument::new("death-certificate", "Death Certificate", true),
        RequiredDocument::new("policy-document", "Original Policy Document", true),
        RequiredDocument::new("id-proof-claimant", "Claimant Photo ID Proof", true),
        RequiredDocument::new("relationship-proof", "Proof of Relationship", true),
        RequiredDocument::new("medical-records", "Medical Records", false),
        RequiredDocument::new("post-mortem-report", "Post-Mortem Report", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{CarDetails, HealthDetails, LifeDetails};

    #[test]
    fn test_reimbursement_has_eight_required_documents() {
        let details = ClaimDetails::Health(HealthDetails {
            claim_category: Some(HealthClaimCategory::Reimbursement),
            ..Default::default()
        });
        let required: Vec<_> = required_documents(&details)
            .into_iter()
            .filter(|d| d.required)
            .collect();
        assert_eq!(required.len(), 8);
    }

    #[test]
    fn test_unset_health_category_uses_reimbursement_table() {
        let details = ClaimDetails::Health(HealthDetails::default());
        let docs = required_documents(&details);
        assert!(docs.iter().any(|d| d.category.as_str() == "discharge-summary"));
        assert!(!docs.iter().any(|d| d.category.as_str() == "pre-authorization"));
    }

    #[test]
    fn test_cashless_table_differs() {
        let details = ClaimDetails::Health(HealthDetails {
            claim_category: Some(HealthClaimCategory::Cashless),
            ..Default::default()
        });
        let docs = required_documents(&details);
        assert!(docs.iter().any(|d| d.category.as_str() == "pre-authorization"));
        assert!(!docs.iter().any(|d| d.category.as_str() == "hospital-bills"));
    }

    #[test]
    fn test_car_conditional_flags() {
        let base = CarDetails::default();
        let details = ClaimDetails::Car(base.clone());
        let fir = |docs: &[RequiredDocument]| {
            docs.iter()
                .find(|d| d.category.as_str() == "fir-copy")
                .unwrap()
                .required
        };
        let third_party = |docs: &[RequiredDocument]| {
            docs.iter()
                .find(|d| d.category.as_str() == "third-party-documents")
                .unwrap()
                .required
        };

        let docs = required_documents(&details);
        assert!(!fir(&docs));
        assert!(!third_party(&docs));

        let details = ClaimDetails::Car(CarDetails {
            police_complaint_filed: Some(true),
            third_party_involved: Some(false),
            ..base
        });
        let docs = required_documents(&details);
        assert!(fir(&docs));
        assert!(!third_party(&docs));
    }

    #[test]
    fn test_life_table_includes_death_certificate() {
        let details = ClaimDetails::Life(LifeDetails::default());
        let docs = required_documents(&details);
        assert!(!docs.is_empty());
        let cert = docs
            .iter()
            .find(|d| d.category.as_str() == "death-certificate")
            .unwrap();
        assert!(cert.required);
    }

    #[test]
    fn test_required_pairs_keeps_table_order() {
        let details = ClaimDetails::Car(CarDetails {
            police_complaint_filed: Some(true),
            ..Default::default()
        });
        let pairs = required_pairs(&details);
        let names: Vec<&str> = pairs.iter().map(|(_, name)| name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Claim Form",
                "Vehicle RC Copy",
                "Driving License",
                "Policy Copy",
                "Repair Estimate",
                "FIR Copy",
            ]
        );
    }
}
