//! Tests for the document requirement resolver

use domain_claims::{
    required_documents, required_pairs, CarDetails, ClaimDetails, HealthClaimCategory,
    HealthDetails, LifeDetails,
};

mod fixed_tables {
    use super::*;

    #[test]
    fn test_every_claim_type_has_a_non_empty_table() {
        let all = [
            ClaimDetails::Health(HealthDetails::default()),
            ClaimDetails::Car(CarDetails::default()),
            ClaimDetails::Life(LifeDetails::default()),
        ];
        for details in &all {
            let docs = required_documents(details);
            assert!(!docs.is_empty());
            // The claim form is universal and always mandatory
            let form = docs
                .iter()
                .find(|d| d.category.as_str() == "claim-form")
                .expect("claim form slot");
            assert!(form.required);
        }
    }

    #[test]
    fn test_health_reimbursement_required_set() {
        let details = ClaimDetails::Health(HealthDetails {
            claim_category: Some(HealthClaimCategory::Reimbursement),
            ..Default::default()
        });
        let required: Vec<String> = required_pairs(&details)
            .into_iter()
            .map(|(category, _)| category.as_str().to_string())
            .collect();
        assert_eq!(
            required,
            vec![
                "claim-form",
                "discharge-summary",
                "hospital-bills",
                "pharmacy-bills",
                "investigation-reports",
                "doctor-prescription",
                "id-proof",
                "policy-copy",
            ]
        );
    }

    #[test]
    fn test_health_cashless_required_set() {
        let details = ClaimDetails::Health(HealthDetails {
            claim_category: Some(HealthClaimCategory::Cashless),
            ..Default::default()
        });
        let required: Vec<String> = required_pairs(&details)
            .into_iter()
            .map(|(category, _)| category.as_str().to_string())
            .collect();
        assert_eq!(
            required,
            vec![
                "claim-form",
                "pre-authorization",
                "id-proof",
                "health-card",
                "doctor-prescription",
            ]
        );
    }

    #[test]
    fn test_life_required_set() {
        let details = ClaimDetails::Life(LifeDetails::default());
        let required: Vec<String> = required_pairs(&details)
            .into_iter()
            .map(|(category, _)| category.as_str().to_string())
            .collect();
        assert_eq!(
            required,
            vec![
                "claim-form",
                "death-certificate",
                "policy-document",
                "id-proof-claimant",
                "relationship-proof",
            ]
        );
    }
}

mod conditional_flags {
    use super::*;
    use proptest::prelude::*;

    fn car(police: Option<bool>, third_party: Option<bool>) -> ClaimDetails {
        ClaimDetails::Car(CarDetails {
            police_complaint_filed: police,
            third_party_involved: third_party,
            ..Default::default()
        })
    }

    #[test]
    fn test_both_flags_set() {
        let docs = required_documents(&car(Some(true), Some(true)));
        assert!(docs.iter().find(|d| d.category.as_str() == "fir-copy").unwrap().required);
        assert!(
            docs.iter()
                .find(|d| d.category.as_str() == "third-party-documents")
                .unwrap()
                .required
        );
    }

    #[test]
    fn test_unanswered_questions_leave_flags_off() {
        let docs = required_documents(&car(None, None));
        assert!(!docs.iter().find(|d| d.category.as_str() == "fir-copy").unwrap().required);
        assert!(
            !docs
                .iter()
                .find(|d| d.category.as_str() == "third-party-documents")
                .unwrap()
                .required
        );
    }

    proptest! {
        // The two conditional flags track their answers independently and
        // never affect the rest of the table
        #[test]
        fn conditional_flags_track_answers(police in proptest::option::of(any::<bool>()),
                                           third_party in proptest::option::of(any::<bool>())) {
            let docs = required_documents(&car(police, third_party));

            let fir = docs.iter().find(|d| d.category.as_str() == "fir-copy").unwrap();
            prop_assert_eq!(fir.required, police == Some(true));

            let tp = docs
                .iter()
                .find(|d| d.category.as_str() == "third-party-documents")
                .unwrap();
            prop_assert_eq!(tp.required, third_party == Some(true));

            let unconditional: Vec<_> = docs
                .iter()
                .filter(|d| {
                    d.category.as_str() != "fir-copy"
                        && d.category.as_str() != "third-party-documents"
                })
                .map(|d| (d.category.as_str().to_string(), d.required))
                .collect();
            let baseline: Vec<_> = required_documents(&car(None, None))
                .iter()
                .filter(|d| {
                    d.category.as_str() != "fir-copy"
                        && d.category.as_str() != "third-party-documents"
                })
                .map(|d| (d.category.as_str().to_string(), d.required))
                .collect();
            prop_assert_eq!(unconditional, baseline);
        }
    }
}
