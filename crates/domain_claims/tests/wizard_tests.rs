//! Tests for wizard navigation and validation gates

use std::sync::Arc;

use core_kernel::{ClaimType, PolicyId, UserId};
use domain_claims::{ClaimWizard, InMemoryClaimRepository, WizardError, WizardStep};
use domain_uploads::{FileSource, InMemoryUploader, NewFile};

fn wizard() -> (ClaimWizard, Arc<InMemoryUploader>) {
    let uploader = Arc::new(InMemoryUploader::new("https://docs.example.com"));
    let repository = Arc::new(InMemoryClaimRepository::new());
    (
        ClaimWizard::new(UserId::new(), uploader.clone(), repository),
        uploader,
    )
}

fn file(name: &str, category: &str) -> NewFile {
    NewFile {
        source: FileSource::Memory(Arc::new(vec![0u8; 4])),
        name: name.to_string(),
        size: 4,
        mime_type: "application/pdf".to_string(),
        category: category.into(),
    }
}

fn blocked_message(error: WizardError) -> String {
    match error {
        WizardError::StepBlocked { message, .. } => message,
        other => panic!("expected a blocked step, got: {other}"),
    }
}

mod type_selection {
    use super::*;

    #[tokio::test]
    async fn test_rejected_without_claim_type() {
        let (mut wizard, _) = wizard();
        let message = blocked_message(wizard.advance().unwrap_err());
        assert_eq!(message, "Select a claim type to continue");
        assert_eq!(wizard.step(), WizardStep::TypeSelection);
    }

    #[tokio::test]
    async fn test_rejected_without_policy() {
        let (mut wizard, _) = wizard();
        wizard.set_claim_type(ClaimType::Health);
        let message = blocked_message(wizard.advance().unwrap_err());
        assert_eq!(message, "Select a policy to continue");
    }

    #[tokio::test]
    async fn test_accepted_with_type_and_policy() {
        let (mut wizard, _) = wizard();
        wizard.set_claim_type(ClaimType::Health);
        wizard.select_policy(PolicyId::new());
        assert_eq!(wizard.advance().unwrap(), WizardStep::Intimation);
    }
}

mod navigation {
    use super::*;

    #[tokio::test]
    async fn test_intimation_advances_without_a_gate() {
        let (mut wizard, _) = wizard();
        wizard.set_claim_type(ClaimType::Health);
        wizard.select_policy(PolicyId::new());
        wizard.advance().unwrap();
        assert_eq!(wizard.advance().unwrap(), WizardStep::IncidentDetails);
    }

    #[tokio::test]
    async fn test_retreat_is_unconditional() {
        let (mut wizard, _) = wizard();
        wizard.set_claim_type(ClaimType::Health);
        wizard.select_policy(PolicyId::new());
        wizard.advance().unwrap();
        wizard.advance().unwrap();

        assert_eq!(wizard.retreat().unwrap(), WizardStep::Intimation);
        assert_eq!(wizard.retreat().unwrap(), WizardStep::TypeSelection);
    }

    #[tokio::test]
    async fn test_no_retreat_from_first_step() {
        let (mut wizard, _) = wizard();
        assert!(matches!(
            wizard.retreat(),
            Err(WizardError::AlreadyAtFirstStep)
        ));
    }

    #[tokio::test]
    async fn test_gate_failure_keeps_step_unchanged() {
        let (mut wizard, _) = wizard();
        wizard.set_claim_type(ClaimType::Car);
        wizard.select_policy(PolicyId::new());
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), WizardStep::IncidentDetails);

        // Incident date missing
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.step(), WizardStep::IncidentDetails);
    }
}

mod incident_gate {
    use super::*;

    #[tokio::test]
    async fn test_type_specific_anchor_fields() {
        let (mut wizard, _) = wizard();
        wizard.set_claim_type(ClaimType::Life);
        wizard.select_policy(PolicyId::new());
        wizard.advance().unwrap();
        wizard.advance().unwrap();

        wizard.draft_mut().incident_date = chrono::NaiveDate::from_ymd_opt(2024, 2, 2);
        let message = blocked_message(wizard.advance().unwrap_err());
        assert_eq!(message, "Date of death is required");

        wizard
            .draft_mut()
            .details
            .as_mut()
            .unwrap()
            .as_life_mut()
            .unwrap()
            .date_of_death = chrono::NaiveDate::from_ymd_opt(2024, 2, 1);
        assert_eq!(wizard.advance().unwrap(), WizardStep::Documents);
    }
}

mod documents_gate {
    use super::*;

    async fn car_wizard_at_documents() -> (ClaimWizard, Arc<InMemoryUploader>) {
        let (mut wizard, uploader) = wizard();
        wizard.set_claim_type(ClaimType::Car);
        wizard.select_policy(PolicyId::new());
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        wizard.draft_mut().incident_date = chrono::NaiveDate::from_ymd_opt(2024, 3, 3);
        {
            let car = wizard
                .draft_mut()
                .details
                .as_mut()
                .unwrap()
                .as_car_mut()
                .unwrap();
            car.accident_type = "collision".to_string();
            car.police_complaint_filed = Some(true);
        }
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), WizardStep::Documents);
        (wizard, uploader)
    }

    #[tokio::test]
    async fn test_missing_fir_copy_is_named() {
        let (mut wizard, _uploader) = car_wizard_at_documents().await;

        // Every required slot except the FIR copy has a file
        for (name, category) in [
            ("form.pdf", "claim-form"),
            ("rc.pdf", "rc-copy"),
            ("dl.pdf", "driving-license"),
            ("policy.pdf", "policy-copy"),
            ("estimate.pdf", "repair-estimate"),
        ] {
            wizard.uploads().add_file(file(name, category));
        }
        wizard.uploads().wait_idle().await;

        let message = blocked_message(wizard.advance().unwrap_err());
        assert_eq!(message, "Missing required document: FIR Copy");
    }

    #[tokio::test]
    async fn test_failed_upload_still_satisfies_presence_gate() {
        let (mut wizard, uploader) = car_wizard_at_documents().await;
        uploader.fail_file("fir.pdf", "network connection lost");

        for (name, category) in [
            ("form.pdf", "claim-form"),
            ("rc.pdf", "rc-copy"),
            ("dl.pdf", "driving-license"),
            ("policy.pdf", "policy-copy"),
            ("estimate.pdf", "repair-estimate"),
            ("fir.pdf", "fir-copy"),
        ] {
            wizard.uploads().add_file(file(name, category));
        }
        wizard.uploads().wait_idle().await;

        // The FIR upload failed, but presence is all this gate asks for
        let fir = wizard
            .uploads()
            .files()
            .into_iter()
            .find(|f| f.name == "fir.pdf")
            .unwrap();
        assert!(fir.failed());

        assert_eq!(wizard.advance().unwrap(), WizardStep::ClaimantInfo);
    }
}

mod bank_gate {
    use super::*;

    async fn wizard_at_bank() -> ClaimWizard {
        let (mut wizard, _) = wizard();
        wizard.set_claim_type(ClaimType::Health);
        wizard.select_policy(PolicyId::new());
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        wizard.draft_mut().incident_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 5);
        wizard
            .draft_mut()
            .details
            .as_mut()
            .unwrap()
            .as_health_mut()
            .unwrap()
            .hospital_name = "City Hospital".to_string();
        wizard.advance().unwrap();

        for doc in wizard.required_documents() {
            if doc.required {
                wizard
                    .uploads()
                    .add_file(file(&format!("{}.pdf", doc.category), doc.category.as_str()));
            }
        }
        wizard.uploads().wait_idle().await;
        wizard.advance().unwrap();

        wizard.draft_mut().claimant.name = "A Kumar".to_string();
        wizard.draft_mut().claimant.phone = "9876543210".to_string();
        wizard.draft_mut().claimant.email = "a.kumar@example.com".to_string();
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), WizardStep::BankAccount);
        wizard
    }

    #[tokio::test]
    async fn test_account_number_mismatch_blocks() {
        let mut wizard = wizard_at_bank().await;
        wizard.draft_mut().bank.account_holder = "A Kumar".to_string();
        wizard.draft_mut().bank.account_number = "1234567890".to_string();
        wizard.draft_mut().bank.confirm_account_number = "1234567891".to_string();
        wizard.draft_mut().bank.ifsc = "HDFC0001234".to_string();

        let message = blocked_message(wizard.advance().unwrap_err());
        assert_eq!(message, "Account numbers do not match");

        wizard.draft_mut().bank.confirm_account_number = "1234567890".to_string();
        assert_eq!(wizard.advance().unwrap(), WizardStep::Review);
    }

    #[tokio::test]
    async fn test_review_requires_submission_to_advance() {
        let mut wizard = wizard_at_bank().await;
        wizard.draft_mut().bank.account_holder = "A Kumar".to_string();
        wizard.draft_mut().bank.account_number = "1234567890".to_string();
        wizard.draft_mut().bank.confirm_account_number = "1234567890".to_string();
        wizard.draft_mut().bank.ifsc = "HDFC0001234".to_string();
        wizard.advance().unwrap();

        assert!(matches!(
            wizard.advance(),
            Err(WizardError::SubmitRequired)
        ));
        assert_eq!(wizard.step(), WizardStep::Review);
    }
}
