//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more meaningful
//! error messages than standard assertions.

use domain_claims::{ClaimWizard, WizardError, WizardStep};
use domain_uploads::UploadedFile;

/// Asserts that the wizard sits on the expected step
pub fn assert_step(wizard: &ClaimWizard, expected: WizardStep) {
    assert_eq!(
        wizard.step(),
        expected,
        "expected wizard on step {} ({}), found step {} ({})",
        expected.number(),
        expected.label(),
        wizard.step().number(),
        wizard.step().label()
    );
}

/// Asserts that a navigation result is a gate rejection carrying the
/// expected message
pub fn assert_blocked_with(result: Result<WizardStep, WizardError>, expected_message: &str) {
    match result {
        Err(WizardError::StepBlocked { message, .. }) => assert_eq!(
            message, expected_message,
            "gate rejected with a different message"
        ),
        Err(other) => panic!("expected a blocked step, got error: {other}"),
        Ok(step) => panic!(
            "expected a blocked step, but navigation advanced to {} ({})",
            step.number(),
            step.label()
        ),
    }
}

/// Asserts that a file settled successfully
pub fn assert_upload_succeeded(file: &UploadedFile) {
    assert!(
        file.succeeded(),
        "expected file '{}' to have uploaded, found progress={} uploading={} error={:?}",
        file.name,
        file.progress,
        file.uploading,
        file.error.as_ref().map(|e| e.user_message())
    );
    assert_eq!(file.progress, 100, "successful file '{}' not at 100%", file.name);
}

/// Asserts that a file settled in the failed state
pub fn assert_upload_failed(file: &UploadedFile) {
    assert!(
        file.failed() && !file.uploading,
        "expected file '{}' to have failed, found progress={} uploading={} url={:?}",
        file.name,
        file.progress,
        file.uploading,
        file.uploaded_url
    );
    assert_eq!(file.progress, 0, "failed file '{}' kept progress", file.name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::TestFileBuilder;
    use domain_uploads::UploadedFile;

    #[test]
    fn test_upload_assertions_accept_matching_states() {
        let mut file = UploadedFile::begin(TestFileBuilder::new("claim-form").build());
        file.uploading = false;
        file.progress = 100;
        file.uploaded_url = Some("https://docs.example.com/x".to_string());
        assert_upload_succeeded(&file);

        let mut file = UploadedFile::begin(TestFileBuilder::new("claim-form").build());
        file.uploading = false;
        file.progress = 0;
        file.error = Some(domain_uploads::UploadFailure::from_raw("timed out"));
        assert_upload_failed(&file);
    }

    #[test]
    #[should_panic(expected = "expected file")]
    fn test_upload_assertion_rejects_mismatch() {
        let file = UploadedFile::begin(TestFileBuilder::new("claim-form").build());
        assert_upload_succeeded(&file);
    }
}
