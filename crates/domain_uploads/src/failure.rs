//! Upload failure categorization
//!
//! Upstream upload errors arrive as free text. The UI needs a stable,
//! user-readable message per failure class, so the text is classified by
//! known substrings with a fixed precedence: the first matching category
//! wins and later checks are skipped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure classes, in classification precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadErrorKind {
    StorageBackend,
    Timeout,
    Network,
    PayloadTooLarge,
    UnsupportedType,
    Unauthorized,
    Server,
    Generic,
}

impl UploadErrorKind {
    /// Classifies raw error text into a failure kind.
    ///
    /// Matching is case-insensitive. Precedence is the declaration order of
    /// the enum; the first hit wins.
    pub fn classify(raw: &str) -> Self {
        let text = raw.to_ascii_lowercase();
        let matches = |needles: &[&str]| needles.iter().any(|n| text.contains(n));

        if matches(&["storage", "bucket", "object store"]) {
            UploadErrorKind::StorageBackend
        } else if matches(&["timeout", "timed out"]) {
            UploadErrorKind::Timeout
        } else if matches(&["network", "connection", "unreachable", "dns"]) {
            UploadErrorKind::Network
        } else if matches(&["too large", "payload", "exceeds", "413"]) {
            UploadErrorKind::PayloadTooLarge
        } else if matches(&["unsupported", "content type", "mime", "file type"]) {
            UploadErrorKind::UnsupportedType
        } else if matches(&["unauthorized", "forbidden", "auth", "401", "403"]) {
            UploadErrorKind::Unauthorized
        } else if matches(&["server", "internal", "500", "502", "503"]) {
            UploadErrorKind::Server
        } else {
            UploadErrorKind::Generic
        }
    }

    /// The message shown to the user for this kind
    pub fn user_message(&self) -> &'static str {
        match self {
            UploadErrorKind::StorageBackend => {
                "The storage service rejected the upload. Please try again."
            }
            UploadErrorKind::Timeout => "The upload timed out. Check your connection and retry.",
            UploadErrorKind::Network => "Network error during upload. Check your connection and retry.",
            UploadErrorKind::PayloadTooLarge => "This file is too large to upload.",
            UploadErrorKind::UnsupportedType => "This file type is not supported.",
            UploadErrorKind::Unauthorized => "You are not authorized to upload documents. Please sign in again.",
            UploadErrorKind::Server => "The server could not process the upload. Please retry.",
            UploadErrorKind::Generic => "The upload failed. Please retry.",
        }
    }
}

/// A categorized upload failure attached to a file record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFailure {
    pub kind: UploadErrorKind,
    /// The raw upstream error text, kept for logs and support
    pub detail: String,
}

impl UploadFailure {
    /// Classifies raw error text into a failure
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let detail = raw.into();
        Self {
            kind: UploadErrorKind::classify(&detail),
            detail,
        }
    }

    /// The message shown to the user
    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }
}

impl fmt::Display for UploadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for UploadFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_classifies() {
        let cases = [
            ("Storage bucket quota exceeded", UploadErrorKind::StorageBackend),
            ("request timed out after 30s", UploadErrorKind::Timeout),
            ("Network connection reset", UploadErrorKind::Network),
            ("payload exceeds maximum size", UploadErrorKind::PayloadTooLarge),
            ("unsupported content type: application/x-foo", UploadErrorKind::UnsupportedType),
            ("401 unauthorized", UploadErrorKind::Unauthorized),
            ("internal server error", UploadErrorKind::Server),
            ("something odd happened", UploadErrorKind::Generic),
        ];

        for (raw, expected) in cases {
            assert_eq!(UploadErrorKind::classify(raw), expected, "raw: {raw}");
        }
    }

    #[test]
    fn test_precedence_first_match_wins() {
        // Mentions both storage and timeout: storage is checked first
        let kind = UploadErrorKind::classify("storage backend timed out");
        assert_eq!(kind, UploadErrorKind::StorageBackend);

        // Mentions both network and the server: network outranks server
        let kind = UploadErrorKind::classify("server unreachable over network");
        assert_eq!(kind, UploadErrorKind::Network);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            UploadErrorKind::classify("REQUEST TIMED OUT"),
            UploadErrorKind::Timeout
        );
    }

    #[test]
    fn test_failure_keeps_detail() {
        let failure = UploadFailure::from_raw("bucket missing");
        assert_eq!(failure.kind, UploadErrorKind::StorageBackend);
        assert_eq!(failure.detail, "bucket missing");
        assert!(failure.user_message().contains("storage service"));
    }
}
