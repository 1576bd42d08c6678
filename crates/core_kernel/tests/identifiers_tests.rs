//! Unit tests for strongly-typed identifiers

use core_kernel::{ApplicationId, DocumentCategory, FileId, PolicyId, UserId};
use std::collections::HashSet;
use uuid::Uuid;

mod display_and_parse {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert!(UserId::new().to_string().starts_with("USR-"));
        assert!(PolicyId::new().to_string().starts_with("POL-"));
        assert!(ApplicationId::new().to_string().starts_with("APP-"));
        assert!(FileId::new().to_string().starts_with("FILE-"));
    }

    #[test]
    fn test_round_trip_with_prefix() {
        let id = ApplicationId::new_v7();
        let parsed: ApplicationId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_bare_uuid() {
        let uuid = Uuid::new_v4();
        let parsed: PolicyId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed, PolicyId::from(uuid));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<FileId>().is_err());
    }
}

mod uniqueness {
    use super::*;

    #[test]
    fn test_new_ids_are_distinct() {
        let ids: HashSet<FileId> = (0..100).map(|_| FileId::new()).collect();
        assert_eq!(ids.len(), 100);
    }
}

mod document_category {
    use super::*;

    #[test]
    fn test_category_is_a_stable_slug() {
        let cat = DocumentCategory::from("death-certificate");
        assert_eq!(cat.as_str(), "death-certificate");
        assert_eq!(cat.to_string(), "death-certificate");
    }

    #[test]
    fn test_categories_hash_by_slug() {
        let mut set = HashSet::new();
        set.insert(DocumentCategory::from("fir-copy"));
        set.insert(DocumentCategory::new("fir-copy"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serde_transparent() {
        let cat = DocumentCategory::from("hospital-bills");
        let json = serde_json::to_string(&cat).unwrap();
        assert_eq!(json, "\"hospital-bills\"");
        let back: DocumentCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cat);
    }
}
