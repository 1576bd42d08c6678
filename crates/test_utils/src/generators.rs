//! Property-Based Test Data Generators
//!
//! Proptest strategies for domain values used across the suites.

use proptest::prelude::*;

use core_kernel::{ClaimType, DocumentCategory};

/// Any of the three claim types
pub fn arb_claim_type() -> impl Strategy<Value = ClaimType> {
    prop_oneof![
        Just(ClaimType::Health),
        Just(ClaimType::Life),
        Just(ClaimType::Car),
    ]
}

/// Plausible bank account numbers (9-18 digits)
pub fn arb_account_number() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 9..=18)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Backend policy-type tags, including unhelpful ones that force the
/// plan-name fallback
pub fn arb_policy_type_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Health Insurance".to_string()),
        Just("Term Life".to_string()),
        Just("Motor".to_string()),
        Just("General".to_string()),
        Just(String::new()),
    ]
}

/// Kebab-case category slugs in the shape the requirement tables use
pub fn arb_document_category() -> impl Strategy<Value = DocumentCategory> {
    "[a-z]{3,10}(-[a-z]{3,10}){0,2}".prop_map(|slug| DocumentCategory::from(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn account_numbers_are_numeric_and_sized(number in arb_account_number()) {
            prop_assert!(number.len() >= 9 && number.len() <= 18);
            prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn category_slugs_are_kebab_case(category in arb_document_category()) {
            let slug = category.as_str();
            prop_assert!(!slug.is_empty());
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }
}
