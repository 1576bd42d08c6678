//! Policy view consumed by the wizard
//!
//! Policies are issued and owned by the backend; the wizard receives them
//! fully formed and only filters and displays them. The `policy_type` field
//! is a free-form backend string, so claim-type matching is substring based
//! with a plan-name fallback for records whose type field is unhelpful.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ApplicationId, ClaimType, Money, PolicyId, UserId};

/// A policy as presented for selection in step 1 of the wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Backend-assigned identifier
    pub id: PolicyId,
    /// Owning user
    pub holder_id: UserId,
    /// Human-facing policy number
    pub policy_number: String,
    /// Product display name
    pub plan_name: String,
    /// Free-form line-of-business tag from the backend
    pub policy_type: String,
    /// Sum covered
    pub coverage: Money,
    /// End of the coverage period, if bounded
    pub valid_until: Option<NaiveDate>,
    /// The application that originally produced this policy, if known
    pub source_application_id: Option<ApplicationId>,
    /// Issue timestamp
    pub issued_at: DateTime<Utc>,
}

impl Policy {
    /// Returns true if this policy can back a claim of the given type.
    ///
    /// The backend's `policy_type` is matched first by case-insensitive
    /// substring; records with an unhelpful type fall back to keyword
    /// matching on the plan name.
    pub fn covers(&self, claim_type: ClaimType) -> bool {
        let type_tag = self.policy_type.to_ascii_lowercase();
        if keywords_for(claim_type).iter().any(|kw| type_tag.contains(kw)) {
            return true;
        }

        let plan = self.plan_name.to_ascii_lowercase();
        keywords_for(claim_type).iter().any(|kw| plan.contains(kw))
    }

    /// Returns true if the coverage period has ended as of `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        matches!(self.valid_until, Some(until) if until < today)
    }
}

/// Keywords recognized for each claim line, in both the type tag and the
/// plan name. Order is irrelevant; any hit counts.
fn keywords_for(claim_type: ClaimType) -> &'static [&'static str] {
    match claim_type {
        ClaimType::Health => &["health", "mediclaim", "medical"],
        ClaimType::Life => &["life", "term"],
        ClaimType::Car => &["car", "motor", "auto", "vehicle"],
    }
}

/// Filters a policy list down to those that can back the given claim type
pub fn filter_by_claim_type(policies: &[Policy], claim_type: ClaimType) -> Vec<Policy> {
    policies
        .iter()
        .filter(|p| p.covers(claim_type))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn policy(policy_type: &str, plan_name: &str) -> Policy {
        Policy {
            id: PolicyId::new(),
            holder_id: UserId::new(),
            policy_number: "HLT-2024-0001".to_string(),
            plan_name: plan_name.to_string(),
            policy_type: policy_type.to_string(),
            coverage: Money::new(dec!(500000), core_kernel::Currency::INR),
            valid_until: None,
            source_application_id: None,
            issued_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_on_type_tag() {
        let p = policy("Health Insurance", "Family Shield");
        assert!(p.covers(ClaimType::Health));
        assert!(!p.covers(ClaimType::Car));
    }

    #[test]
    fn test_falls_back_to_plan_name() {
        let p = policy("General", "Comprehensive Motor Cover");
        assert!(p.covers(ClaimType::Car));
    }

    #[test]
    fn test_term_plan_counts_as_life() {
        let p = policy("", "Smart Term Plan Plus");
        assert!(p.covers(ClaimType::Life));
    }

    #[test]
    fn test_expiry() {
        let mut p = policy("Health", "Family Shield");
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(!p.is_expired(today));

        p.valid_until = Some(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
        assert!(p.is_expired(today));

        p.valid_until = Some(today);
        assert!(!p.is_expired(today));
    }

    #[test]
    fn test_filter_by_claim_type() {
        let policies = vec![
            policy("Health Insurance", "Family Shield"),
            policy("Motor", "Drive Secure"),
            policy("General", "Golden Life Saver"),
        ];

        let health = filter_by_claim_type(&policies, ClaimType::Health);
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].plan_name, "Family Shield");

        let life = filter_by_claim_type(&policies, ClaimType::Life);
        assert_eq!(life.len(), 1);
        assert_eq!(life[0].plan_name, "Golden Life Saver");
    }
}
