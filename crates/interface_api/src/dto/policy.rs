//! Policy DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimType, Money, PolicyId, UserId};
use domain_policy::Policy;

#[derive(Debug, Deserialize)]
pub struct ListPoliciesQuery {
    pub user_id: UserId,
    /// When present, only policies that can back this claim type are listed
    pub claim_type: Option<ClaimType>,
}

#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub id: PolicyId,
    pub policy_number: String,
    pub plan_name: String,
    pub policy_type: String,
    pub coverage: Money,
    pub valid_until: Option<NaiveDate>,
}

impl From<Policy> for PolicyResponse {
    fn from(policy: Policy) -> Self {
        Self {
            id: policy.id,
            policy_number: policy.policy_number,
            plan_name: policy.plan_name,
            policy_type: policy.policy_type,
            coverage: policy.coverage,
            valid_until: policy.valid_until,
        }
    }
}
