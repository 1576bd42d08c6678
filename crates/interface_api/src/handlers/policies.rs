//! Policy listing handlers

use axum::{
    extract::{Query, State},
    Json,
};

use domain_policy::policy::filter_by_claim_type;

use crate::dto::policy::{ListPoliciesQuery, PolicyResponse};
use crate::{error::ApiError, AppState};

/// Lists a user's policies, optionally narrowed to those that can back a
/// given claim type
pub async fn list_policies(
    State(state): State<AppState>,
    Query(query): Query<ListPoliciesQuery>,
) -> Result<Json<Vec<PolicyResponse>>, ApiError> {
    let policies = state.policies.policies_for(query.user_id, None).await?;

    let matched = match query.claim_type {
        Some(claim_type) => filter_by_claim_type(&policies, claim_type),
        None => policies,
    };

    Ok(Json(matched.into_iter().map(PolicyResponse::from).collect()))
}
