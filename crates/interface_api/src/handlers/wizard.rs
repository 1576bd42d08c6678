//! Wizard session handlers
//!
//! The wizard itself lives in `domain_claims`; these handlers translate
//! HTTP requests into calls on the session's wizard and render snapshots
//! back out. Section updates are partial patches and never validate; the
//! gates run on the advance/retreat/submit endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{Currency, Money};
use domain_claims::{ClaimWizard, RequiredDocument};
use domain_uploads::{FileSource, NewFile};

use crate::dto::wizard::*;
use crate::error::ApiError;
use crate::sessions::SessionHandle;
use crate::AppState;

async fn session(state: &AppState, id: Uuid) -> Result<SessionHandle, ApiError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Wizard session not found: {id}")))
}

fn snapshot(session_id: Uuid, wizard: &ClaimWizard) -> WizardSnapshot {
    WizardSnapshot {
        session_id,
        step: wizard.step(),
        step_number: wizard.step().number(),
        step_label: wizard.step().label().to_string(),
        phase: wizard.phase(),
        claim_number: wizard.claim_number().map(|id| id.to_string()),
        warnings: wizard.warnings().to_vec(),
        draft: wizard.draft().clone(),
        files: wizard.uploads().snapshots(),
        required_documents: wizard.required_documents(),
    }
}

fn parse_amount(input: &str) -> Result<Money, ApiError> {
    Money::parse(input, Currency::INR).map_err(|err| ApiError::Validation(err.to_string()))
}

/// Opens a new wizard session
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionCreatedResponse>), ApiError> {
    let session_id = state
        .sessions
        .create(
            request.user_id,
            state.uploader.clone(),
            state.claims.clone(),
        )
        .await;

    let handle = session(&state, session_id).await?;
    let wizard = handle.lock().await;

    Ok((
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            session_id,
            step: wizard.step(),
            step_number: wizard.step().number(),
        }),
    ))
}

/// Returns the full session view
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardSnapshot>, ApiError> {
    let handle = session(&state, id).await?;
    let wizard = handle.lock().await;
    Ok(Json(snapshot(id, &wizard)))
}

/// Drops a session
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Wizard session not found: {id}")))
    }
}

/// Step 1: claim type and backing policy
pub async fn update_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<WizardSnapshot>, ApiError> {
    let policy = state.policies.get_policy(request.policy_id, None).await?;
    if !policy.covers(request.claim_type) {
        return Err(ApiError::Validation(format!(
            "Policy {} does not cover {} claims",
            policy.policy_number, request.claim_type
        )));
    }

    let handle = session(&state, id).await?;
    let mut wizard = handle.lock().await;
    wizard.set_claim_type(request.claim_type);
    wizard.select_policy(request.policy_id);
    Ok(Json(snapshot(id, &wizard)))
}

/// Step 2: intimation date and time
pub async fn update_intimation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<IntimationRequest>,
) -> Result<Json<WizardSnapshot>, ApiError> {
    let handle = session(&state, id).await?;
    let mut wizard = handle.lock().await;
    let draft = wizard.draft_mut();
    if let Some(date) = request.intimation_date {
        draft.intimation_date = date;
    }
    if let Some(time) = request.intimation_time {
        draft.intimation_time = time;
    }
    Ok(Json(snapshot(id, &wizard)))
}

/// Step 3: incident core fields plus the active type's detail patch
pub async fn update_incident(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<IncidentRequest>,
) -> Result<Json<WizardSnapshot>, ApiError> {
    let handle = session(&state, id).await?;
    let mut wizard = handle.lock().await;
    apply_incident(&mut wizard, request)?;
    Ok(Json(snapshot(id, &wizard)))
}

fn apply_incident(wizard: &mut ClaimWizard, request: IncidentRequest) -> Result<(), ApiError> {
    let draft = wizard.draft_mut();

    if let Some(date) = request.incident_date {
        draft.incident_date = Some(date);
    }
    if let Some(time) = request.incident_time {
        draft.incident_time = Some(time);
    }
    if let Some(location) = request.incident_location {
        draft.incident_location = location;
    }
    if let Some(description) = request.incident_description {
        draft.incident_description = description;
    }

    let claim_type = draft.claim_type();

    if let Some(patch) = request.health {
        let health = draft
            .details
            .as_mut()
            .and_then(|d| d.as_health_mut())
            .ok_or_else(|| mismatched_patch("health", claim_type))?;
        if let Some(tag) = patch.claim_category {
            health.claim_category = Some(domain_claims::HealthClaimCategory::from_tag(&tag));
        }
        if let Some(value) = patch.hospital_name {
            health.hospital_name = value;
        }
        if let Some(value) = patch.hospital_city {
            health.hospital_city = value;
        }
        if let Some(value) = patch.admission_date {
            health.admission_date = Some(value);
        }
        if let Some(value) = patch.discharge_date {
            health.discharge_date = Some(value);
        }
        if let Some(value) = patch.room_category {
            health.room_category = value;
        }
        if let Some(value) = patch.ailment {
            health.ailment = value;
        }
        if let Some(value) = patch.treatment {
            health.treatment = value;
        }
        if let Some(value) = patch.claim_amount {
            health.claim_amount = Some(parse_amount(&value)?);
        }
    }

    if let Some(patch) = request.car {
        let car = wizard
            .draft_mut()
            .details
            .as_mut()
            .and_then(|d| d.as_car_mut())
            .ok_or_else(|| mismatched_patch("car", claim_type))?;
        if let Some(value) = patch.accident_type {
            car.accident_type = value;
        }
        if let Some(value) = patch.accident_description {
            car.accident_description = value;
        }
        if let Some(value) = patch.police_complaint_filed {
            car.police_complaint_filed = Some(value);
        }
        if let Some(value) = patch.fir_number {
            car.fir_number = value;
        }
        if let Some(value) = patch.police_station {
            car.police_station = value;
        }
        if let Some(value) = patch.third_party_involved {
            car.third_party_involved = Some(value);
        }
        if let Some(value) = patch.third_party_details {
            car.third_party_details = value;
        }
        if let Some(value) = patch.driver_name {
            car.driver_name = value;
        }
        if let Some(value) = patch.driver_license_number {
            car.driver_license_number = value;
        }
        if let Some(value) = patch.vehicle_registration {
            car.vehicle_registration = value;
        }
        if let Some(value) = patch.garage_name {
            car.garage_name = value;
        }
        if let Some(value) = patch.estimated_repair_cost {
            car.estimated_repair_cost = Some(parse_amount(&value)?);
        }
    }

    if let Some(patch) = request.life {
        let life = wizard
            .draft_mut()
            .details
            .as_mut()
            .and_then(|d| d.as_life_mut())
            .ok_or_else(|| mismatched_patch("life", claim_type))?;
        if let Some(value) = patch.deceased_name {
            life.deceased_name = value;
        }
        if let Some(value) = patch.date_of_death {
            life.date_of_death = Some(value);
        }
        if let Some(value) = patch.place_of_death {
            life.place_of_death = value;
        }
        if let Some(value) = patch.cause_of_death {
            life.cause_of_death = value;
        }
        if let Some(value) = patch.relation_to_deceased {
            life.relation_to_deceased = value;
        }
        if let Some(value) = patch.nominee_name {
            life.nominee_name = value;
        }
        if let Some(value) = patch.sum_assured {
            life.sum_assured = Some(parse_amount(&value)?);
        }
    }

    Ok(())
}

fn mismatched_patch(section: &str, claim_type: Option<core_kernel::ClaimType>) -> ApiError {
    match claim_type {
        Some(ty) => ApiError::Validation(format!(
            "Cannot apply {section} details to a {ty} claim"
        )),
        None => ApiError::Validation("Select a claim type before entering details".to_string()),
    }
}

/// Step 5: claimant contact details
pub async fn update_claimant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ClaimantRequest>,
) -> Result<Json<WizardSnapshot>, ApiError> {
    request.validate()?;

    let handle = session(&state, id).await?;
    let mut wizard = handle.lock().await;
    let claimant = &mut wizard.draft_mut().claimant;
    if let Some(value) = request.name {
        claimant.name = value;
    }
    if let Some(value) = request.phone {
        claimant.phone = value;
    }
    if let Some(value) = request.email {
        claimant.email = value;
    }
    if let Some(value) = request.address {
        claimant.address = value;
    }
    if let Some(value) = request.city {
        claimant.city = value;
    }
    if let Some(value) = request.pincode {
        claimant.pincode = value;
    }
    Ok(Json(snapshot(id, &wizard)))
}

/// Step 6: settlement account
pub async fn update_bank(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<BankRequest>,
) -> Result<Json<WizardSnapshot>, ApiError> {
    let handle = session(&state, id).await?;
    let mut wizard = handle.lock().await;
    let bank = &mut wizard.draft_mut().bank;
    if let Some(value) = request.account_holder {
        bank.account_holder = value;
    }
    if let Some(value) = request.account_number {
        bank.account_number = value;
    }
    if let Some(value) = request.confirm_account_number {
        bank.confirm_account_number = value;
    }
    if let Some(value) = request.ifsc {
        bank.ifsc = value;
    }
    if let Some(value) = request.bank_name {
        bank.bank_name = value;
    }
    if let Some(value) = request.branch {
        bank.branch = value;
    }
    if let Some(value) = request.account_type {
        bank.account_type = Some(value);
    }
    Ok(Json(snapshot(id, &wizard)))
}

/// Moves forward through the current step's gate
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepResponse>, ApiError> {
    let handle = session(&state, id).await?;
    let mut wizard = handle.lock().await;
    let step = wizard.advance()?;
    Ok(Json(StepResponse::from_step(step)))
}

/// Moves back one step
pub async fn retreat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepResponse>, ApiError> {
    let handle = session(&state, id).await?;
    let mut wizard = handle.lock().await;
    let step = wizard.retreat()?;
    Ok(Json(StepResponse::from_step(step)))
}

/// The document table for the current draft
pub async fn required_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<RequiredDocument>>, ApiError> {
    let handle = session(&state, id).await?;
    let wizard = handle.lock().await;
    Ok(Json(wizard.required_documents()))
}

/// Registers a file; its upload starts immediately
pub async fn add_file(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddFileRequest>,
) -> Result<(StatusCode, Json<FileAddedResponse>), ApiError> {
    if request.name.is_empty() {
        return Err(ApiError::BadRequest("File name is required".to_string()));
    }

    let bytes: Vec<u8> = request.content.map(String::into_bytes).unwrap_or_default();
    let size = if bytes.is_empty() {
        request.size.unwrap_or(0)
    } else {
        bytes.len() as u64
    };

    let handle = session(&state, id).await?;
    let wizard = handle.lock().await;
    let file_id = wizard.uploads().add_file(NewFile {
        source: FileSource::Memory(Arc::new(bytes)),
        name: request.name,
        size,
        mime_type: request.mime_type,
        category: request.category.into(),
    });

    Ok((StatusCode::ACCEPTED, Json(FileAddedResponse { file_id })))
}

/// Removes a file and aborts its in-flight upload
pub async fn remove_file(
    State(state): State<AppState>,
    Path((id, file_id)): Path<(Uuid, core_kernel::FileId)>,
) -> Result<StatusCode, ApiError> {
    let handle = session(&state, id).await?;
    let wizard = handle.lock().await;
    wizard.uploads().remove(file_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Retries a failed file
pub async fn retry_file(
    State(state): State<AppState>,
    Path((id, file_id)): Path<(Uuid, core_kernel::FileId)>,
) -> Result<StatusCode, ApiError> {
    let handle = session(&state, id).await?;
    let wizard = handle.lock().await;
    wizard.uploads().retry(file_id)?;
    Ok(StatusCode::ACCEPTED)
}

/// Submits the claim from the review step
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let handle = session(&state, id).await?;
    let mut wizard = handle.lock().await;
    let outcome = wizard.submit().await?;
    Ok(Json(SubmitResponse {
        claim_number: outcome.claim_number.to_string(),
        warnings: outcome.warnings,
    }))
}
