//! Axum route handlers for the seven section creation routes.
//!
//! Each handler unwraps the `params` envelope, inserts one record, and
//! echoes the saved record back. Repeated identical calls create duplicate
//! records — there is no dedup key for any kind.

use axum::{extract::State, Json};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::sections::models::{
    AchievementSetInput, AchievementSetRecord, BasicInfoInput, BasicInfoRecord,
    EducationEntryInput, EducationEntryRecord, OtherNoteInput, OtherNoteRecord, ParamsEnvelope,
    ProjectInput, ProjectRecord, SummaryInput, SummaryRecord, WorkEntryInput, WorkEntryRecord,
};
use crate::state::AppState;

/// Success envelope for the creation routes.
#[derive(Debug, Serialize)]
pub struct SavedResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SavedResponse<T> {
    fn saved(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Unwraps the `params` container, rejecting malformed envelopes instead of
/// storing partially-empty records.
pub(crate) fn params_from<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    let envelope: ParamsEnvelope<T> = serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("malformed params: {e}")))?;
    Ok(envelope.params)
}

/// POST /add/basicInfo
pub async fn handle_add_basic_info(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SavedResponse<BasicInfoRecord>>, AppError> {
    let input: BasicInfoInput = params_from(body)?;
    let saved = state.store.insert_basic_info(input).await?;
    Ok(Json(SavedResponse::saved(saved)))
}

/// POST /add/workInfo
pub async fn handle_add_work_info(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SavedResponse<WorkEntryRecord>>, AppError> {
    let input: WorkEntryInput = params_from(body)?;
    let saved = state.store.insert_work_entry(input).await?;
    Ok(Json(SavedResponse::saved(saved)))
}

/// POST /add/projectInfo
pub async fn handle_add_project_info(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SavedResponse<ProjectRecord>>, AppError> {
    let input: ProjectInput = params_from(body)?;
    let saved = state.store.insert_project(input).await?;
    Ok(Json(SavedResponse::saved(saved)))
}

/// POST /add/eduInfo
pub async fn handle_add_edu_info(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SavedResponse<EducationEntryRecord>>, AppError> {
    let input: EducationEntryInput = params_from(body)?;
    let saved = state.store.insert_education_entry(input).await?;
    Ok(Json(SavedResponse::saved(saved)))
}

/// POST /add/achInfo
pub async fn handle_add_ach_info(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SavedResponse<AchievementSetRecord>>, AppError> {
    let input: AchievementSetInput = params_from(body)?;
    let saved = state.store.insert_achievement_set(input).await?;
    Ok(Json(SavedResponse::saved(saved)))
}

/// POST /add/sumInfo
pub async fn handle_add_sum_info(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SavedResponse<SummaryRecord>>, AppError> {
    let input: SummaryInput = params_from(body)?;
    let saved = state.store.insert_summary(input).await?;
    Ok(Json(SavedResponse::saved(saved)))
}

/// POST /add/otherInfo
pub async fn handle_add_other_info(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SavedResponse<OtherNoteRecord>>, AppError> {
    let input: OtherNoteInput = params_from(body)?;
    let saved = state.store.insert_other_note(input).await?;
    Ok(Json(SavedResponse::saved(saved)))
}
