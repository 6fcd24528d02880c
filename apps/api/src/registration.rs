//! Registration lookup: reports whether an email has a registration record.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::sections::handlers::params_from;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckInput {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub exists: bool,
}

/// POST /check
///
/// Exact-match existence check; no email format validation.
pub async fn handle_check(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CheckResponse>, AppError> {
    let input: CheckInput = params_from(body)?;
    let exists = state.store.registration_exists(&input.email).await?;
    debug!("Registration check for {}: {exists}", input.email);
    Ok(Json(CheckResponse { exists }))
}
