//! Axum route handler for the scoring route.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::scoring::pipeline::score_resume;
use crate::state::AppState;
use crate::uploads::handlers::read_image_field;

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    /// Raw evaluation text. Expected to be JSON-shaped but deliberately not
    /// parsed; consumers must treat it as untrusted text.
    pub feedback: String,
}

/// POST /resumescore
///
/// Stores the uploaded image, then runs the extraction and evaluation
/// calls. The evaluation text is relayed verbatim.
pub async fn handle_resume_score(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScoreResponse>, AppError> {
    info!("Calculating resume score");

    let upload = read_image_field(multipart).await?;
    let file_name = state.uploads.save(&upload.file_name, upload.data).await?;
    let feedback = score_resume(&state.uploads, state.model.as_ref(), &file_name).await?;

    Ok(Json(ScoreResponse { feedback }))
}
