//! Axum handler and multipart plumbing for the upload routes.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

/// A single file pulled out of a multipart body.
pub struct ReceivedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// Pulls the single `image` file out of a multipart body. A body without an
/// `image` file field is a client error.
pub async fn read_image_field(mut multipart: Multipart) -> Result<ReceivedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let file_name = match field.file_name() {
            Some(name) => name.to_string(),
            None => return Err(AppError::MissingFile),
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(format!("failed to read upload: {e}")))?;
        return Ok(ReceivedFile { file_name, data });
    }

    Err(AppError::MissingFile)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_name: String,
}

/// POST /test
///
/// Stores a single multipart file (field `image`) and echoes the stored
/// name back.
pub async fn handle_upload_test(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let upload = read_image_field(multipart).await?;
    let file_name = state.uploads.save(&upload.file_name, upload.data).await?;
    Ok(Json(UploadResponse { file_name }))
}
