//! Resume scoring pipeline: load the stored upload, extract text with the
//! vision model, evaluate the text with the text model, relay the result.
//!
//! The pipeline is linear — each step suspends on one collaborator and any
//! failure ends the run.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::info;

use crate::errors::AppError;
use crate::genai::{GenerativeModel, InlineImage};
use crate::scoring::prompts::{evaluation_prompt, EXTRACTION_PROMPT};
use crate::uploads::{mime_for_filename, UploadStore};

/// Runs the scoring pipeline for a stored upload and returns the evaluation
/// model's text untouched. The return value is an opaque `String`: it is
/// expected to be JSON-shaped but is never parsed or validated here, and
/// callers must treat it as untrusted text.
pub async fn score_resume(
    uploads: &UploadStore,
    model: &dyn GenerativeModel,
    file_name: &str,
) -> Result<String, AppError> {
    let bytes = uploads.read(file_name).await?;
    let image = InlineImage {
        mime_type: mime_for_filename(file_name).to_string(),
        data: BASE64.encode(&bytes),
    };

    let resume_info = model.describe_image(EXTRACTION_PROMPT, &image).await?;
    info!(
        "Extracted {} chars of resume text from {file_name}",
        resume_info.len()
    );

    let feedback = model.generate_text(&evaluation_prompt(&resume_info)).await?;
    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use tempfile::TempDir;

    use super::*;
    use crate::genai::mock::StubModel;

    const EXTRACTION_TEXT: &str = "Name: Jane Doe. Senior engineer, 8 years of Rust.";
    const EVALUATION_TEXT: &str =
        r#"{"questions":[],"overall_feedback":"Strong resume.","overall_score":"86"}"#;

    async fn store_with_upload(name: &str) -> (TempDir, UploadStore) {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).await.unwrap();
        store
            .save(name, Bytes::from_static(b"fake-png-bytes"))
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_pipeline_relays_evaluation_text_verbatim() {
        let (_dir, store) = store_with_upload("resume.png").await;
        let model = StubModel::new(EXTRACTION_TEXT, EVALUATION_TEXT);

        let feedback = score_resume(&store, &model, "resume.png").await.unwrap();

        assert_eq!(feedback, EVALUATION_TEXT);
    }

    #[tokio::test]
    async fn test_pipeline_feeds_extracted_text_into_evaluation_prompt() {
        let (_dir, store) = store_with_upload("resume.png").await;
        let model = StubModel::new(EXTRACTION_TEXT, EVALUATION_TEXT);

        score_resume(&store, &model, "resume.png").await.unwrap();

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(EXTRACTION_TEXT));
    }

    #[tokio::test]
    async fn test_pipeline_fails_when_upload_is_missing() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).await.unwrap();
        let model = StubModel::new(EXTRACTION_TEXT, EVALUATION_TEXT);

        let err = score_resume(&store, &model, "absent.png").await.unwrap_err();
        assert!(matches!(err, AppError::Upload(_)));
    }
}
