//! Flat-file blob store backing the upload routes.

pub mod handlers;

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;

/// Stores one file per upload under a fixed directory, keyed by the
/// client-supplied filename. Two concurrent uploads of the same name race
/// and the last write wins; the name-keyed contract is what the frontend
/// expects, so collisions are accepted rather than rekeyed.
#[derive(Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Opens the store, creating the directory if needed.
    pub async fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Persists `data` under the sanitized filename and returns the stored
    /// name.
    pub async fn save(&self, original_name: &str, data: Bytes) -> Result<String, AppError> {
        let name = sanitize_filename(original_name)
            .ok_or_else(|| AppError::Upload(format!("unusable filename {original_name:?}")))?;
        let path = self.dir.join(&name);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::Upload(format!("failed to write {}: {e}", path.display())))?;
        info!("File uploaded: {name}");
        Ok(name)
    }

    /// Reads a previously stored file back by its stored name.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, AppError> {
        let name = sanitize_filename(name)
            .ok_or_else(|| AppError::Upload(format!("unusable filename {name:?}")))?;
        let path = self.dir.join(&name);
        tokio::fs::read(&path)
            .await
            .map_err(|e| AppError::Upload(format!("failed to read {}: {e}", path.display())))
    }
}

/// Reduces a client-supplied filename to its final path component so a name
/// like `../../etc/passwd` cannot escape the upload directory.
fn sanitize_filename(name: &str) -> Option<String> {
    let name = Path::new(name).file_name()?.to_str()?;
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Media type for an encoded upload, inferred from the filename extension.
/// Unknown extensions fall back to `image/png`.
pub fn mime_for_filename(name: &str) -> &'static str {
    match Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_filename("resume.png").as_deref(), Some("resume.png"));
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(sanitize_filename("a/b/c.png").as_deref(), Some("c.png"));
    }

    #[test]
    fn test_sanitize_rejects_nameless_paths() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename(".."), None);
    }

    #[test]
    fn test_sanitize_drops_trailing_separator() {
        assert_eq!(sanitize_filename("uploads/"), Some("uploads".to_string()));
    }

    #[test]
    fn test_mime_inference_by_extension() {
        assert_eq!(mime_for_filename("resume.png"), "image/png");
        assert_eq!(mime_for_filename("resume.JPG"), "image/jpeg");
        assert_eq!(mime_for_filename("resume.jpeg"), "image/jpeg");
        assert_eq!(mime_for_filename("resume.webp"), "image/webp");
        assert_eq!(mime_for_filename("resume"), "image/png");
    }

    #[tokio::test]
    async fn test_save_then_read_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).await.unwrap();

        let stored = store
            .save("resume.png", bytes::Bytes::from_static(b"png-bytes"))
            .await
            .unwrap();
        assert_eq!(stored, "resume.png");
        assert_eq!(store.read("resume.png").await.unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn test_same_name_last_write_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).await.unwrap();

        store
            .save("resume.png", bytes::Bytes::from_static(b"first"))
            .await
            .unwrap();
        store
            .save("resume.png", bytes::Bytes::from_static(b"second"))
            .await
            .unwrap();
        assert_eq!(store.read("resume.png").await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_upload_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).await.unwrap();

        let err = store.read("absent.png").await.unwrap_err();
        assert!(matches!(err, crate::errors::AppError::Upload(_)));
    }
}
