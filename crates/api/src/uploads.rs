//! Local-disk storage for uploaded listing images.
//!
//! Files land in the configured upload directory and are served back
//! under `/uploads/<filename>` by a `ServeDir` route. Filenames are
//! `{millis}-{random}-{sanitized original name}` so concurrent uploads
//! never collide.

use std::path::Path;

use rand::Rng;

use crate::error::AppError;

/// One file part extracted from the multipart form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Write each image to `upload_dir` and return their public URLs.
///
/// On any write failure the files written so far are removed best-effort
/// before the error is returned.
pub async fn save_images(
    upload_dir: &Path,
    images: &[UploadedImage],
) -> Result<Vec<String>, AppError> {
    if images.is_empty() {
        return Ok(Vec::new());
    }

    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let mut urls = Vec::with_capacity(images.len());
    let mut written = Vec::with_capacity(images.len());

    for image in images {
        let filename = unique_filename(&image.file_name);
        let dest = upload_dir.join(&filename);

        if let Err(e) = tokio::fs::write(&dest, &image.bytes).await {
            remove_files(upload_dir, &written).await;
            return Err(AppError::InternalError(format!(
                "Failed to write upload: {e}"
            )));
        }

        written.push(filename.clone());
        urls.push(format!("/uploads/{filename}"));
    }

    Ok(urls)
}

/// Delete previously saved uploads, e.g. when the enclosing signup
/// transaction rolls back. Best-effort: failures are logged and ignored.
pub async fn remove_files(upload_dir: &Path, filenames: &[String]) {
    for filename in filenames {
        let path = upload_dir.join(filename);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(file = %path.display(), error = %e, "Failed to remove upload");
        }
    }
}

/// Strip a URL produced by [`save_images`] back to its filename.
pub fn url_to_filename(url: &str) -> Option<&str> {
    url.strip_prefix("/uploads/")
}

/// Build a collision-free filename preserving the (sanitized) original name.
fn unique_filename(original: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    let sanitized: String = original
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    format!("{millis}-{suffix}-{sanitized}")
}
