//! Resume text extraction for uploaded files.
//!
//! PDF parsing is CPU-bound and runs via `tokio::task::spawn_blocking`.
//! Plain text is decoded as UTF-8. Anything else is rejected with 422.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

/// Decides the format from the declared content type, then the file extension.
/// Returns `None` for unsupported uploads.
pub fn detect_format(file_name: Option<&str>, content_type: Option<&str>) -> Option<ResumeFormat> {
    let content_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase());

    match content_type.as_deref() {
        Some("application/pdf") => return Some(ResumeFormat::Pdf),
        Some("text/plain") => return Some(ResumeFormat::PlainText),
        _ => {}
    }

    let extension = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some(ResumeFormat::Pdf),
        "txt" | "text" => Some(ResumeFormat::PlainText),
        _ => None,
    }
}

/// Extracts the text of an uploaded resume. The result may be blank; the
/// caller decides whether that is an error.
pub async fn extract_resume_text(data: Bytes, format: ResumeFormat) -> Result<String, AppError> {
    let byte_len = data.len();

    let text = match format {
        ResumeFormat::PlainText => String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("resume text file is not valid UTF-8".to_string())
        })?,
        ResumeFormat::Pdf => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}")))?
        .map_err(|e| AppError::UnprocessableEntity(format!("could not read PDF: {e}")))?,
    };

    debug!(?format, byte_len, text_chars = text.len(), "Resume text extracted");
    Ok(text)
}
