//! Axum route handler for résumé upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::resume::extract::{extract_text, DocumentKind};
use crate::resume::parser::{parse_resume_text, ResumeParseResponse};
use crate::state::AppState;

/// POST /parse-resume
///
/// Multipart upload with a `file` field (PDF or DOCX). Returns contact
/// details and the extracted text, truncated.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeParseResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;

    if data.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }
    if data.len() > state.config.max_file_size {
        return Err(AppError::Validation(format!(
            "file exceeds the maximum size of {} bytes",
            state.config.max_file_size
        )));
    }

    let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
        AppError::Validation(format!(
            "unsupported file type '{filename}' (supported: {})",
            DocumentKind::SUPPORTED
        ))
    })?;

    info!("Parsing résumé '{filename}' ({} bytes, {:?})", data.len(), kind);

    let text = extract_text(kind, data)
        .await
        .map_err(|e| AppError::UnprocessableEntity(format!("could not read '{filename}': {e}")))?;

    let response =
        parse_resume_text(state.llm.as_ref(), &text, state.config.max_text_length).await;
    Ok(Json(response))
}
