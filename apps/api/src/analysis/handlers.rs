//! Axum route handlers for the resume analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::analysis::ranker::rank;
use crate::errors::AppError;
use crate::extract;
use crate::models::resume::RankingResponse;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub text: String,
}

/// Per-file outcome of a multipart upload. Unsupported formats are reported
/// here rather than failing the whole request.
#[derive(Debug, Serialize)]
pub struct ResumeUploadStatus {
    pub filename: String,
    pub status: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/upload
///
/// Accepts one or more PDF/DOCX files as multipart form data. Each file gets
/// its own status entry; a rejected file does not block the others.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<ResumeUploadStatus>>, AppError> {
    let mut statuses = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue, // non-file form fields are ignored
        };

        if extract::supported_extension(&filename).is_none() {
            statuses.push(ResumeUploadStatus {
                filename,
                status: "error: unsupported file format".to_string(),
            });
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload '{filename}': {e}")))?;

        let stored = state.store.add(data, &filename).await?;
        debug!(
            resume_id = %stored.id,
            "stored upload {} at {}",
            stored.filename,
            stored.file_path.display()
        );

        statuses.push(ResumeUploadStatus {
            filename,
            status: "success".to_string(),
        });
    }

    Ok(Json(statuses))
}

/// POST /api/v1/resumes/analyze
///
/// Runs the full ranking pipeline over the current store snapshot:
/// extract text → extract skills → match → score → feedback, then sort.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<RankingResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let resumes = state.store.snapshot().await;
    let analyses = rank(state.oracle.as_ref(), &request.text, &resumes).await?;

    Ok(Json(RankingResponse { resumes: analyses }))
}

/// DELETE /api/v1/resumes/clear
///
/// Removes all uploaded files and store entries.
pub async fn handle_clear(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let removed = state.store.clear().await?;
    Ok(Json(json!({
        "message": "All resumes cleared successfully",
        "removed": removed
    })))
}
