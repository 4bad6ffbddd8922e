use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::ingest;
use crate::matching::engine::MatchReport;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub jd_text: String,
}

/// POST /api/v1/match
/// Scores pre-extracted resume text against job-description text.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let report = state
        .engine
        .match_resume_to_jd(&req.resume_text, &req.jd_text)
        .await;
    Ok(Json(report))
}

/// POST /api/v1/match/upload
/// Multipart form: `resume` (file part, PDF or plain text) + `jd_text`
/// (text field). The resume is run through document text extraction, then
/// scored exactly like the JSON endpoint.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let mut resume_text: Option<String> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or("resume.txt").to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read resume upload: {e}"))
                })?;
                resume_text = Some(ingest::extract_text(&data, &filename)?);
            }
            "jd_text" => {
                jd_text = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read jd_text field: {e}"))
                })?);
            }
            _ => {} // unknown parts are ignored
        }
    }

    let resume_text = resume_text
        .ok_or_else(|| AppError::Validation("missing `resume` file part".to_string()))?;
    let jd_text =
        jd_text.ok_or_else(|| AppError::Validation("missing `jd_text` field".to_string()))?;

    let report = state.engine.match_resume_to_jd(&resume_text, &jd_text).await;
    Ok(Json(report))
}
