use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::accounts::CreditKind;
use crate::errors::AppError;
use crate::scoring::offer::{score_offer, OfferInput};
use crate::scoring::preview::{offer_view, resume_view, OfferAnalysisResponse, ResumeAnalysisResponse};
use crate::scoring::resume::score_resume;
use crate::state::AppState;

fn guest_user() -> String {
    "guest".to_string()
}

#[derive(Deserialize)]
pub struct OfferAnalyzeRequest {
    #[serde(default = "guest_user")]
    pub user_id: String,
    #[serde(flatten)]
    pub offer: OfferInput,
}

/// POST /api/analyze
pub async fn handle_analyze_offer(
    State(state): State<AppState>,
    Json(req): Json<OfferAnalyzeRequest>,
) -> Result<Json<OfferAnalysisResponse>, AppError> {
    let has_credit = state
        .users
        .use_credit(&req.user_id, CreditKind::Scam)
        .await?;

    let report = score_offer(&req.offer);
    // Full report goes to the log regardless of what the caller sees.
    info!(
        user_id = %req.user_id,
        scam_score = report.scam_score,
        verdict = ?report.verdict,
        locked = !has_credit,
        "offer analyzed"
    );

    Ok(Json(offer_view(&report, has_credit)))
}

#[derive(Deserialize)]
pub struct ResumeAnalyzeRequest {
    #[serde(default = "guest_user")]
    pub user_id: String,
    #[serde(default)]
    pub resume_text: String,
}

/// POST /api/resume/analyze
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeAnalyzeRequest>,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    if req.resume_text.is_empty() {
        return Err(AppError::Validation("No resume text provided".to_string()));
    }

    let has_credit = state
        .users
        .use_credit(&req.user_id, CreditKind::Resume)
        .await?;

    let report = score_resume(&req.resume_text);
    info!(
        user_id = %req.user_id,
        resume_score = report.resume_score,
        ats_score = report.ats_score,
        locked = !has_credit,
        "resume analyzed"
    );

    Ok(Json(resume_view(&report, has_credit, None)))
}

/// POST /api/resume/upload
///
/// Multipart image upload routed through the pluggable text extractor.
/// The extracted text is analyzed like pasted text and echoed back so the
/// frontend can let the user correct OCR mistakes.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() == Some("file") {
            image = Some(field.bytes().await.map_err(|e| {
                AppError::Validation(format!("Could not read uploaded file: {e}"))
            })?);
        }
    }
    let image = image.ok_or_else(|| AppError::Validation("No file part".to_string()))?;
    if image.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }

    let extracted = state.extractor.extract(&image).await?;
    if extracted.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from image. Make sure the image is clear.".to_string(),
        ));
    }

    let report = score_resume(&extracted);
    info!(
        resume_score = report.resume_score,
        ats_score = report.ats_score,
        "uploaded resume analyzed"
    );

    Ok(Json(resume_view(&report, true, Some(extracted))))
}
