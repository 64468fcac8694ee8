use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::reports::stats::{compute_statistics, Statistics};
use crate::reports::{ReportRecord, ReportStatus, SafeInternship};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ReportCreatedResponse {
    pub success: bool,
    pub report_id: Uuid,
}

/// POST /api/report
pub async fn handle_submit_report(
    State(state): State<AppState>,
    Json(details): Json<Value>,
) -> Result<Json<ReportCreatedResponse>, AppError> {
    if !details.is_object() {
        return Err(AppError::Validation(
            "Report body must be a JSON object".to_string(),
        ));
    }
    let report = state.reports.add(details).await?;
    Ok(Json(ReportCreatedResponse {
        success: true,
        report_id: report.id,
    }))
}

/// GET /api/safe-internships
pub async fn handle_safe_internships(
    State(state): State<AppState>,
) -> Result<Json<Vec<SafeInternship>>, AppError> {
    Ok(Json(state.reports.safe_internships().await?))
}

/// GET /api/admin/reports
pub async fn handle_list_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReportRecord>>, AppError> {
    Ok(Json(state.reports.all().await?))
}

/// GET /api/admin/stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<Statistics>, AppError> {
    let reports = state.reports.all().await?;
    Ok(Json(compute_statistics(&reports)))
}

#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ReportStatus,
}

#[derive(Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

/// PUT /api/admin/reports/:report_id/status
pub async fn handle_update_report_status(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    state.reports.update_status(report_id, req.status).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Status updated successfully".to_string(),
    }))
}

/// DELETE /api/admin/reports/:report_id
pub async fn handle_delete_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<ActionResponse>, AppError> {
    state.reports.delete(report_id).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Report deleted successfully".to_string(),
    }))
}
