use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::accounts::UserRecord;
use crate::errors::AppError;
use crate::payments::PaymentRecord;
use crate::state::AppState;

/// GET /api/user/:user_id/status
pub async fn handle_user_status(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRecord>, AppError> {
    Ok(Json(state.users.get_or_create(&user_id).await?))
}

#[derive(Serialize)]
pub struct UpgradeResponse {
    pub success: bool,
    pub user: UserRecord,
}

/// POST /api/user/:user_id/upgrade
///
/// Simulated instant upgrade path used by the demo frontend; the real flow
/// goes through payment submission and admin verification.
pub async fn handle_upgrade(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UpgradeResponse>, AppError> {
    let user = state.users.activate_premium(&user_id).await?;
    Ok(Json(UpgradeResponse {
        success: true,
        user,
    }))
}

/// GET /api/user/:user_id/payments
pub async fn handle_user_payments(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<PaymentRecord>>, AppError> {
    Ok(Json(state.payments.for_user(&user_id).await?))
}
