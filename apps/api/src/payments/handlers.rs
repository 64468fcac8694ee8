use axum::extract::{Multipart, Path, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::payments::{PaymentDetails, PaymentRecord};
use crate::state::AppState;

#[derive(Serialize)]
pub struct PaymentActionResponse {
    pub success: bool,
    pub payment: PaymentRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Collected multipart form: the screenshot plus required contact fields.
#[derive(Default)]
struct SubmitForm {
    screenshot: Option<(String, Bytes)>,
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    utr: Option<String>,
}

/// POST /api/payment/submit
pub async fn handle_submit_payment(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PaymentActionResponse>, AppError> {
    let mut form = SubmitForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "screenshot" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read screenshot: {e}"))
                })?;
                form.screenshot = Some((filename, bytes));
            }
            "user_id" => form.user_id = Some(read_text(field).await?),
            "name" => form.name = Some(read_text(field).await?),
            "email" => form.email = Some(read_text(field).await?),
            "phone" => form.phone = Some(read_text(field).await?),
            "utr" => form.utr = Some(read_text(field).await?),
            _ => {}
        }
    }

    let (filename, image) = form
        .screenshot
        .filter(|(_, bytes)| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation("No screenshot uploaded".to_string()))?;

    let missing = || AppError::Validation("Missing required fields".to_string());
    let user_id = form.user_id.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let details = PaymentDetails {
        name: form.name.filter(|v| !v.is_empty()).ok_or_else(missing)?,
        email: form.email.filter(|v| !v.is_empty()).ok_or_else(missing)?,
        phone: form.phone.filter(|v| !v.is_empty()).ok_or_else(missing)?,
        utr: form.utr.filter(|v| !v.is_empty()).ok_or_else(missing)?,
    };

    // Store the proof under a fresh name; the original filename only
    // contributes its extension.
    let ext = filename
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_else(|| "jpg".to_string());
    let stored_name = format!("{}.{ext}", Uuid::new_v4());

    tokio::fs::create_dir_all(&state.config.uploads_dir)
        .await
        .map_err(|e| AppError::Storage(format!("uploads dir: {e}")))?;
    let path = state.config.uploads_dir.join(&stored_name);
    tokio::fs::write(&path, &image)
        .await
        .map_err(|e| AppError::Storage(format!("{}: {e}", path.display())))?;

    let payment = state
        .payments
        .create(&user_id, details, &stored_name)
        .await?;
    info!(user_id = %user_id, payment_id = %payment.id, "payment proof submitted");

    Ok(Json(PaymentActionResponse {
        success: true,
        payment,
        message: None,
    }))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed field: {e}")))
}

/// GET /api/admin/payments
pub async fn handle_list_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentRecord>>, AppError> {
    Ok(Json(state.payments.all().await?))
}

/// POST /api/admin/payment/:payment_id/verify
///
/// A fresh verification also activates the payer's premium pass; repeat
/// verifications are reported but grant nothing further.
pub async fn handle_verify_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<PaymentActionResponse>, AppError> {
    let outcome = state.payments.verify(payment_id).await?;

    let message = if outcome.newly_verified {
        state
            .users
            .activate_premium(&outcome.payment.user_id)
            .await?;
        info!(payment_id = %payment_id, user_id = %outcome.payment.user_id, "payment verified, user activated");
        "Payment verified and user activated"
    } else {
        "Payment already verified"
    };

    Ok(Json(PaymentActionResponse {
        success: true,
        payment: outcome.payment,
        message: Some(message.to_string()),
    }))
}

#[derive(Deserialize, Default)]
pub struct RejectRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

/// POST /api/admin/payment/:payment_id/reject
pub async fn handle_reject_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
    body: Option<Json<RejectRequest>>,
) -> Result<Json<PaymentActionResponse>, AppError> {
    let reason = body
        .and_then(|Json(req)| req.reason)
        .unwrap_or_else(|| "Rejected by admin".to_string());

    let payment = state.payments.reject(payment_id, &reason).await?;
    Ok(Json(PaymentActionResponse {
        success: true,
        payment,
        message: None,
    }))
}
