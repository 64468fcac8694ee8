//! Manually verified payments: a user submits a payment-proof screenshot
//! plus a UTR (bank transaction reference); an admin later verifies or
//! rejects it. Records live in `payments.json`.

pub mod handlers;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::storage::JsonStore;

/// Flat price of the Student Safety Pass, in rupees.
const PASS_PRICE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub utr: String,
    pub screenshot_path: String,
    pub amount: u32,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
}

/// Submitted contact details accompanying a payment proof.
#[derive(Debug, Clone)]
pub struct PaymentDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub utr: String,
}

/// Outcome of a verification attempt on an existing record.
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub payment: PaymentRecord,
    /// False when the record was already verified (idempotent repeat).
    pub newly_verified: bool,
}

#[derive(Clone)]
pub struct PaymentStore {
    store: JsonStore<Vec<PaymentRecord>>,
}

impl PaymentStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: JsonStore::new(data_dir.join("payments.json")),
        }
    }

    /// Records a pending payment. A UTR already used by any non-rejected
    /// record is refused; a rejected record frees its UTR for resubmission.
    pub async fn create(
        &self,
        user_id: &str,
        details: PaymentDetails,
        screenshot_path: &str,
    ) -> Result<PaymentRecord, AppError> {
        let user_id = user_id.to_string();
        let screenshot_path = screenshot_path.to_string();
        self.store
            .update(move |payments| {
                let duplicate = payments
                    .iter()
                    .any(|p| p.utr == details.utr && p.status != PaymentStatus::Rejected);
                if duplicate {
                    return Err(AppError::DuplicateSubmission("UTR already used".to_string()));
                }

                let payment = PaymentRecord {
                    id: Uuid::new_v4(),
                    user_id,
                    name: details.name,
                    email: details.email,
                    phone: details.phone,
                    utr: details.utr,
                    screenshot_path,
                    amount: PASS_PRICE,
                    status: PaymentStatus::Pending,
                    created_at: Utc::now(),
                    processed_at: None,
                    rejection_reason: None,
                };
                payments.push(payment.clone());
                Ok(payment)
            })
            .await?
    }

    pub async fn all(&self) -> Result<Vec<PaymentRecord>, AppError> {
        self.store.read().await
    }

    pub async fn for_user(&self, user_id: &str) -> Result<Vec<PaymentRecord>, AppError> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .filter(|p| p.user_id == user_id)
            .collect())
    }

    /// Marks a payment verified. Re-verifying is a no-op reported through
    /// `newly_verified`, so admin double-clicks never grant double credits.
    pub async fn verify(&self, payment_id: Uuid) -> Result<VerifyOutcome, AppError> {
        self.store
            .update(move |payments| {
                let payment = payments
                    .iter_mut()
                    .find(|p| p.id == payment_id)
                    .ok_or_else(|| AppError::NotFound(format!("Payment {payment_id} not found")))?;

                if payment.status == PaymentStatus::Verified {
                    return Ok(VerifyOutcome {
                        payment: payment.clone(),
                        newly_verified: false,
                    });
                }

                payment.status = PaymentStatus::Verified;
                payment.processed_at = Some(Utc::now());
                Ok(VerifyOutcome {
                    payment: payment.clone(),
                    newly_verified: true,
                })
            })
            .await?
    }

    pub async fn reject(
        &self,
        payment_id: Uuid,
        reason: &str,
    ) -> Result<PaymentRecord, AppError> {
        let reason = reason.to_string();
        self.store
            .update(move |payments| {
                let payment = payments
                    .iter_mut()
                    .find(|p| p.id == payment_id)
                    .ok_or_else(|| AppError::NotFound(format!("Payment {payment_id} not found")))?;
                payment.status = PaymentStatus::Rejected;
                payment.rejection_reason = Some(reason);
                payment.processed_at = Some(Utc::now());
                Ok(payment.clone())
            })
            .await?
    }
}
