//! User accounts: premium flag and per-feature analysis credits, persisted
//! in `users.json`. All mutations go through the store lock, so a credit
//! can never be spent twice by concurrent requests.

pub mod handlers;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::storage::JsonStore;

/// Credits granted (per feature) when a payment is verified or a user
/// upgrades.
const PREMIUM_CREDITS: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub is_premium: bool,
    pub scam_checks_left: u32,
    pub resume_checks_left: u32,
    pub total_scam_checks: u32,
    pub total_resume_checks: u32,
}

impl UserRecord {
    fn new_free(id: &str) -> Self {
        Self {
            id: id.to_string(),
            is_premium: false,
            scam_checks_left: 0,
            resume_checks_left: 0,
            total_scam_checks: 0,
            total_resume_checks: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditKind {
    Scam,
    Resume,
}

#[derive(Clone)]
pub struct UserStore {
    store: JsonStore<BTreeMap<String, UserRecord>>,
}

impl UserStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: JsonStore::new(data_dir.join("users.json")),
        }
    }

    /// Fetches a user, creating a free account on first sight.
    pub async fn get_or_create(&self, user_id: &str) -> Result<UserRecord, AppError> {
        self.store
            .update(|users| {
                users
                    .entry(user_id.to_string())
                    .or_insert_with(|| UserRecord::new_free(user_id))
                    .clone()
            })
            .await
    }

    /// Marks the user premium and grants a fresh credit bundle. Repeat
    /// activations accumulate credits.
    pub async fn activate_premium(&self, user_id: &str) -> Result<UserRecord, AppError> {
        self.store
            .update(|users| {
                let user = users
                    .entry(user_id.to_string())
                    .or_insert_with(|| UserRecord::new_free(user_id));
                user.is_premium = true;
                user.scam_checks_left += PREMIUM_CREDITS;
                user.resume_checks_left += PREMIUM_CREDITS;
                user.clone()
            })
            .await
    }

    /// Spends one credit of the given kind. Returns `false` (and changes
    /// nothing) for unknown users or an exhausted balance.
    pub async fn use_credit(&self, user_id: &str, kind: CreditKind) -> Result<bool, AppError> {
        self.store
            .update(|users| {
                let Some(user) = users.get_mut(user_id) else {
                    return false;
                };
                let (left, total) = match kind {
                    CreditKind::Scam => (&mut user.scam_checks_left, &mut user.total_scam_checks),
                    CreditKind::Resume => {
                        (&mut user.resume_checks_left, &mut user.total_resume_checks)
                    }
                };
                if *left == 0 {
                    return false;
                }
                *left -= 1;
                *total += 1;
                true
            })
            .await
    }
}
