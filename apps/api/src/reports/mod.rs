//! Community scam reports and the curated safe-internship feed.
//!
//! Reports arrive from the frontend as free-form JSON (company name,
//! description, evidence links — the form evolves faster than the backend),
//! so the caller-supplied fields are kept as a flattened JSON object around
//! a typed envelope of id/timestamp/status.

pub mod handlers;
pub mod stats;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::storage::JsonStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Caller-supplied report fields (company_name, description, ...).
    #[serde(flatten)]
    pub details: Value,
}

impl ReportRecord {
    pub fn company_name(&self) -> &str {
        self.details
            .get("company_name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
    }
}

/// A vetted internship listing shown on the safe-internships page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeInternship {
    pub id: String,
    pub title: String,
    pub company: String,
    pub domain: String,
    pub duration: String,
    pub stipend: String,
    pub start_date: String,
    pub image_url: String,
    pub safety_score: u32,
    pub status: String,
    pub apply_url: String,
}

/// Listings at or above this scam score are withheld from the feed.
const SAFE_SCORE_CEILING: u32 = 20;

#[derive(Clone)]
pub struct ReportStore {
    reports: JsonStore<Vec<ReportRecord>>,
    internships: JsonStore<Vec<SafeInternship>>,
}

impl ReportStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            reports: JsonStore::new(data_dir.join("reports.json")),
            internships: JsonStore::new(data_dir.join("safe_internships.json")),
        }
    }

    /// Seeds the curated internship list on first run.
    pub async fn ensure_seeded(&self) -> Result<(), AppError> {
        self.internships.seed_if_missing(&sample_internships()).await
    }

    pub async fn add(&self, details: Value) -> Result<ReportRecord, AppError> {
        self.reports
            .update(move |reports| {
                let record = ReportRecord {
                    id: Uuid::new_v4(),
                    timestamp: Utc::now(),
                    status: ReportStatus::Pending,
                    updated_at: None,
                    details,
                };
                reports.push(record.clone());
                record
            })
            .await
    }

    pub async fn all(&self) -> Result<Vec<ReportRecord>, AppError> {
        self.reports.read().await
    }

    pub async fn update_status(
        &self,
        report_id: Uuid,
        status: ReportStatus,
    ) -> Result<ReportRecord, AppError> {
        self.reports
            .update(move |reports| {
                let report = reports
                    .iter_mut()
                    .find(|r| r.id == report_id)
                    .ok_or_else(|| AppError::NotFound(format!("Report {report_id} not found")))?;
                report.status = status;
                report.updated_at = Some(Utc::now());
                Ok(report.clone())
            })
            .await?
    }

    pub async fn delete(&self, report_id: Uuid) -> Result<(), AppError> {
        self.reports
            .update(move |reports| {
                let before = reports.len();
                reports.retain(|r| r.id != report_id);
                if reports.len() == before {
                    Err(AppError::NotFound(format!("Report {report_id} not found")))
                } else {
                    Ok(())
                }
            })
            .await?
    }

    pub async fn safe_internships(&self) -> Result<Vec<SafeInternship>, AppError> {
        Ok(self
            .internships
            .read()
            .await?
            .into_iter()
            .filter(|i| i.safety_score < SAFE_SCORE_CEILING)
            .collect())
    }
}

fn sample_internships() -> Vec<SafeInternship> {
    let listing = |id: &str,
                   title: &str,
                   company: &str,
                   domain: &str,
                   duration: &str,
                   stipend: &str,
                   start_date: &str,
                   image_url: &str,
                   safety_score: u32,
                   apply_url: &str| SafeInternship {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        domain: domain.to_string(),
        duration: duration.to_string(),
        stipend: stipend.to_string(),
        start_date: start_date.to_string(),
        image_url: image_url.to_string(),
        safety_score,
        status: "AI-Verified Safe".to_string(),
        apply_url: apply_url.to_string(),
    };

    vec![
        listing(
            "1",
            "AI & Data Science Internship",
            "Infosys",
            "Artificial Intelligence",
            "3 Months",
            "Paid",
            "April 2026",
            "https://via.placeholder.com/400x200/0066cc/ffffff?text=Infosys+AI",
            14,
            "https://www.infosys.com/careers",
        ),
        listing(
            "2",
            "Full Stack Development Training",
            "TCS",
            "Web Development",
            "6 Months",
            "₹15,000/month",
            "March 2026",
            "https://via.placeholder.com/400x200/009933/ffffff?text=TCS+Development",
            8,
            "https://www.tcs.com/careers",
        ),
        listing(
            "3",
            "Cloud Computing Internship",
            "Wipro",
            "Cloud & DevOps",
            "4 Months",
            "₹12,000/month",
            "May 2026",
            "https://via.placeholder.com/400x200/ff6600/ffffff?text=Wipro+Cloud",
            12,
            "https://careers.wipro.com",
        ),
        listing(
            "4",
            "Cybersecurity Training Program",
            "HCL Technologies",
            "Cybersecurity",
            "3 Months",
            "Free + Certificate",
            "April 2026",
            "https://via.placeholder.com/400x200/cc0000/ffffff?text=HCL+Security",
            18,
            "https://www.hcltech.com/careers",
        ),
        listing(
            "5",
            "Machine Learning Internship",
            "Tech Mahindra",
            "Machine Learning",
            "5 Months",
            "₹18,000/month",
            "March 2026",
            "https://via.placeholder.com/400x200/9900cc/ffffff?text=Tech+Mahindra+ML",
            10,
            "https://www.techmahindra.com/careers",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, ReportStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ReportStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_add_starts_pending_with_flattened_details() {
        let (_dir, store) = store();
        let record = store
            .add(json!({"company_name": "FakeCorp", "description": "asked for fees"}))
            .await
            .unwrap();
        assert_eq!(record.status, ReportStatus::Pending);
        assert_eq!(record.company_name(), "FakeCorp");

        // Flatten puts caller fields at the top level of the stored JSON.
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["company_name"], "FakeCorp");
        assert_eq!(value["description"], "asked for fees");
    }

    #[tokio::test]
    async fn test_missing_company_reads_as_unknown() {
        let (_dir, store) = store();
        let record = store.add(json!({"description": "no name given"})).await.unwrap();
        assert_eq!(record.company_name(), "Unknown");
    }

    #[tokio::test]
    async fn test_status_update_stamps_updated_at() {
        let (_dir, store) = store();
        let record = store.add(json!({"company_name": "X"})).await.unwrap();
        let updated = store
            .update_status(record.id, ReportStatus::Verified)
            .await
            .unwrap();
        assert_eq!(updated.status, ReportStatus::Verified);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_unknown_report_is_not_found() {
        let (_dir, store) = store();
        let err = store
            .update_status(Uuid::new_v4(), ReportStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let (_dir, store) = store();
        let record = store.add(json!({"company_name": "X"})).await.unwrap();
        store.delete(record.id).await.unwrap();
        assert!(store.all().await.unwrap().is_empty());
        assert!(matches!(
            store.delete(record.id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_seeded_feed_filters_by_safety_score() {
        let (_dir, store) = store();
        store.ensure_seeded().await.unwrap();
        let feed = store.safe_internships().await.unwrap();
        // All five samples sit under the ceiling.
        assert_eq!(feed.len(), 5);
        assert!(feed.iter().all(|i| i.safety_score < 20));
    }
}
