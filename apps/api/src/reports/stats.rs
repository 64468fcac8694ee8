//! Aggregate statistics over the report log for the admin dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::reports::{ReportRecord, ReportStatus};

const TOP_COMPANIES: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct CompanyCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthCount {
    pub month: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_reports: usize,
    pub pending_reports: usize,
    pub action_taken: usize,
    pub top_fake_companies: Vec<CompanyCount>,
    pub monthly_trend: Vec<MonthCount>,
}

pub fn compute_statistics(reports: &[ReportRecord]) -> Statistics {
    let pending_reports = reports
        .iter()
        .filter(|r| r.status == ReportStatus::Pending)
        .count();
    let action_taken = reports
        .iter()
        .filter(|r| r.status == ReportStatus::Verified)
        .count();

    // BTreeMap keeps name order stable for equal counts.
    let mut company_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for report in reports {
        *company_counts.entry(report.company_name()).or_insert(0) += 1;
    }
    let mut companies: Vec<CompanyCount> = company_counts
        .into_iter()
        .map(|(name, count)| CompanyCount {
            name: name.to_string(),
            count,
        })
        .collect();
    companies.sort_by(|a, b| b.count.cmp(&a.count));
    companies.truncate(TOP_COMPANIES);

    let mut monthly: BTreeMap<String, usize> = BTreeMap::new();
    for report in reports {
        let month = report.timestamp.format("%Y-%m").to_string();
        *monthly.entry(month).or_insert(0) += 1;
    }

    Statistics {
        total_reports: reports.len(),
        pending_reports,
        action_taken,
        top_fake_companies: companies,
        monthly_trend: monthly
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .collect(),
    }
}
