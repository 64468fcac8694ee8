//! Credit-gated report views.
//!
//! The scorers always return the full, true report; these pure builders
//! decide what a caller actually receives. Locked views truncate and mask
//! fields with upsell copy. The source report is borrowed, never mutated,
//! so the complete result stays available for server-side logging.

use serde::Serialize;

use crate::scoring::offer::{OfferReport, RiskColor, Verdict};
use crate::scoring::resume::ResumeReport;

const OFFER_UPSELL: &str = "Upgrade to Student Safety Pass to view full detailed analysis.";
const RESUME_UPSELL: &str =
    "Upgrade to Student Safety Pass to unlock your full ATS score and detailed feedback.";
const HIDDEN_LIST_MARKER: &str = "(Hidden in Free Version)";
const HIDDEN_SKILLS_MARKER: &str = "(Hidden)";
const SCORE_PLACEHOLDER: &str = "??";

/// A numeric score or the locked-out placeholder. Serializes untagged, so
/// callers see either `72` or `"??"`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ScoreView {
    Revealed(u32),
    Hidden(&'static str),
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferAnalysisResponse {
    pub scam_score: u32,
    pub verdict: Verdict,
    pub color: RiskColor,
    pub reasons: Vec<String>,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub is_locked: bool,
}

/// Builds the wire view of an offer report. Locked callers keep the score
/// and verdict but see only the first reason as a preview.
pub fn offer_view(report: &OfferReport, has_credit: bool) -> OfferAnalysisResponse {
    if has_credit {
        return OfferAnalysisResponse {
            scam_score: report.scam_score,
            verdict: report.verdict,
            color: report.color,
            reasons: report.reasons.clone(),
            recommendation: report.recommendation.clone(),
            explanation: None,
            is_locked: false,
        };
    }

    OfferAnalysisResponse {
        scam_score: report.scam_score,
        verdict: report.verdict,
        color: report.color,
        reasons: report.reasons.iter().take(1).cloned().collect(),
        recommendation: OFFER_UPSELL.to_string(),
        explanation: Some(OFFER_UPSELL.to_string()),
        is_locked: true,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysisResponse {
    pub resume_score: ScoreView,
    pub ats_score: ScoreView,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommended_changes: Vec<String>,
    pub missing_skills: Vec<String>,
    pub scam_warnings: Vec<String>,
    pub final_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    pub is_locked: bool,
}

/// Builds the wire view of a resume report. Locked callers get masked
/// scores, a two-strength preview, and hidden-marker list fields.
pub fn resume_view(
    report: &ResumeReport,
    has_credit: bool,
    extracted_text: Option<String>,
) -> ResumeAnalysisResponse {
    if has_credit {
        return ResumeAnalysisResponse {
            resume_score: ScoreView::Revealed(report.resume_score),
            ats_score: ScoreView::Revealed(report.ats_score),
            strengths: report.strengths.clone(),
            weaknesses: report.weaknesses.clone(),
            recommended_changes: report.recommended_changes.clone(),
            missing_skills: report.missing_skills.clone(),
            scam_warnings: report.scam_warnings.clone(),
            final_summary: report.final_summary.clone(),
            extracted_text,
            is_locked: false,
        };
    }

    ResumeAnalysisResponse {
        resume_score: ScoreView::Hidden(SCORE_PLACEHOLDER),
        ats_score: ScoreView::Hidden(SCORE_PLACEHOLDER),
        strengths: report.strengths.iter().take(2).cloned().collect(),
        weaknesses: vec![HIDDEN_LIST_MARKER.to_string()],
        recommended_changes: vec![HIDDEN_LIST_MARKER.to_string()],
        missing_skills: vec![HIDDEN_SKILLS_MARKER.to_string()],
        scam_warnings: Vec::new(),
        final_summary: RESUME_UPSELL.to_string(),
        extracted_text,
        is_locked: true,
    }
}
