//! Resume quality scorer — content score, ATS compatibility, strengths,
//! weaknesses, recommendations, missing skills, and privacy warnings from
//! free-form resume text.
//!
//! Total over arbitrary input (empty text is degenerate but never fails).
//! Weaknesses carry a stable [`WeaknessKind`] so recommendations switch on
//! an identifier instead of re-parsing generated sentences.

use serde::Serialize;

use crate::scoring::text::{
    contains_word, has_count_metric, has_percent_metric, word_count,
};

/// Skills commonly requested in entry-level tech postings. Used both for
/// the strength check and for missing-skill suggestions.
const COMMON_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "react",
    "node",
    "sql",
    "mysql",
    "html",
    "css",
    "git",
    "docker",
    "aws",
    "cloud",
    "machine learning",
    "data analysis",
    "communication",
    "leadership",
    "teamwork",
];

/// Section keywords an applicant tracking system looks for.
const ATS_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
    "objective",
    "certifications",
    "achievements",
    "technologies",
];

const ACTION_VERBS: &[&str] = &["led", "managed", "developed", "created", "designed"];

const REQUIRED_SECTIONS: &[&str] = &["education", "skills", "projects"];

/// Sensitive-term groups. Each group that matches contributes exactly one
/// fixed warning, however many of its terms appear.
const ID_TERMS: &[&str] = &["passport", "driving license", "aadhar", "pan card"];
const PERSONAL_TERMS: &[&str] = &["date of birth", "dob", "marital status", "religion"];
const FAMILY_TERMS: &[&str] = &["father", "mother"];
const ADDRESS_TERMS: &[&str] = &["house no", "flat no"];

/// Stable identifier for a detected weakness. Recommendations key off this,
/// so reworded messages cannot silently break the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaknessKind {
    TooBrief,
    MissingLinks,
    MissingEducation,
    WeakVerbs,
}

#[derive(Debug, Clone)]
pub struct Weakness {
    pub kind: WeaknessKind,
    pub message: String,
}

/// Full analysis result. Always complete; the preview layer hides fields
/// from free-tier callers.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeReport {
    pub resume_score: u32,
    pub ats_score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommended_changes: Vec<String>,
    pub missing_skills: Vec<String>,
    pub scam_warnings: Vec<String>,
    pub final_summary: String,
}

pub fn score_resume(resume_text: &str) -> ResumeReport {
    let text = resume_text.to_lowercase();

    let resume_score = content_score(&text);
    let ats_score = ats_score(&text);
    let strengths = identify_strengths(&text);
    let weaknesses = identify_weaknesses(&text);
    let recommended_changes = recommendations(&weaknesses);
    let missing_skills = missing_skills(&text);
    let scam_warnings = privacy_warnings(&text);

    ResumeReport {
        resume_score,
        ats_score,
        strengths,
        weaknesses: weaknesses.into_iter().map(|w| w.message).collect(),
        recommended_changes,
        missing_skills,
        scam_warnings,
        // ATS score is computed but deliberately not consulted here.
        final_summary: final_summary(resume_score),
    }
}

/// Base 50, adjusted by length band, section presence, and quantifiable
/// achievements; clamped to [0, 100].
fn content_score(text: &str) -> u32 {
    let mut score: i32 = 50;

    let words = word_count(text);
    if (200..=600).contains(&words) {
        score += 10;
    } else if words < 200 {
        score -= 10;
    } else {
        score -= 5;
    }

    for section in REQUIRED_SECTIONS {
        if text.contains(section) {
            score += 10;
        } else {
            score -= 5;
        }
    }

    if has_percent_metric(text) || has_count_metric(text) {
        score += 10;
    }

    score.clamp(0, 100) as u32
}

/// Base 40 plus 5 per ATS keyword found; clamped to [0, 100].
fn ats_score(text: &str) -> u32 {
    let found = ATS_KEYWORDS.iter().filter(|kw| text.contains(*kw)).count();
    (40 + 5 * found as i32).clamp(0, 100) as u32
}

fn identify_strengths(text: &str) -> Vec<String> {
    let mut strengths = Vec::new();

    if word_count(text) > 200 {
        strengths.push("Good content length".to_string());
    }

    let found_skills = COMMON_SKILLS.iter().filter(|s| text.contains(*s)).count();
    if found_skills >= 5 {
        strengths.push(format!(
            "Strong technical vocabulary ({found_skills}+ skills detected)"
        ));
    }

    if text.contains("project") {
        strengths.push("Includes project section".to_string());
    }

    if has_percent_metric(text) {
        strengths.push("Uses quantifiable metrics (numbers/percentages)".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Clear and readable structure".to_string());
    }

    strengths
}

fn identify_weaknesses(text: &str) -> Vec<Weakness> {
    let mut weaknesses = Vec::new();

    if word_count(text) < 200 {
        weaknesses.push(Weakness {
            kind: WeaknessKind::TooBrief,
            message: "Content is too brief".to_string(),
        });
    }

    if !text.contains("linkedin") && !text.contains("github") {
        weaknesses.push(Weakness {
            kind: WeaknessKind::MissingLinks,
            message: "Missing professional links (LinkedIn/GitHub)".to_string(),
        });
    }

    if !text.contains("education") {
        weaknesses.push(Weakness {
            kind: WeaknessKind::MissingEducation,
            message: "Education section is not clearly defined".to_string(),
        });
    }

    if !ACTION_VERBS.iter().any(|v| contains_word(text, v)) {
        weaknesses.push(Weakness {
            kind: WeaknessKind::WeakVerbs,
            message: "Lack of strong action verbs".to_string(),
        });
    }

    weaknesses
}

fn recommendations(weaknesses: &[Weakness]) -> Vec<String> {
    let mut recs: Vec<String> = weaknesses
        .iter()
        .map(|w| match w.kind {
            WeaknessKind::TooBrief => "Expand on your project descriptions and roles.",
            WeaknessKind::MissingLinks => {
                "Add links to your LinkedIn profile and GitHub portfolio."
            }
            WeaknessKind::MissingEducation => "Create a dedicated 'Education' section.",
            WeaknessKind::WeakVerbs => {
                "Use strong action verbs like 'Developed', 'Led', 'Optimized' to start bullet points."
            }
        })
        .map(str::to_string)
        .collect();

    if recs.is_empty() {
        recs.push("Review formatting to ensure consistent font sizes and spacing.".to_string());
        recs.push("Tailor your objective to the specific job role.".to_string());
    }

    recs
}

/// Common skills absent from the text, capped at the first 5 suggestions.
fn missing_skills(text: &str) -> Vec<String> {
    let missing: Vec<String> = COMMON_SKILLS
        .iter()
        .filter(|s| !text.contains(*s))
        .take(5)
        .map(|s| s.to_string())
        .collect();

    if missing.is_empty() {
        vec!["Communication".to_string(), "Leadership".to_string()]
    } else {
        missing
    }
}

fn privacy_warnings(text: &str) -> Vec<String> {
    let groups: &[(&[&str], &str)] = &[
        (
            ID_TERMS,
            "Remove sensitive ID numbers or details (Passport/Aadhar/PAN).",
        ),
        (
            PERSONAL_TERMS,
            "Remove personal details like Date of Birth, Marital Status, or Religion. They are not required.",
        ),
        (
            FAMILY_TERMS,
            "Remove parents' names. This is unnecessary personal information.",
        ),
        (
            ADDRESS_TERMS,
            "Avoid sharing your full home address. City and State are sufficient.",
        ),
    ];

    groups
        .iter()
        .filter(|(terms, _)| terms.iter().any(|t| contains_word(text, t)))
        .map(|(_, warning)| warning.to_string())
        .collect()
}

fn final_summary(resume_score: u32) -> String {
    if resume_score >= 80 {
        "This provides a strong foundation! Focus on tailoring the resume to specific job descriptions to maximize impact."
    } else if resume_score >= 60 {
        "Good start, but needs refinement. Focus on adding more quantifiable achievements and improving the layout."
    } else {
        "Needs significant improvement. Structure your resume with clear headings and focus on highlighting your skills and projects."
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A solid resume: all three sections, 5+ skills, metrics, >200 words.
    fn strong_resume() -> String {
        let mut text = String::from(
            "Summary: Software engineering student seeking backend roles. \
             Education: B.Tech in Computer Science, 2025. \
             Skills: Python, Java, SQL, Docker, AWS, Git. \
             Projects: Developed a web application used by 500+ students and \
             improved API performance by 30%. Led a team of four on the \
             capstone project. LinkedIn and GitHub profiles linked above. ",
        );
        // Pad past the 200-word threshold with plausible filler.
        for _ in 0..30 {
            text.push_str(
                "Built and maintained automated test suites for course projects. ",
            );
        }
        text
    }

    #[test]
    fn test_strong_resume_scores_high() {
        let report = score_resume(&strong_resume());
        assert!(report.resume_score >= 80, "score {}", report.resume_score);
        assert!(report
            .strengths
            .iter()
            .any(|s| s.contains("skills detected")));
        assert!(report
            .strengths
            .iter()
            .any(|s| s.contains("quantifiable metrics")));
        assert!(report.final_summary.contains("strong foundation"));
    }

    #[test]
    fn test_empty_text_is_degenerate_but_total() {
        let report = score_resume("");
        // 50 - 10 (short) - 15 (three missing sections) = 25
        assert_eq!(report.resume_score, 25);
        assert_eq!(report.ats_score, 40);
        assert_eq!(report.strengths, vec!["Clear and readable structure"]);
        assert_eq!(report.weaknesses.len(), 4);
        assert!(report.final_summary.contains("significant improvement"));
    }

    #[test]
    fn test_scores_clamped_for_extreme_input() {
        let huge = "word ".repeat(10_000);
        let report = score_resume(&huge);
        assert!(report.resume_score <= 100);
        assert!(report.ats_score <= 100);
    }

    #[test]
    fn test_length_band_bonus_and_penalties() {
        let short = "education skills projects";
        let in_band = format!("education skills projects {}", "filler ".repeat(250));
        let long = format!("education skills projects {}", "filler ".repeat(700));
        // Same section bonuses, so only the band adjustment differs.
        assert_eq!(content_score(short), 50 - 10 + 30);
        assert_eq!(content_score(&in_band), 50 + 10 + 30);
        assert_eq!(content_score(&long), 50 - 5 + 30);
    }

    #[test]
    fn test_ats_score_counts_keywords() {
        assert_eq!(ats_score(""), 40);
        assert_eq!(ats_score("experience education skills"), 55);
        let all = ATS_KEYWORDS.join(" ");
        assert_eq!(ats_score(&all), 85);
    }

    #[test]
    fn test_missing_skills_capped_at_five() {
        let report = score_resume("a resume mentioning nothing technical");
        assert_eq!(report.missing_skills.len(), 5);
        assert_eq!(report.missing_skills[0], "python");
    }

    #[test]
    fn test_all_skills_present_returns_fallback() {
        let text = COMMON_SKILLS.join(" ");
        assert_eq!(missing_skills(&text), vec!["Communication", "Leadership"]);
    }

    #[test]
    fn test_weakness_kinds_drive_recommendations() {
        let report = score_resume("short resume, education listed, developed things");
        // Too brief + missing links fire; education and action verbs do not.
        assert!(report
            .weaknesses
            .iter()
            .any(|w| w.contains("too brief")));
        assert!(report
            .weaknesses
            .iter()
            .any(|w| w.contains("professional links")));
        assert!(report
            .recommended_changes
            .iter()
            .any(|r| r.contains("Expand on your project descriptions")));
        assert!(report
            .recommended_changes
            .iter()
            .any(|r| r.contains("LinkedIn profile")));
    }

    #[test]
    fn test_no_weaknesses_yields_generic_recommendations() {
        let recs = recommendations(&[]);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("formatting"));
    }

    #[test]
    fn test_action_verbs_are_whole_word_matches() {
        // "bootled" and "ledger" must not count as "led".
        let weaknesses = identify_weaknesses("bootled a ledger application");
        assert!(weaknesses
            .iter()
            .any(|w| w.kind == WeaknessKind::WeakVerbs));
        let weaknesses = identify_weaknesses("led a ledger application");
        assert!(!weaknesses
            .iter()
            .any(|w| w.kind == WeaknessKind::WeakVerbs));
    }

    #[test]
    fn test_privacy_warnings_one_per_group() {
        let report =
            score_resume("Father's Name: John, DOB: 01/01/2000, Aadhar: 1234");
        assert_eq!(report.scam_warnings.len(), 3);
        let joined = report.scam_warnings.join(" ");
        assert!(joined.contains("ID numbers"));
        assert!(joined.contains("Date of Birth"));
        assert!(joined.contains("parents' names"));
        assert!(!joined.contains("home address"));
    }

    #[test]
    fn test_multiple_terms_in_group_still_one_warning() {
        let warnings = privacy_warnings("passport aadhar pan card details attached");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_clean_resume_no_privacy_warnings() {
        assert!(privacy_warnings("education skills projects github").is_empty());
    }

    #[test]
    fn test_summary_thresholds() {
        assert!(final_summary(80).contains("strong foundation"));
        assert!(final_summary(79).contains("needs refinement"));
        assert!(final_summary(60).contains("needs refinement"));
        assert!(final_summary(59).contains("significant improvement"));
    }
}
