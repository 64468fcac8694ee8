//! Offer risk scorer — rule-based scam scoring for internship/job offers.
//!
//! Each signal is an independent rule producing `(delta, reason)` findings;
//! the findings are folded into a total that is clamped to 100, and the
//! verdict tiers are a fixed function of that total. Pure and deterministic:
//! no I/O, no shared state, safe to call from any number of handlers.

use serde::{Deserialize, Serialize};

use crate::scoring::text::{first_amount, group_thousands};

/// Keywords that show up disproportionately in fake offers. Matching is
/// case-insensitive; reasons quote this casing, not the input's.
const SCAM_KEYWORDS: &[&str] = &[
    "urgent",
    "limited seats",
    "hurry",
    "act now",
    "guaranteed",
    "easy money",
    "no experience",
    "work from home",
    "registration fee",
    "certificate fee",
    "refundable",
    "deposit",
    "processing fee",
];

/// Free-mail providers a legitimate company would not recruit from.
const FREE_MAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "outlook.com", "hotmail.com"];

/// TLDs handed out for free and heavily abused by throwaway scam sites.
const SUSPICIOUS_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".cf", ".gq"];

/// Raw offer fields as submitted by the caller. Every field is optional on
/// the wire; absent fields score as empty/false.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferInput {
    #[serde(default)]
    pub offer_text: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub stipend: String,
    #[serde(default)]
    pub fees_required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Safe,
    Suspicious,
    #[serde(rename = "Highly Fake")]
    HighlyFake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Green,
    Yellow,
    Red,
}

impl Verdict {
    fn from_score(score: u32) -> Self {
        if score < 30 {
            Verdict::Safe
        } else if score < 60 {
            Verdict::Suspicious
        } else {
            Verdict::HighlyFake
        }
    }

    pub fn color(self) -> RiskColor {
        match self {
            Verdict::Safe => RiskColor::Green,
            Verdict::Suspicious => RiskColor::Yellow,
            Verdict::HighlyFake => RiskColor::Red,
        }
    }
}

/// Full scoring result. Always complete — the preview layer decides what a
/// free-tier caller actually gets to see.
#[derive(Debug, Clone, Serialize)]
pub struct OfferReport {
    pub scam_score: u32,
    pub verdict: Verdict,
    pub color: RiskColor,
    pub reasons: Vec<String>,
    pub recommendation: String,
}

/// A single rule finding: score contribution plus the reason shown to users.
type Finding = (u32, String);

pub fn score_offer(offer: &OfferInput) -> OfferReport {
    let mut findings: Vec<Finding> = Vec::new();

    findings.extend(text_signals(&offer.offer_text));
    findings.extend(email_signal(&offer.email));
    findings.extend(website_signals(&offer.website));
    findings.extend(stipend_signal(&offer.stipend));
    if offer.fees_required {
        findings.push((
            30,
            "Requires registration or certificate fees (major red flag)".to_string(),
        ));
    }

    let scam_score = findings.iter().map(|(delta, _)| delta).sum::<u32>().min(100);
    let verdict = Verdict::from_score(scam_score);

    OfferReport {
        scam_score,
        verdict,
        color: verdict.color(),
        reasons: findings.into_iter().map(|(_, reason)| reason).collect(),
        recommendation: recommendation(scam_score),
    }
}

/// Keyword scan and brevity check. Independent sub-checks: both may fire.
fn text_signals(text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    let lower = text.to_lowercase();

    let matched: Vec<&str> = SCAM_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lower.contains(kw))
        .collect();
    if !matched.is_empty() {
        let delta = (matched.len() as u32 * 8).min(40);
        findings.push((
            delta,
            format!(
                "Contains suspicious keywords: {}",
                matched[..matched.len().min(3)].join(", ")
            ),
        ));
    }

    if text.len() < 50 {
        findings.push((10, "Offer description is too brief".to_string()));
    }

    findings
}

fn email_signal(email: &str) -> Option<Finding> {
    if email.is_empty() {
        return None;
    }
    let domain = email.rsplit_once('@').map(|(_, d)| d).unwrap_or("");
    if FREE_MAIL_DOMAINS.contains(&domain) {
        return Some((
            25,
            format!("Uses free email domain ({domain}) instead of company domain"),
        ));
    }
    None
}

fn website_signals(website: &str) -> Vec<Finding> {
    if website.is_empty() {
        return vec![(15, "No official website provided".to_string())];
    }

    let normalized = if website.starts_with("http://") || website.starts_with("https://") {
        website.to_string()
    } else {
        format!("https://{website}")
    };

    let host = match parse_host(&normalized) {
        Some(host) => host,
        None => return vec![(15, "Invalid website URL format".to_string())],
    };

    let mut findings = Vec::new();
    if SUSPICIOUS_TLDS.iter().any(|tld| host.contains(tld)) {
        findings.push((20, "Uses suspicious free domain extension".to_string()));
    }
    if starts_with_dotted_quad(host) {
        findings.push((25, "Website is an IP address (not a proper domain)".to_string()));
    }
    findings
}

fn stipend_signal(stipend: &str) -> Option<Finding> {
    let amount = first_amount(stipend)?;
    if amount > 50_000 {
        Some((
            20,
            format!("Unrealistic stipend amount (₹{})", group_thousands(amount)),
        ))
    } else if amount > 30_000 {
        Some((
            10,
            format!("Suspiciously high stipend (₹{})", group_thousands(amount)),
        ))
    } else {
        None
    }
}

/// Extracts the authority host from a URL. Returns `None` for anything that
/// has no plausible host (empty, embedded whitespace) — that degrades to the
/// fixed invalid-format finding rather than an error.
fn parse_host(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        None
    } else {
        Some(host)
    }
}

/// Prefix match for `d.d.d.d` — three all-digit labels followed by a fourth
/// starting with a digit (ports and extra labels may trail).
fn starts_with_dotted_quad(host: &str) -> bool {
    let parts: Vec<&str> = host.splitn(4, '.').collect();
    parts.len() == 4
        && parts[..3]
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
        && parts[3].bytes().next().is_some_and(|b| b.is_ascii_digit())
}

fn recommendation(score: u32) -> String {
    if score < 30 {
        "This offer appears legitimate. However, always verify through official channels."
    } else if score < 60 {
        "Exercise caution. Verify company details and avoid paying any fees."
    } else {
        "High risk of scam. Do not proceed or share personal information."
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(
        text: &str,
        email: &str,
        website: &str,
        stipend: &str,
        fees_required: bool,
    ) -> OfferInput {
        OfferInput {
            offer_text: text.to_string(),
            email: email.to_string(),
            website: website.to_string(),
            stipend: stipend.to_string(),
            fees_required,
        }
    }

    #[test]
    fn test_empty_offer_scores_in_bounds() {
        let report = score_offer(&OfferInput::default());
        // Brief text (+10) and missing website (+15) are all that fire.
        assert_eq!(report.scam_score, 25);
        assert_eq!(report.verdict, Verdict::Safe);
        assert_eq!(report.color, RiskColor::Green);
    }

    #[test]
    fn test_fees_alone_is_at_least_suspicious() {
        let report = score_offer(&offer(
            "A perfectly ordinary offer description that is long enough.",
            "",
            "https://example.com",
            "",
            true,
        ));
        assert!(report.scam_score >= 30);
        assert!(report
            .reasons
            .iter()
            .any(|r| r.contains("registration or certificate fees")));
    }

    #[test]
    fn test_keyword_score_caps_at_40() {
        // 13 keywords x 8 would be 104 uncapped.
        let text = SCAM_KEYWORDS.join(" ");
        let findings = text_signals(&text);
        assert_eq!(findings[0].0, 40);
    }

    #[test]
    fn test_keyword_reason_lists_first_three() {
        let findings =
            text_signals("urgent! guaranteed placement, easy money, no experience needed");
        assert_eq!(
            findings[0].1,
            "Contains suspicious keywords: urgent, guaranteed, easy money"
        );
    }

    #[test]
    fn test_brief_text_and_keywords_both_fire() {
        let findings = text_signals("urgent hiring");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].0, 8);
        assert_eq!(findings[1].0, 10);
    }

    #[test]
    fn test_free_email_domain_flagged() {
        let finding = email_signal("recruiter@gmail.com").unwrap();
        assert_eq!(finding.0, 25);
        assert!(finding.1.contains("gmail.com"));
    }

    #[test]
    fn test_company_email_not_flagged() {
        assert!(email_signal("hr@infosys.com").is_none());
        assert!(email_signal("").is_none());
    }

    #[test]
    fn test_email_without_at_sign_not_flagged() {
        assert!(email_signal("not-an-email").is_none());
    }

    #[test]
    fn test_empty_website_single_fixed_finding() {
        let findings = website_signals("");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].0, 15);
        assert_eq!(findings[0].1, "No official website provided");
    }

    #[test]
    fn test_suspicious_tld_flagged() {
        let findings = website_signals("http://free-offers.tk/apply");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].0, 20);
    }

    #[test]
    fn test_ip_host_flagged() {
        let findings = website_signals("http://192.168.10.5/jobs");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].0, 25);
    }

    #[test]
    fn test_ip_host_with_port_still_flagged() {
        let findings = website_signals("203.0.113.9:8080");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].0, 25);
    }

    #[test]
    fn test_whitespace_url_is_invalid_format() {
        let findings = website_signals("not a real url");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].1, "Invalid website URL format");
    }

    #[test]
    fn test_schemeless_website_normalized() {
        assert!(website_signals("infosys.com/careers").is_empty());
    }

    #[test]
    fn test_stipend_tiers() {
        assert!(stipend_signal("").is_none());
        assert!(stipend_signal("unpaid").is_none());
        assert!(stipend_signal("₹15,000/month").is_none());
        assert_eq!(stipend_signal("₹40,000/month").unwrap().0, 10);
        let (delta, reason) = stipend_signal("₹60,000/month").unwrap();
        assert_eq!(delta, 20);
        assert!(reason.contains("₹60,000"));
    }

    #[test]
    fn test_obvious_scam_clamps_to_100() {
        let report = score_offer(&offer(
            "Guaranteed income, urgent hiring, no experience needed, registration fee required",
            "abc@gmail.com",
            "",
            "₹60,000/month",
            true,
        ));
        assert_eq!(report.scam_score, 100);
        assert_eq!(report.verdict, Verdict::HighlyFake);
        assert_eq!(report.color, RiskColor::Red);
        let joined = report.reasons.join(" | ");
        assert!(joined.contains("suspicious keywords"));
        assert!(joined.contains("gmail.com"));
        assert!(joined.contains("No official website"));
        assert!(joined.contains("₹60,000"));
        assert!(joined.contains("fees"));
    }

    #[test]
    fn test_legitimate_offer_is_safe() {
        let report = score_offer(&offer(
            "Standard paid internship with structured mentorship and onboarding",
            "hr@infosys.com",
            "https://infosys.com/careers",
            "₹15,000/month",
            false,
        ));
        assert!(report.scam_score < 30, "score was {}", report.scam_score);
        assert_eq!(report.verdict, Verdict::Safe);
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_score(0), Verdict::Safe);
        assert_eq!(Verdict::from_score(29), Verdict::Safe);
        assert_eq!(Verdict::from_score(30), Verdict::Suspicious);
        assert_eq!(Verdict::from_score(59), Verdict::Suspicious);
        assert_eq!(Verdict::from_score(60), Verdict::HighlyFake);
        assert_eq!(Verdict::from_score(100), Verdict::HighlyFake);
    }

    #[test]
    fn test_verdict_serializes_with_space() {
        let json = serde_json::to_string(&Verdict::HighlyFake).unwrap();
        assert_eq!(json, r#""Highly Fake""#);
        assert_eq!(
            serde_json::to_string(&RiskColor::Yellow).unwrap(),
            r#""yellow""#
        );
    }

    #[test]
    fn test_recommendation_tracks_thresholds() {
        assert!(recommendation(10).contains("legitimate"));
        assert!(recommendation(45).contains("caution"));
        assert!(recommendation(80).contains("High risk"));
    }
}
