//! Heuristic Classifier: the deterministic fallback producer.
//!
//! Buckets resume text into one of three tiers by a prioritized keyword scan
//! and returns that tier's canonical template. No external calls, no
//! randomness: identical text always yields the identical result.
//!
//! Priority order:
//! 1. Senior: title words, a two-digit "N+ years" token, or a marquee employer.
//! 2. Entry: junior/entry/intern/recent-graduate wording.
//! 3. Mid: everything else.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::analysis::contract::AnalysisResult;

pub mod templates;

pub use templates::TEMPLATE_VERSION;

// Title words are matched case-sensitively so "mentored junior developers"
// or "assisted senior engineers" do not move a resume between tiers.
static SENIOR_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Senior|Lead|Principal|Staff)\b").expect("senior title pattern")
});

static LONG_TENURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[1-9]\d+\s*\+\s*(?:years?|yrs)\b").expect("tenure pattern")
});

static MARQUEE_EMPLOYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Google|Facebook)\b").expect("employer pattern")
});

static ENTRY_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Junior|Entry|entry|Intern(?:ship)?|[Rr]ecent graduate)\b")
        .expect("entry pattern")
});

/// Coarse candidate bucket chosen by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Entry,
    Mid,
    Senior,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Entry => "entry",
            Tier::Mid => "mid",
            Tier::Senior => "senior",
        }
    }

    /// The canonical result for this tier.
    pub fn template(&self) -> AnalysisResult {
        match self {
            Tier::Entry => templates::entry_template(),
            Tier::Mid => templates::mid_template(),
            Tier::Senior => templates::senior_template(),
        }
    }
}

/// The selected tier plus the signal that selected it (`None` for the Mid
/// default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierDecision {
    pub tier: Tier,
    pub signal: Option<String>,
}

/// Picks a tier for the resume text. Never fails: no signal means Mid.
pub fn classify_tier(resume_text: &str) -> TierDecision {
    let senior = [
        ("title", &*SENIOR_TITLE),
        ("tenure", &*LONG_TENURE),
        ("employer", &*MARQUEE_EMPLOYER),
    ];
    for (kind, pattern) in senior {
        if let Some(m) = pattern.find(resume_text) {
            return TierDecision {
                tier: Tier::Senior,
                signal: Some(format!("{kind} '{}'", m.as_str())),
            };
        }
    }

    if let Some(m) = ENTRY_SIGNAL.find(resume_text) {
        return TierDecision {
            tier: Tier::Entry,
            signal: Some(format!("entry '{}'", m.as_str())),
        };
    }

    TierDecision {
        tier: Tier::Mid,
        signal: None,
    }
}

/// Produces a complete, contract-valid analysis from resume text alone.
pub fn classify(resume_text: &str) -> AnalysisResult {
    let decision = classify_tier(resume_text);
    debug!(
        tier = decision.tier.as_str(),
        signal = decision.signal.as_deref().unwrap_or("none"),
        template_version = TEMPLATE_VERSION,
        "Heuristic tier selected"
    );
    decision.tier.template()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::contract::{validate, HiringRecommendation};

    const SENIOR_RESUME: &str = "Sarah Johnson
Senior Full Stack Engineer & Team Lead
Accomplished engineer with 12+ years of experience leading cross-functional teams.
Senior Software Engineer & Tech Lead | Google | 2019 - Present
Mentored 12 junior engineers, with 8 receiving promotions.";

    const JUNIOR_RESUME: &str = "Alex Chen
Junior Software Developer
Recent computer science graduate seeking a junior software developer position.
Software Development Intern | Local Tech Startup | Summer 2022
Assisted senior developers in debugging and testing web applications.";

    const MID_RESUME: &str = "Michael Rodriguez
Software Engineer
Experienced software engineer with 5+ years of experience in full-stack development.
Participated in code reviews and mentored junior developers.";

    #[test]
    fn test_senior_title_and_tenure_select_senior_tier() {
        let text = "Senior Software Engineer with 12+ years building distributed systems";
        let decision = classify_tier(text);
        assert_eq!(decision.tier, Tier::Senior);

        let result = classify(text);
        assert!(result.overall_score >= 90);
        assert_eq!(
            result.hiring_recommendation,
            HiringRecommendation::StrongHire
        );
    }

    #[test]
    fn test_junior_title_without_senior_signals_selects_entry_tier() {
        let text = "Junior Software Developer. Built a portfolio site in React.";
        assert_eq!(classify_tier(text).tier, Tier::Entry);

        let result = classify(text);
        assert!((60..=80).contains(&result.overall_score));
        assert!(matches!(
            result.hiring_recommendation,
            HiringRecommendation::Hire | HiringRecommendation::Maybe
        ));
    }

    #[test]
    fn test_no_signal_defaults_to_mid() {
        let decision = classify_tier("Software Engineer. Rust, Go, PostgreSQL.");
        assert_eq!(decision.tier, Tier::Mid);
        assert!(decision.signal.is_none());

        let result = classify("");
        assert!((70..=85).contains(&result.overall_score));
        assert_eq!(result.hiring_recommendation, HiringRecommendation::Hire);
    }

    #[test]
    fn test_sample_resumes_land_in_expected_tiers() {
        assert_eq!(classify_tier(SENIOR_RESUME).tier, Tier::Senior);
        assert_eq!(classify_tier(JUNIOR_RESUME).tier, Tier::Entry);
        assert_eq!(classify_tier(MID_RESUME).tier, Tier::Mid);
    }

    #[test]
    fn test_senior_signals_take_priority_over_entry_signals() {
        let text = "Junior developer in 2010, now Lead Engineer";
        let decision = classify_tier(text);
        assert_eq!(decision.tier, Tier::Senior);
        assert_eq!(decision.signal.as_deref(), Some("title 'Lead'"));
    }

    #[test]
    fn test_lowercase_colleague_mentions_do_not_change_tier() {
        assert_eq!(
            classify_tier("Assisted senior engineers and mentored junior hires").tier,
            Tier::Mid
        );
    }

    #[test]
    fn test_title_words_need_word_boundaries() {
        // "Leadership" and "Staffing" are not titles
        assert_eq!(
            classify_tier("Showed Leadership at a Staffing agency").tier,
            Tier::Mid
        );
    }

    #[test]
    fn test_tenure_token_needs_two_digits_and_plus() {
        assert_eq!(classify_tier("5+ years of Rust").tier, Tier::Mid);
        assert_eq!(classify_tier("12 years of Rust").tier, Tier::Mid);

        let decision = classify_tier("15 + YRS shipping backend services");
        assert_eq!(decision.tier, Tier::Senior);
        assert_eq!(decision.signal.as_deref(), Some("tenure '15 + YRS'"));
    }

    #[test]
    fn test_marquee_employer_selects_senior() {
        let decision = classify_tier("Software Engineer | Facebook | 2018 - 2023");
        assert_eq!(decision.tier, Tier::Senior);
        assert_eq!(decision.signal.as_deref(), Some("employer 'Facebook'"));
    }

    #[test]
    fn test_product_names_are_not_employer_signals() {
        let decision = classify_tier("Junior Software Developer. Skills: Microsoft Excel, Amazon S3");
        assert_eq!(decision.tier, Tier::Entry);
        assert_eq!(decision.signal.as_deref(), Some("entry 'Junior'"));

        assert_eq!(
            classify_tier("Recent graduate. Built an Apple Watch app").tier,
            Tier::Entry
        );
        assert_eq!(
            classify("Junior Software Developer. Skills: Microsoft Excel, Amazon S3")
                .hiring_recommendation,
            HiringRecommendation::Hire
        );
    }

    #[test]
    fn test_entry_signals() {
        for text in [
            "Entry level analyst",
            "Looking for an entry-level role",
            "Summer Internship at a bank",
            "Recent graduate of UC Davis",
            "recent graduate, CS",
        ] {
            assert_eq!(classify_tier(text).tier, Tier::Entry, "{text}");
        }
    }

    #[test]
    fn test_classification_is_byte_identical_across_calls() {
        for text in [SENIOR_RESUME, JUNIOR_RESUME, MID_RESUME] {
            let a = serde_json::to_string(&classify(text)).unwrap();
            let b = serde_json::to_string(&classify(text)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_every_tier_output_passes_validation() {
        for text in [SENIOR_RESUME, JUNIOR_RESUME, MID_RESUME, ""] {
            let result = classify(text);
            let json = serde_json::to_value(&result).unwrap();
            assert_eq!(validate(&json).unwrap(), result);
        }
    }
}
