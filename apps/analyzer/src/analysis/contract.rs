//! Analysis Contract: the closed schema every analysis producer must satisfy.
//!
//! Two producers exist: the reasoning model (through the adapter) and the
//! heuristic classifier. Both hand their output to `validate`, which
//! hard-enforces presence, types, numeric ranges and enum membership and reports
//! every violation it finds. Softer cross-field rules live in
//! `check_consistency`; those are logged by the caller, never rejected.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Lowest `overallScore` that may carry a "Strong Hire".
pub const STRONG_HIRE_MIN_SCORE: u8 = 85;
/// "No Hire" is expected below this score unless red flags are present.
pub const NO_HIRE_CEILING: u8 = 50;
/// "Hire" below this score is reported as inconsistent.
pub const HIRE_MIN_SCORE: u8 = 50;
/// Allowed distance between `skillsGap` and the gap implied by the skill sets.
pub const SKILLS_GAP_TOLERANCE: u8 = 35;

/// Wire names of the six competency dimensions, in display order.
pub const COMPETENCIES: [&str; 6] = [
    "technical",
    "leadership",
    "communication",
    "problemSolving",
    "teamwork",
    "adaptability",
];

// ────────────────────────────────────────────────────────────────────────────
// Closed enums (wire strings are part of the contract)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl SeniorityLevel {
    pub const WIRE_NAMES: &'static [&'static str] =
        &["Entry", "Junior", "Mid", "Senior", "Lead", "Executive"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiringRecommendation {
    #[serde(rename = "Strong Hire")]
    StrongHire,
    Hire,
    Maybe,
    #[serde(rename = "No Hire")]
    NoHire,
}

impl HiringRecommendation {
    pub const WIRE_NAMES: &'static [&'static str] = &["Strong Hire", "Hire", "Maybe", "No Hire"];

    pub fn as_str(&self) -> &'static str {
        match self {
            HiringRecommendation::StrongHire => "Strong Hire",
            HiringRecommendation::Hire => "Hire",
            HiringRecommendation::Maybe => "Maybe",
            HiringRecommendation::NoHire => "No Hire",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Skills,
    Experience,
    Education,
    #[serde(rename = "Resume Format")]
    ResumeFormat,
    Keywords,
    Achievements,
}

impl RecommendationCategory {
    pub const WIRE_NAMES: &'static [&'static str] = &[
        "Skills",
        "Experience",
        "Education",
        "Resume Format",
        "Keywords",
        "Achievements",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const WIRE_NAMES: &'static [&'static str] = &["High", "Medium", "Low"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl Severity {
    pub const WIRE_NAMES: &'static [&'static str] = &["Critical", "Major", "Minor"];
}

// ────────────────────────────────────────────────────────────────────────────
// Result entity
// ────────────────────────────────────────────────────────────────────────────

/// The single root entity produced per analysis request. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub skills_match: SkillsMatch,
    pub experience_analysis: ExperienceAnalysis,
    pub qualifications: Qualifications,
    pub recommendations: Vec<Recommendation>,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
    pub ats_score: u8,
    pub ats_issues: Vec<String>,
    pub cultural_fit: u8,
    pub cultural_fit_factors: Vec<String>,
    pub summary: String,
    pub hiring_recommendation: HiringRecommendation,
    pub salary_range: SalaryRange,
    pub interview_focus: Vec<String>,
    pub red_flags: Vec<String>,
    pub competency_scores: CompetencyScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub additional: Vec<String>,
    /// Holistic 0–100 estimate; higher means a wider gap.
    pub skills_gap: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceAnalysis {
    pub years_of_experience: f64,
    pub relevant_experience: f64,
    pub seniority_level: SeniorityLevel,
    pub key_achievements: Vec<String>,
    pub career_progression: String,
    pub industry_experience: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualifications {
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub education_match: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub suggestion: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub area: String,
    pub description: String,
    pub relevance: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    pub area: String,
    pub description: String,
    pub severity: Severity,
    pub improvement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetencyScores {
    pub technical: u8,
    pub leadership: u8,
    pub communication: u8,
    pub problem_solving: u8,
    pub teamwork: u8,
    pub adaptability: u8,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation errors
// ────────────────────────────────────────────────────────────────────────────

/// One failed check. `field` is a dotted path, with list indices in brackets
/// (e.g. `recommendations[1].priority`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub field: String,
    pub reason: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every violation found in a candidate, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} contract violation(s): {}", .violations.len(), join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<SchemaViolation>,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn join_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ────────────────────────────────────────────────────────────────────────────
// validate()
// ────────────────────────────────────────────────────────────────────────────

/// Checks a candidate JSON object against the contract and returns the typed
/// result, or every violation found.
///
/// Integer-typed fields accept integral floats (`85.0`) since JSON producers
/// do not distinguish the two. Unknown extra fields are ignored.
pub fn validate(candidate: &Value) -> Result<AnalysisResult, ValidationError> {
    let Some(root) = candidate.as_object() else {
        return Err(ValidationError {
            violations: vec![SchemaViolation {
                field: "<root>".to_string(),
                reason: format!("expected an object, found {}", kind(candidate)),
            }],
        });
    };

    let mut v = Validator::default();

    let overall_score = v.score(root, "", "overallScore");
    v.score(root, "", "atsScore");
    v.score(root, "", "culturalFit");

    if let Some(skills) = v.object(root, "", "skillsMatch") {
        let p = "skillsMatch";
        v.string_list(skills, p, "matched");
        v.string_list(skills, p, "missing");
        v.string_list(skills, p, "additional");
        v.score(skills, p, "skillsGap");
    }

    if let Some(exp) = v.object(root, "", "experienceAnalysis") {
        let p = "experienceAnalysis";
        let years = v.non_negative(exp, p, "yearsOfExperience");
        let relevant = v.non_negative(exp, p, "relevantExperience");
        if let (Some(years), Some(relevant)) = (years, relevant) {
            if relevant > years {
                v.violation(
                    "experienceAnalysis.relevantExperience",
                    format!("{relevant} exceeds yearsOfExperience ({years})"),
                );
            }
        }
        v.one_of(exp, p, "seniorityLevel", SeniorityLevel::WIRE_NAMES);
        v.string_list(exp, p, "keyAchievements");
        v.string(exp, p, "careerProgression", false);
        v.string_list(exp, p, "industryExperience");
    }

    if let Some(quals) = v.object(root, "", "qualifications") {
        let p = "qualifications";
        v.string_list(quals, p, "education");
        v.string_list(quals, p, "certifications");
        v.string_list(quals, p, "languages");
        v.score(quals, p, "educationMatch");
    }

    if let Some(recommendations) = v.array(root, "", "recommendations") {
        for (i, item) in recommendations.iter().enumerate() {
            let p = format!("recommendations[{i}]");
            if let Some(rec) = v.item_object(item, &p) {
                v.one_of(rec, &p, "category", RecommendationCategory::WIRE_NAMES);
                v.one_of(rec, &p, "priority", Priority::WIRE_NAMES);
                v.string(rec, &p, "suggestion", true);
                v.string(rec, &p, "impact", false);
            }
        }
        if let Some(score) = overall_score {
            if score < 100 && recommendations.is_empty() {
                v.violation(
                    "recommendations",
                    format!("must not be empty when overallScore is below 100 (got {score})"),
                );
            }
        }
    }

    if let Some(strengths) = v.array(root, "", "strengths") {
        for (i, item) in strengths.iter().enumerate() {
            let p = format!("strengths[{i}]");
            if let Some(strength) = v.item_object(item, &p) {
                v.string(strength, &p, "area", true);
                v.string(strength, &p, "description", false);
                v.score(strength, &p, "relevance");
            }
        }
    }

    if let Some(weaknesses) = v.array(root, "", "weaknesses") {
        for (i, item) in weaknesses.iter().enumerate() {
            let p = format!("weaknesses[{i}]");
            if let Some(weakness) = v.item_object(item, &p) {
                v.string(weakness, &p, "area", true);
                v.string(weakness, &p, "description", false);
                v.one_of(weakness, &p, "severity", Severity::WIRE_NAMES);
                v.string(weakness, &p, "improvement", false);
            }
        }
    }

    v.string_list(root, "", "atsIssues");
    v.string_list(root, "", "culturalFitFactors");
    v.string(root, "", "summary", true);
    v.one_of(root, "", "hiringRecommendation", HiringRecommendation::WIRE_NAMES);

    if let Some(salary) = v.object(root, "", "salaryRange") {
        let p = "salaryRange";
        let min = v.positive_amount(salary, p, "min");
        let max = v.positive_amount(salary, p, "max");
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                v.violation("salaryRange.min", format!("{min} exceeds max ({max})"));
            }
        }
        if let Some(currency) = v.string(salary, p, "currency", true) {
            if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
                v.violation(
                    "salaryRange.currency",
                    format!("'{currency}' is not a three-letter uppercase currency code"),
                );
            }
        }
    }

    if let Some(focus) = v.string_list(root, "", "interviewFocus") {
        if focus.is_empty() {
            v.violation("interviewFocus", "must contain at least one entry");
        }
    }
    v.string_list(root, "", "redFlags");

    if let Some(competencies) = v.object(root, "", "competencyScores") {
        for key in COMPETENCIES {
            v.score(competencies, "competencyScores", key);
        }
    }

    if !v.violations.is_empty() {
        return Err(ValidationError {
            violations: v.violations,
        });
    }

    serde_json::from_value(normalize_integral_numbers(candidate.clone())).map_err(|e| {
        ValidationError {
            violations: vec![SchemaViolation {
                field: "<root>".to_string(),
                reason: format!("failed to decode validated object: {e}"),
            }],
        }
    })
}

const MAX_EXACT_AMOUNT: f64 = 9_007_199_254_740_991.0;

/// Walks a candidate object, recording violations instead of stopping at the
/// first one. Each accessor returns `None` when the field failed.
#[derive(Default)]
struct Validator {
    violations: Vec<SchemaViolation>,
}

impl Validator {
    fn violation(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.violations.push(SchemaViolation {
            field: field.into(),
            reason: reason.into(),
        });
    }

    fn field<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        path: &str,
        key: &str,
    ) -> Option<&'a Value> {
        match obj.get(key) {
            None | Some(Value::Null) => {
                self.violation(path, "missing");
                None
            }
            Some(value) => Some(value),
        }
    }

    fn object<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'a Map<String, Value>> {
        let path = join_path(parent, key);
        let value = self.field(obj, &path, key)?;
        self.item_object(value, &path)
    }

    fn item_object<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
        match value.as_object() {
            Some(map) => Some(map),
            None => {
                self.violation(path, format!("expected an object, found {}", kind(value)));
                None
            }
        }
    }

    fn array<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'a Vec<Value>> {
        let path = join_path(parent, key);
        let value = self.field(obj, &path, key)?;
        match value.as_array() {
            Some(items) => Some(items),
            None => {
                self.violation(path, format!("expected a list, found {}", kind(value)));
                None
            }
        }
    }

    fn string_list<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'a Vec<Value>> {
        let items = self.array(obj, parent, key)?;
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            if !item.is_string() {
                ok = false;
                self.violation(
                    format!("{}[{i}]", join_path(parent, key)),
                    format!("expected a string, found {}", kind(item)),
                );
            }
        }
        ok.then_some(items)
    }

    fn string<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
        non_empty: bool,
    ) -> Option<&'a str> {
        let path = join_path(parent, key);
        let value = self.field(obj, &path, key)?;
        match value.as_str() {
            Some(s) if non_empty && s.trim().is_empty() => {
                self.violation(path, "must not be empty");
                None
            }
            Some(s) => Some(s),
            None => {
                self.violation(path, format!("expected a string, found {}", kind(value)));
                None
            }
        }
    }

    fn number(&mut self, obj: &Map<String, Value>, path: &str, key: &str) -> Option<f64> {
        let value = self.field(obj, path, key)?;
        match value.as_f64() {
            Some(n) => Some(n),
            None => {
                self.violation(path, format!("expected a number, found {}", kind(value)));
                None
            }
        }
    }

    fn integer(&mut self, obj: &Map<String, Value>, path: &str, key: &str) -> Option<f64> {
        let n = self.number(obj, path, key)?;
        if n.fract() != 0.0 {
            self.violation(path, format!("expected an integer, found {n}"));
            return None;
        }
        Some(n)
    }

    /// Integer percentage in [0, 100].
    fn score(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) -> Option<u8> {
        let path = join_path(parent, key);
        let n = self.integer(obj, &path, key)?;
        if !(0.0..=100.0).contains(&n) {
            self.violation(path, format!("{n} is outside [0, 100]"));
            return None;
        }
        Some(n as u8)
    }

    fn non_negative(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) -> Option<f64> {
        let path = join_path(parent, key);
        let n = self.number(obj, &path, key)?;
        if n < 0.0 {
            self.violation(path, format!("{n} is negative"));
            return None;
        }
        Some(n)
    }

    /// Positive whole amount in any currency's nominal units. Bounded by the
    /// largest integer an f64 represents exactly.
    fn positive_amount(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) -> Option<u64> {
        let path = join_path(parent, key);
        let n = self.integer(obj, &path, key)?;
        if n <= 0.0 {
            self.violation(path, format!("{n} must be a positive amount"));
            return None;
        }
        if n > MAX_EXACT_AMOUNT {
            self.violation(path, format!("{n} exceeds the largest exact amount ({MAX_EXACT_AMOUNT})"));
            return None;
        }
        Some(n as u64)
    }

    fn one_of<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
        allowed: &[&str],
    ) -> Option<&'a str> {
        let value = self.string(obj, parent, key, false)?;
        if allowed.contains(&value) {
            Some(value)
        } else {
            self.violation(
                join_path(parent, key),
                format!("'{value}' is not one of [{}]", allowed.join(", ")),
            );
            None
        }
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Rewrites integral floats (`85.0`) as integers so they decode into the
/// integer-typed fields. Years stay decodable either way.
fn normalize_integral_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Value::from(f as i64)
            }
            _ => Value::Number(n),
        },
        Value::Array(items) => {
            Value::Array(items.into_iter().map(normalize_integral_numbers).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, normalize_integral_numbers(v)))
                .collect(),
        ),
        other => other,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Advisory consistency
// ────────────────────────────────────────────────────────────────────────────

/// A soft cross-field inconsistency. Reported, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyWarning {
    OverlappingSkills {
        skill: String,
        first: &'static str,
        second: &'static str,
    },
    SkillsGapTrend {
        skills_gap: u8,
        expected: u8,
    },
    HiringScoreMismatch {
        recommendation: HiringRecommendation,
        overall_score: u8,
        red_flags: usize,
    },
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyWarning::OverlappingSkills {
                skill,
                first,
                second,
            } => write!(f, "skill '{skill}' appears in both {first} and {second}"),
            ConsistencyWarning::SkillsGapTrend {
                skills_gap,
                expected,
            } => write!(
                f,
                "skillsGap {skills_gap} is far from the {expected} implied by matched/missing skills"
            ),
            ConsistencyWarning::HiringScoreMismatch {
                recommendation,
                overall_score,
                red_flags,
            } => write!(
                f,
                "'{}' does not fit overallScore {overall_score} with {red_flags} red flag(s)",
                recommendation.as_str()
            ),
        }
    }
}

/// Runs the advisory cross-field rules over an already-valid result.
pub fn check_consistency(result: &AnalysisResult) -> Vec<ConsistencyWarning> {
    let mut warnings = Vec::new();
    let skills = &result.skills_match;

    let sets: [(&'static str, &[String]); 3] = [
        ("matched", skills.matched.as_slice()),
        ("missing", skills.missing.as_slice()),
        ("additional", skills.additional.as_slice()),
    ];
    for (i, &(first, left)) in sets.iter().enumerate() {
        let left: HashSet<String> = left.iter().map(|s| s.to_lowercase()).collect();
        for &(second, right) in &sets[i + 1..] {
            for skill in right {
                if left.contains(&skill.to_lowercase()) {
                    warnings.push(ConsistencyWarning::OverlappingSkills {
                        skill: skill.clone(),
                        first,
                        second,
                    });
                }
            }
        }
    }

    let considered = skills.matched.len() + skills.missing.len();
    if considered > 0 {
        let expected = (skills.missing.len() as f64 / considered as f64 * 100.0).round() as u8;
        if skills.skills_gap.abs_diff(expected) > SKILLS_GAP_TOLERANCE {
            warnings.push(ConsistencyWarning::SkillsGapTrend {
                skills_gap: skills.skills_gap,
                expected,
            });
        }
    }

    let score = result.overall_score;
    let has_red_flags = !result.red_flags.is_empty();
    let fits = match result.hiring_recommendation {
        HiringRecommendation::StrongHire => score >= STRONG_HIRE_MIN_SCORE,
        HiringRecommendation::Hire => score >= HIRE_MIN_SCORE,
        HiringRecommendation::Maybe => score < STRONG_HIRE_MIN_SCORE || has_red_flags,
        HiringRecommendation::NoHire => score < NO_HIRE_CEILING || has_red_flags,
    };
    if !fits {
        warnings.push(ConsistencyWarning::HiringScoreMismatch {
            recommendation: result.hiring_recommendation,
            overall_score: score,
            red_flags: result.red_flags.len(),
        });
    }

    warnings
}

// ────────────────────────────────────────────────────────────────────────────
// Schema descriptor for structured generation
// ────────────────────────────────────────────────────────────────────────────

/// JSON Schema describing the contract, handed to the reasoning provider as
/// its output schema. Enum tables are shared with `validate`.
pub fn json_schema() -> Value {
    let score = json!({ "type": "integer", "minimum": 0, "maximum": 100 });
    let strings = json!({ "type": "array", "items": { "type": "string" } });
    let years = json!({ "type": "number", "minimum": 0 });
    let text = json!({ "type": "string" });

    let mut competencies = Map::new();
    for key in COMPETENCIES {
        competencies.insert(key.to_string(), score.clone());
    }

    json!({
        "type": "object",
        "properties": {
            "overallScore": score,
            "skillsMatch": {
                "type": "object",
                "properties": {
                    "matched": strings,
                    "missing": strings,
                    "additional": strings,
                    "skillsGap": score,
                },
                "required": ["matched", "missing", "additional", "skillsGap"],
            },
            "experienceAnalysis": {
                "type": "object",
                "properties": {
                    "yearsOfExperience": years,
                    "relevantExperience": years,
                    "seniorityLevel": { "type": "string", "enum": SeniorityLevel::WIRE_NAMES },
                    "keyAchievements": strings,
                    "careerProgression": text,
                    "industryExperience": strings,
                },
                "required": [
                    "yearsOfExperience", "relevantExperience", "seniorityLevel",
                    "keyAchievements", "careerProgression", "industryExperience",
                ],
            },
            "qualifications": {
                "type": "object",
                "properties": {
                    "education": strings,
                    "certifications": strings,
                    "languages": strings,
                    "educationMatch": score,
                },
                "required": ["education", "certifications", "languages", "educationMatch"],
            },
            "recommendations": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "enum": RecommendationCategory::WIRE_NAMES },
                        "priority": { "type": "string", "enum": Priority::WIRE_NAMES },
                        "suggestion": text,
                        "impact": text,
                    },
                    "required": ["category", "priority", "suggestion", "impact"],
                },
            },
            "strengths": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "area": text,
                        "description": text,
                        "relevance": score,
                    },
                    "required": ["area", "description", "relevance"],
                },
            },
            "weaknesses": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "area": text,
                        "description": text,
                        "severity": { "type": "string", "enum": Severity::WIRE_NAMES },
                        "improvement": text,
                    },
                    "required": ["area", "description", "severity", "improvement"],
                },
            },
            "atsScore": score,
            "atsIssues": strings,
            "culturalFit": score,
            "culturalFitFactors": strings,
            "summary": { "type": "string", "minLength": 1 },
            "hiringRecommendation": { "type": "string", "enum": HiringRecommendation::WIRE_NAMES },
            "salaryRange": {
                "type": "object",
                "properties": {
                    "min": { "type": "integer", "exclusiveMinimum": 0 },
                    "max": { "type": "integer", "exclusiveMinimum": 0 },
                    "currency": { "type": "string", "pattern": "^[A-Z]{3}$" },
                },
                "required": ["min", "max", "currency"],
            },
            "interviewFocus": { "type": "array", "items": { "type": "string" }, "minItems": 1 },
            "redFlags": strings,
            "competencyScores": {
                "type": "object",
                "properties": competencies,
                "required": COMPETENCIES,
            },
        },
        "required": [
            "overallScore", "skillsMatch", "experienceAnalysis", "qualifications",
            "recommendations", "strengths", "weaknesses", "atsScore", "atsIssues",
            "culturalFit", "culturalFitFactors", "summary", "hiringRecommendation",
            "salaryRange", "interviewFocus", "redFlags", "competencyScores",
        ],
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
