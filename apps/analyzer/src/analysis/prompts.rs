// Prompt constants and the prompt builder for resume analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::STRUCTURED_OUTPUT_INSTRUCTION;

/// System prompt for resume analysis.
pub const ANALYSIS_SYSTEM: &str = "You are an expert HR professional and resume analyzer \
    with 15+ years of experience in technical recruiting. \
    You assess candidates objectively against the job description you are given \
    and never invent facts that are not present in the resume.";

/// Opening line of every analysis prompt.
pub const ANALYSIS_PREAMBLE: &str = "Analyze the following resume against the job description \
    and provide a comprehensive, detailed analysis.";

/// The nine dimensions the model must address, in order.
pub const ANALYSIS_DIMENSIONS: [&str; 9] = [
    "Provide detailed scoring across all dimensions (0-100 scale)",
    "Identify specific skills gaps and provide actionable recommendations",
    "Assess candidate seniority level and career progression",
    "Evaluate ATS compatibility and suggest improvements",
    "Provide salary range estimation based on experience and location",
    "Identify potential red flags or concerns",
    "Suggest specific interview focus areas",
    "Rate competencies across multiple dimensions",
    "Provide hiring recommendation with clear reasoning",
];

const ANALYSIS_GUIDANCE: &str = "Be thorough, objective, and provide specific, actionable feedback \
    that would help both job seekers and recruiters make informed decisions. \
    Consider industry standards, current market conditions, and best practices in technical hiring.";

const ANALYSIS_FOCUS: [&str; 6] = [
    "Technical skill alignment and depth",
    "Experience relevance and progression",
    "Leadership and soft skills indicators",
    "Cultural fit based on company values",
    "Potential for growth and learning",
    "Risk factors and mitigation strategies",
];

/// Renders the analysis instruction for the reasoning model.
///
/// Pure: identical inputs always produce the identical string. The CUSTOM
/// REQUIREMENTS section appears only when `custom_requirements` has
/// non-whitespace content.
pub fn build_analysis_prompt(
    resume_text: &str,
    job_description: &str,
    custom_requirements: Option<&str>,
) -> String {
    let mut prompt = String::with_capacity(resume_text.len() + job_description.len() + 2048);

    prompt.push_str(ANALYSIS_PREAMBLE);
    prompt.push_str("\n\nRESUME:\n");
    prompt.push_str(resume_text.trim());
    prompt.push_str("\n\nJOB DESCRIPTION:\n");
    prompt.push_str(job_description.trim());

    if let Some(custom) = custom_requirements.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str("\n\nCUSTOM REQUIREMENTS:\n");
        prompt.push_str(custom);
    }

    prompt.push_str("\n\nANALYSIS INSTRUCTIONS:\n");
    for (i, dimension) in ANALYSIS_DIMENSIONS.iter().enumerate() {
        prompt.push_str(&format!("{}. {dimension}\n", i + 1));
    }

    prompt.push('\n');
    prompt.push_str(ANALYSIS_GUIDANCE);
    prompt.push_str("\n\nFocus on:\n");
    for focus in ANALYSIS_FOCUS {
        prompt.push_str(&format!("- {focus}\n"));
    }

    prompt.push('\n');
    prompt.push_str(STRUCTURED_OUTPUT_INSTRUCTION);
    prompt
}
