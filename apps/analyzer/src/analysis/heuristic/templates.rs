//! Canonical tier templates returned by the heuristic classifier.
//!
//! Each template is internally consistent: disjoint skill sets, a skills gap
//! that tracks the matched/missing ratio, and a hiring recommendation that
//! fits the overall score. Bump `TEMPLATE_VERSION` whenever any value changes.

use crate::analysis::contract::{
    AnalysisResult, CompetencyScores, ExperienceAnalysis, HiringRecommendation, Priority,
    Qualifications, Recommendation, RecommendationCategory, SalaryRange, SeniorityLevel, Severity,
    SkillsMatch, Strength, Weakness,
};

pub const TEMPLATE_VERSION: u32 = 1;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn recommendation(
    category: RecommendationCategory,
    priority: Priority,
    suggestion: &str,
    impact: &str,
) -> Recommendation {
    Recommendation {
        category,
        priority,
        suggestion: suggestion.to_string(),
        impact: impact.to_string(),
    }
}

fn strength(area: &str, description: &str, relevance: u8) -> Strength {
    Strength {
        area: area.to_string(),
        description: description.to_string(),
        relevance,
    }
}

fn weakness(area: &str, description: &str, severity: Severity, improvement: &str) -> Weakness {
    Weakness {
        area: area.to_string(),
        description: description.to_string(),
        severity,
        improvement: improvement.to_string(),
    }
}

/// Senior/Lead tier: score 92, "Strong Hire".
pub fn senior_template() -> AnalysisResult {
    AnalysisResult {
        overall_score: 92,
        skills_match: SkillsMatch {
            matched: strings(&[
                "React",
                "TypeScript",
                "Node.js",
                "Python",
                "AWS",
                "Docker",
                "Kubernetes",
                "GraphQL",
                "PostgreSQL",
                "Leadership",
            ]),
            missing: strings(&["Terraform", "Go"]),
            additional: strings(&["Java", "Azure", "Elasticsearch", "System Design", "Mentoring"]),
            skills_gap: 15,
        },
        experience_analysis: ExperienceAnalysis {
            years_of_experience: 12.0,
            relevant_experience: 11.0,
            seniority_level: SeniorityLevel::Senior,
            key_achievements: strings(&[
                "Led a team of 8 engineers building features used by 2M+ developers",
                "Architected a real-time collaboration system reducing onboarding time by 45%",
                "Reduced system latency by 60% through performance optimization",
                "Mentored 12 junior engineers, 8 of whom were promoted",
                "Helped scale an early-stage startup from 0 to 1M users",
            ]),
            career_progression:
                "Excellent progression from startup to large-scale tech companies with increasing responsibilities"
                    .to_string(),
            industry_experience: strings(&["Big Tech", "Fintech", "Cloud Computing", "Social Media"]),
        },
        qualifications: Qualifications {
            education: strings(&[
                "Master of Science in Computer Science",
                "Bachelor of Science in Software Engineering",
            ]),
            certifications: strings(&[
                "AWS Solutions Architect Professional",
                "Google Cloud Professional Developer",
                "Certified Kubernetes Administrator",
            ]),
            languages: strings(&["English (Native)", "Spanish (Professional)"]),
            education_match: 95,
        },
        recommendations: vec![
            recommendation(
                RecommendationCategory::Skills,
                Priority::Medium,
                "Consider adding Terraform experience for infrastructure as code",
                "Would strengthen DevOps capabilities and align with modern cloud practices",
            ),
            recommendation(
                RecommendationCategory::Achievements,
                Priority::Low,
                "Highlight specific metrics from large-scale product work",
                "Would demonstrate the scale and impact of past work",
            ),
        ],
        strengths: vec![
            strength(
                "Technical Leadership",
                "Proven ability to lead engineering teams and mentor junior developers",
                95,
            ),
            strength(
                "Scale Experience",
                "Experience building systems serving millions of users",
                90,
            ),
            strength(
                "Full Stack Expertise",
                "Deep knowledge across frontend, backend, and infrastructure",
                88,
            ),
        ],
        weaknesses: vec![weakness(
            "Infrastructure as Code",
            "Limited mention of Terraform or infrastructure automation tools",
            Severity::Minor,
            "Gain hands-on experience with Terraform and infrastructure automation",
        )],
        ats_score: 88,
        ats_issues: strings(&[
            "Could benefit from more keyword optimization",
            "Consider adding a skills section with bullet points",
        ]),
        cultural_fit: 90,
        cultural_fit_factors: strings(&[
            "Strong collaboration skills",
            "Mentoring experience",
            "Startup and big tech experience",
        ]),
        summary: "Exceptional senior candidate with outstanding technical leadership experience. \
            Demonstrates strong progression with a proven ability to scale teams and systems, \
            and deep full-stack expertise."
            .to_string(),
        hiring_recommendation: HiringRecommendation::StrongHire,
        salary_range: SalaryRange {
            min: 180_000,
            max: 250_000,
            currency: "USD".to_string(),
        },
        interview_focus: strings(&[
            "System design and architecture",
            "Leadership and mentoring approach",
            "Scaling challenges and solutions",
            "Technical decision-making process",
        ]),
        red_flags: Vec::new(),
        competency_scores: CompetencyScores {
            technical: 95,
            leadership: 92,
            communication: 88,
            problem_solving: 90,
            teamwork: 89,
            adaptability: 87,
        },
    }
}

/// Entry/Junior tier: score 72, "Hire".
pub fn entry_template() -> AnalysisResult {
    AnalysisResult {
        overall_score: 72,
        skills_match: SkillsMatch {
            matched: strings(&["JavaScript", "React", "Node.js", "Python", "HTML", "CSS", "Git"]),
            missing: strings(&["TypeScript", "AWS", "Docker", "Testing Frameworks", "CI/CD"]),
            additional: strings(&["Java", "C++", "MongoDB"]),
            skills_gap: 45,
        },
        experience_analysis: ExperienceAnalysis {
            years_of_experience: 1.0,
            relevant_experience: 0.5,
            seniority_level: SeniorityLevel::Entry,
            key_achievements: strings(&[
                "Built a personal portfolio website with React and Node.js",
                "Won a university hackathon award",
                "Improved test coverage by 15% during an internship",
            ]),
            career_progression:
                "Recent graduate with strong academic performance and relevant project experience"
                    .to_string(),
            industry_experience: strings(&["Academic Projects", "Internship"]),
        },
        qualifications: Qualifications {
            education: strings(&["Bachelor of Science in Computer Science"]),
            certifications: Vec::new(),
            languages: strings(&["English (Native)"]),
            education_match: 85,
        },
        recommendations: vec![
            recommendation(
                RecommendationCategory::Skills,
                Priority::High,
                "Learn TypeScript and modern testing frameworks (Jest, Cypress)",
                "Essential for professional development work and code quality",
            ),
            recommendation(
                RecommendationCategory::Experience,
                Priority::High,
                "Contribute to open source projects to gain real-world experience",
                "Would demonstrate ability to work on larger codebases and collaborate with others",
            ),
            recommendation(
                RecommendationCategory::Skills,
                Priority::Medium,
                "Learn cloud basics (AWS fundamentals) and containerization (Docker)",
                "Modern development practices essential for most tech roles",
            ),
        ],
        strengths: vec![
            strength(
                "Academic Excellence",
                "Strong academic record and relevant coursework in computer science fundamentals",
                80,
            ),
            strength(
                "Project Experience",
                "Good variety of personal and academic projects demonstrating practical skills",
                75,
            ),
            strength(
                "Learning Ability",
                "Quick learner with hackathon success and strong academic performance",
                85,
            ),
        ],
        weaknesses: vec![
            weakness(
                "Professional Experience",
                "Limited professional software development experience",
                Severity::Major,
                "Seek internships, contribute to open source, or build more complex projects",
            ),
            weakness(
                "Modern Development Practices",
                "Missing experience with testing, CI/CD, and cloud technologies",
                Severity::Major,
                "Learn testing frameworks and set up CI/CD for personal projects",
            ),
        ],
        ats_score: 75,
        ats_issues: strings(&[
            "Add more industry keywords",
            "Include a relevant coursework section",
            "Quantify project impacts",
        ]),
        cultural_fit: 78,
        cultural_fit_factors: strings(&[
            "Strong work ethic",
            "Collaborative team projects",
            "Volunteer experience",
        ]),
        summary: "Promising entry-level candidate with a strong academic background and good \
            foundational skills. Shows initiative through personal projects and would benefit \
            from mentorship and structured learning opportunities."
            .to_string(),
        hiring_recommendation: HiringRecommendation::Hire,
        salary_range: SalaryRange {
            min: 70_000,
            max: 90_000,
            currency: "USD".to_string(),
        },
        interview_focus: strings(&[
            "Problem-solving approach",
            "Learning agility",
            "Project deep-dive",
            "Technical fundamentals",
        ]),
        red_flags: Vec::new(),
        competency_scores: CompetencyScores {
            technical: 70,
            leadership: 45,
            communication: 72,
            problem_solving: 78,
            teamwork: 75,
            adaptability: 82,
        },
    }
}

/// Mid tier (default): score 78, "Hire".
pub fn mid_template() -> AnalysisResult {
    AnalysisResult {
        overall_score: 78,
        skills_match: SkillsMatch {
            matched: strings(&["React", "JavaScript", "Node.js", "TypeScript", "AWS"]),
            missing: strings(&["Python", "Docker", "Kubernetes"]),
            additional: strings(&["Vue.js", "MongoDB", "Express"]),
            skills_gap: 30,
        },
        experience_analysis: ExperienceAnalysis {
            years_of_experience: 5.0,
            relevant_experience: 4.0,
            seniority_level: SeniorityLevel::Mid,
            key_achievements: strings(&[
                "Improved application performance by 40% through optimization",
                "Implemented CI/CD pipelines reducing deployment time by 60%",
                "Developed applications serving 100K+ users",
                "Mentored junior developers and participated in code reviews",
            ]),
            career_progression:
                "Steady progression with increasing responsibilities and technical complexity"
                    .to_string(),
            industry_experience: strings(&["SaaS", "Startups"]),
        },
        qualifications: Qualifications {
            education: strings(&["Bachelor of Science in Computer Science"]),
            certifications: strings(&[
                "AWS Certified Developer Associate",
                "MongoDB Certified Developer",
            ]),
            languages: strings(&["English (Native)"]),
            education_match: 80,
        },
        recommendations: vec![
            recommendation(
                RecommendationCategory::Skills,
                Priority::High,
                "Add containerization experience with Docker and Kubernetes",
                "Essential for modern cloud-native development and deployment",
            ),
            recommendation(
                RecommendationCategory::Experience,
                Priority::Medium,
                "Highlight leadership experience and team collaboration",
                "Would strengthen candidacy for senior-level positions",
            ),
        ],
        strengths: vec![
            strength(
                "Full Stack Development",
                "Strong experience across frontend and backend technologies",
                85,
            ),
            strength(
                "Performance Optimization",
                "Proven track record of improving application performance",
                80,
            ),
        ],
        weaknesses: vec![weakness(
            "Containerization",
            "Missing Docker and Kubernetes experience",
            Severity::Major,
            "Learn containerization technologies and cloud-native deployment",
        )],
        ats_score: 82,
        ats_issues: strings(&[
            "Could add more technical keywords",
            "Consider adding a skills summary section",
        ]),
        cultural_fit: 75,
        cultural_fit_factors: strings(&[
            "Team collaboration",
            "Continuous learning",
            "Performance focus",
        ]),
        summary: "Solid mid-level candidate with good full-stack experience and a proven ability \
            to deliver results. Shows growth potential and would benefit from exposure to modern \
            DevOps practices."
            .to_string(),
        hiring_recommendation: HiringRecommendation::Hire,
        salary_range: SalaryRange {
            min: 95_000,
            max: 125_000,
            currency: "USD".to_string(),
        },
        interview_focus: strings(&[
            "Technical problem solving",
            "System design basics",
            "Team collaboration",
            "Growth mindset",
        ]),
        red_flags: Vec::new(),
        competency_scores: CompetencyScores {
            technical: 78,
            leadership: 60,
            communication: 72,
            problem_solving: 75,
            teamwork: 78,
            adaptability: 74,
        },
    }
}
