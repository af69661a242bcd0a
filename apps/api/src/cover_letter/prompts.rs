// Prompt constants for cover letter generation.
// Defaults fill any optional field that is absent or empty.

use crate::cover_letter::models::{non_empty, ValidatedRequest};

/// System instruction identifying the assistant's role.
pub const COVER_LETTER_SYSTEM: &str = "You are a professional cover letter writer \
    who creates compelling, personalized cover letters.";

pub const DEFAULT_EXPERIENCE_LEVEL: &str = "mid-level";
pub const DEFAULT_SKILLS: &str = "React.js, Next.js";
pub const DEFAULT_YEARS_OF_EXPERIENCE: &str = "3+ years";
pub const DEFAULT_ACHIEVEMENTS: &str = "Successfully delivered multiple web applications";
pub const DEFAULT_SOFT_SKILLS: &str = "Strong communication, teamwork, and remote work experience";
pub const DEFAULT_MOTIVATION: &str = "Excited about the opportunity to join your innovative team";

pub const TONE_INSTRUCTION: &str =
    "The tone should be confident, friendly, and aligned with the company's mission.";

/// Builds the user prompt. Pure: the same request always yields the same string.
///
/// Values are interpolated verbatim; nothing in a user value is re-scanned for
/// placeholders.
pub fn build_prompt(request: &ValidatedRequest<'_>) -> String {
    let fields = request.fields;
    let or_default = |value: &Option<String>, default: &'static str| -> String {
        non_empty(value).unwrap_or(default).to_string()
    };

    format!(
        "Write a personalized and professional cover letter for a {job_title} position \
based on the job description below. I am applying as a {experience_level} developer \
with experience in {skills}.

My background:
- {years} of experience
- {achievements}
- {soft_skills}
- {motivation}

Job description:
{job_description}

{tone}",
        job_title = request.job_title,
        experience_level = or_default(&fields.experience_level, DEFAULT_EXPERIENCE_LEVEL),
        skills = or_default(&fields.skills, DEFAULT_SKILLS),
        years = or_default(&fields.years_of_experience, DEFAULT_YEARS_OF_EXPERIENCE),
        achievements = or_default(&fields.achievements, DEFAULT_ACHIEVEMENTS),
        soft_skills = or_default(&fields.soft_skills, DEFAULT_SOFT_SKILLS),
        motivation = or_default(&fields.motivation, DEFAULT_MOTIVATION),
        job_description = request.job_description,
        tone = TONE_INSTRUCTION,
    )
}
