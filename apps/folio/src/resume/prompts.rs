// Prompt constants for the resume assessment request.

/// Default model for resume assessment.
pub const DEFAULT_ASSESSMENT_MODEL: &str = "gpt-4o";

/// Resume assessment prompt template. Replace `{resume_text}` before sending.
///
/// The four numbered sections are requested from the service but never parsed here.
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = "Analyze the following resume text and provide:
1. Skill Detection (List of technical and soft skills)
2. ATS Score (0-100)
3. Job Suggestions (Top 3 roles)
4. Improvement Tips

Resume Content:
{resume_text}
";
