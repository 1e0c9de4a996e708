// All LLM prompt constants for the analysis pipeline.

/// System prompt for skill extraction — enforces JSON-only output.
pub const SKILL_EXTRACTION_SYSTEM: &str =
    "You are a helpful assistant that extracts skills from resumes and job descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Skill extraction prompt template. Replace `{text}` before sending.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract technical skills, soft skills, and competencies from the following text.
Focus on skills that would be relevant to a job application.

Text:
{text}

Return the results as a JSON object with the following structure:
{
  "skills": [
    {"name": "skill name", "confidence": 0.95}
  ]
}

Where confidence is a number between 0 and 1 reflecting how confident you are
that this is a relevant skill."#;

/// System prompt for feedback generation — enforces JSON-only output.
pub const FEEDBACK_SYSTEM: &str =
    "You are a helpful assistant that provides constructive feedback on resumes. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Feedback prompt template.
/// Replace: {resume_text}, {job_text}, {matched_skills}, {missing_skills},
/// {extra_skills}. Empty skill lists are rendered as the literal "None".
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Analyze this resume against the job description and provide constructive feedback.

Resume:
{resume_text}

Job Description:
{job_text}

Skills that match the job description:
{matched_skills}

Skills in the job description but missing from the resume:
{missing_skills}

Additional skills in the resume not mentioned in the job description:
{extra_skills}

Please provide:
1. A paragraph of overall feedback on how well the resume matches the job description
2. 3-5 key strengths of this candidate for this specific role
3. 2-4 areas where the candidate could improve their resume to better match this job

Return the results as a JSON object with the following structure:
{
  "feedback": "overall feedback paragraph",
  "strengths": ["strength 1", "strength 2"],
  "improvement_areas": ["area 1", "area 2"]
}"#;
