//! Wire-level data models for the analysis pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single skill derived from free text by the skill extractor.
/// `confidence` is the oracle's self-reported relevance in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub confidence: f64,
}

/// Confidence assigned when the oracle returns a bare skill name instead of
/// a `{name, confidence}` pair.
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// One reconciled skill between a resume and a job description.
///
/// Every job-description skill yields exactly one record with
/// `in_job_description = true`; every resume skill not covered by a
/// job-description record yields one record with `in_job_description = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    pub in_resume: bool,
    pub in_job_description: bool,
    pub match_score: f64,
}

/// Full analysis of one resume against a job description. Assembled once per
/// ranking request and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub resume_id: Uuid,
    pub filename: String,
    pub extracted_skills: Vec<Skill>,
    pub job_skills: Vec<Skill>,
    pub skill_matches: Vec<SkillMatch>,
    pub overall_match_score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
}

/// Response body for the analyze endpoint: resumes sorted by
/// `overall_match_score`, best match first.
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub resumes: Vec<ResumeAnalysis>,
}
