//! Skill Matcher — reconciles a resume skill set against a job skill set.
//!
//! Pure and deterministic. Output ordering is a contract: job-derived records
//! first (in job-skill order), then resume-only records (in resume-skill
//! order). Feedback construction relies on this for deterministic display.

use std::collections::HashSet;

use crate::models::resume::{Skill, SkillMatch};

/// Skill present in both the resume and the job description.
pub const FULL_MATCH_SCORE: f64 = 1.0;
/// Job-description skill absent from the resume.
pub const MISSING_SCORE: f64 = 0.0;
/// Resume-only skill — partial credit, it may still be relevant.
pub const RESUME_ONLY_SCORE: f64 = 0.5;

/// Matches resume skills against job-description skills.
///
/// Name comparison is case-insensitive; the emitted `skill` field keeps the
/// casing of whichever side introduced the record. A skill present in both
/// sets appears exactly once, as a job-description record.
pub fn match_skills(resume_skills: &[Skill], job_skills: &[Skill]) -> Vec<SkillMatch> {
    let resume_names: HashSet<String> = resume_skills
        .iter()
        .map(|s| s.name.to_lowercase())
        .collect();
    let job_names: HashSet<String> = job_skills.iter().map(|s| s.name.to_lowercase()).collect();

    let mut matches = Vec::with_capacity(job_skills.len() + resume_skills.len());

    for job_skill in job_skills {
        let in_resume = resume_names.contains(&job_skill.name.to_lowercase());
        matches.push(SkillMatch {
            skill: job_skill.name.clone(),
            in_resume,
            in_job_description: true,
            match_score: if in_resume {
                FULL_MATCH_SCORE
            } else {
                MISSING_SCORE
            },
        });
    }

    for resume_skill in resume_skills {
        if !job_names.contains(&resume_skill.name.to_lowercase()) {
            matches.push(SkillMatch {
                skill: resume_skill.name.clone(),
                in_resume: true,
                in_job_description: false,
                match_score: RESUME_ONLY_SCORE,
            });
        }
    }

    matches
}
