//! Ranking Orchestrator — runs the full pipeline over a store snapshot and
//! sorts the analyses by overall score.

use tracing::{info, warn};

use crate::analysis::feedback::generate_feedback;
use crate::analysis::matcher::match_skills;
use crate::analysis::scoring::overall_match_score;
use crate::analysis::skills::extract_skills;
use crate::errors::AppError;
use crate::extract;
use crate::llm_client::Oracle;
use crate::models::resume::ResumeAnalysis;
use crate::store::StoredResume;

/// Analyzes every resume in the snapshot against the job description and
/// returns the analyses sorted by `overall_match_score`, best first.
///
/// A resume whose text extraction fails is skipped with a logged reason; one
/// corrupt file must not abort the batch. Oracle failures never fail a
/// resume — they degrade inside the extraction and feedback components.
pub async fn rank(
    oracle: &dyn Oracle,
    job_description: &str,
    resumes: &[StoredResume],
) -> Result<Vec<ResumeAnalysis>, AppError> {
    if resumes.is_empty() {
        return Err(AppError::Validation(
            "No resumes uploaded. Please upload resumes first.".to_string(),
        ));
    }

    // Job skills are extracted once and shared across all resumes.
    let job_skills = extract_skills(oracle, job_description).await;
    info!(
        "extracted {} job skills; analyzing {} resumes",
        job_skills.len(),
        resumes.len()
    );

    let mut analyses = Vec::with_capacity(resumes.len());

    for resume in resumes {
        let resume_text = match extract::extract_text(&resume.file_path) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    resume_id = %resume.id,
                    filename = %resume.filename,
                    "skipping resume, text extraction failed: {e}"
                );
                continue;
            }
        };

        let resume_skills = extract_skills(oracle, &resume_text).await;
        let skill_matches = match_skills(&resume_skills, &job_skills);
        let score = overall_match_score(&skill_matches);
        let bundle = generate_feedback(oracle, &resume_text, job_description, &skill_matches).await;

        analyses.push(ResumeAnalysis {
            resume_id: resume.id,
            filename: resume.filename.clone(),
            extracted_skills: resume_skills,
            job_skills: job_skills.clone(),
            skill_matches,
            overall_match_score: score,
            feedback: bundle.feedback,
            strengths: bundle.strengths,
            improvement_areas: bundle.improvement_areas,
        });
    }

    sort_by_score_descending(&mut analyses);
    Ok(analyses)
}

/// Stable sort, best score first. Equal scores keep their input order.
fn sort_by_score_descending(analyses: &mut [ResumeAnalysis]) {
    analyses.sort_by(|a, b| {
        b.overall_match_score
            .partial_cmp(&a.overall_match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    struct ScriptedOracle(&'static str);

    #[async_trait]
    impl Oracle for ScriptedOracle {
        async fn complete(
            &self,
            _system: &str,
            _prompt: &str,
            _temperature: f32,
        ) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    fn stored(filename: &str, file_path: &str) -> StoredResume {
        StoredResume {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            file_path: file_path.into(),
            uploaded_at: Utc::now(),
        }
    }

    fn analysis(filename: &str, score: f64) -> ResumeAnalysis {
        ResumeAnalysis {
            resume_id: Uuid::new_v4(),
            filename: filename.to_string(),
            extracted_skills: vec![],
            job_skills: vec![],
            skill_matches: vec![],
            overall_match_score: score,
            feedback: String::new(),
            strengths: vec![],
            improvement_areas: vec![],
        }
    }

    #[tokio::test]
    async fn test_rank_empty_input_is_a_validation_error() {
        let oracle = ScriptedOracle(r#"{"skills": []}"#);
        let result = rank(&oracle, "job text", &[]).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rank_skips_resumes_that_fail_extraction() {
        let oracle = ScriptedOracle(r#"{"skills": []}"#);
        let resumes = vec![
            stored("gone.pdf", "does_not_exist.pdf"),
            stored("bad_format.txt", "does_not_exist.txt"),
        ];

        // Both extractions fail; the batch itself must still succeed.
        let analyses = rank(&oracle, "job text", &resumes).await.unwrap();
        assert!(analyses.is_empty());
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let mut analyses = vec![
            analysis("first_high.pdf", 0.9),
            analysis("low.pdf", 0.3),
            analysis("second_high.pdf", 0.9),
        ];

        sort_by_score_descending(&mut analyses);

        let names: Vec<&str> = analyses.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(names, vec!["first_high.pdf", "second_high.pdf", "low.pdf"]);
    }

    #[test]
    fn test_sort_handles_nan_without_panicking() {
        let mut analyses = vec![analysis("a.pdf", f64::NAN), analysis("b.pdf", 0.5)];
        sort_by_score_descending(&mut analyses);
        assert_eq!(analyses.len(), 2);
    }
}
