//! Score Aggregator — reduces a match-record list to a single score in [0, 1].

use crate::models::resume::SkillMatch;

/// Mean `match_score` over job-description records.
///
/// Resume-only records do not count toward the score; an empty job skill set
/// is "no signal", not an error, and scores exactly 0.0.
pub fn overall_match_score(matches: &[SkillMatch]) -> f64 {
    let job_matches: Vec<&SkillMatch> = matches.iter().filter(|m| m.in_job_description).collect();

    if job_matches.is_empty() {
        return 0.0;
    }

    let total: f64 = job_matches.iter().map(|m| m.match_score).sum();
    total / job_matches.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matcher::{FULL_MATCH_SCORE, MISSING_SCORE, RESUME_ONLY_SCORE};

    fn record(skill: &str, in_resume: bool, in_job: bool, score: f64) -> SkillMatch {
        SkillMatch {
            skill: skill.to_string(),
            in_resume,
            in_job_description: in_job,
            match_score: score,
        }
    }

    #[test]
    fn test_all_job_skills_matched_scores_one() {
        let matches = vec![
            record("Python", true, true, FULL_MATCH_SCORE),
            record("SQL", true, true, FULL_MATCH_SCORE),
        ];
        assert_eq!(overall_match_score(&matches), 1.0);
    }

    #[test]
    fn test_half_of_job_skills_matched_scores_half() {
        let matches = vec![
            record("Python", true, true, FULL_MATCH_SCORE),
            record("Java", false, true, MISSING_SCORE),
            record("Excel", true, false, RESUME_ONLY_SCORE),
        ];
        // Excel is resume-only and must not affect the mean.
        assert_eq!(overall_match_score(&matches), 0.5);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(overall_match_score(&[]), 0.0);
    }

    #[test]
    fn test_no_job_description_records_scores_zero() {
        let matches = vec![
            record("Excel", true, false, RESUME_ONLY_SCORE),
            record("Word", true, false, RESUME_ONLY_SCORE),
        ];
        assert_eq!(overall_match_score(&matches), 0.0);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let matches = vec![
            record("A", true, true, FULL_MATCH_SCORE),
            record("B", false, true, MISSING_SCORE),
            record("C", false, true, MISSING_SCORE),
            record("D", true, true, FULL_MATCH_SCORE),
        ];
        let score = overall_match_score(&matches);
        assert!((0.0..=1.0).contains(&score));
    }
}
