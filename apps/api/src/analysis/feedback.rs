//! Feedback Generator — turns a match report into a qualitative narrative.
//!
//! Terminal error boundary: any oracle or parse failure collapses to the
//! fixed fallback bundle. Nothing past this module ever sees the failure.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::prompts::{FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM};
use crate::llm_client::{parse_json_response, Oracle};
use crate::models::resume::SkillMatch;

/// Low-randomness sampling for feedback generation.
const FEEDBACK_TEMPERATURE: f32 = 0.2;

/// Narrative shown when feedback generation fails for any reason.
pub const FALLBACK_FEEDBACK: &str = "Unable to generate feedback at this time.";

/// Oracle-produced feedback: one paragraph plus strength and improvement
/// lists. All three keys are required; a reply missing any of them is
/// treated as a failed call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackBundle {
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
}

impl FeedbackBundle {
    pub fn fallback() -> Self {
        Self {
            feedback: FALLBACK_FEEDBACK.to_string(),
            strengths: Vec::new(),
            improvement_areas: Vec::new(),
        }
    }
}

/// Generates feedback for one resume. Never fails; degraded calls return
/// `FeedbackBundle::fallback()`.
pub async fn generate_feedback(
    oracle: &dyn Oracle,
    resume_text: &str,
    job_text: &str,
    matches: &[SkillMatch],
) -> FeedbackBundle {
    let (matched, missing, extra) = partition_matches(matches);

    let prompt = FEEDBACK_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_text}", job_text)
        .replace("{matched_skills}", &render_skill_list(&matched))
        .replace("{missing_skills}", &render_skill_list(&missing))
        .replace("{extra_skills}", &render_skill_list(&extra));

    let raw = match oracle
        .complete(FEEDBACK_SYSTEM, &prompt, FEEDBACK_TEMPERATURE)
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            warn!("feedback call failed, using fallback bundle: {e}");
            return FeedbackBundle::fallback();
        }
    };

    match parse_json_response::<FeedbackBundle>(&raw) {
        Ok(bundle) => bundle,
        Err(e) => {
            warn!("feedback reply was unparseable, using fallback bundle: {e}");
            FeedbackBundle::fallback()
        }
    }
}

/// Splits match records into matched / missing / extra skill name lists for
/// prompt construction.
pub fn partition_matches(matches: &[SkillMatch]) -> (Vec<&str>, Vec<&str>, Vec<&str>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut extra = Vec::new();

    for m in matches {
        match (m.in_resume, m.in_job_description) {
            (true, true) => matched.push(m.skill.as_str()),
            (false, true) => missing.push(m.skill.as_str()),
            (true, false) => extra.push(m.skill.as_str()),
            (false, false) => {}
        }
    }

    (matched, missing, extra)
}

/// Comma-joins skill names, or the literal "None" when the list is empty.
fn render_skill_list(names: &[&str]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

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

    /// Captures the prompt it receives, then fails the call.
    struct PromptCapturingOracle(std::sync::Mutex<Option<String>>);

    #[async_trait]
    impl Oracle for PromptCapturingOracle {
        async fn complete(
            &self,
            _system: &str,
            prompt: &str,
            _temperature: f32,
        ) -> Result<String, LlmError> {
            *self.0.lock().unwrap() = Some(prompt.to_string());
            Err(LlmError::EmptyContent)
        }
    }

    fn record(skill: &str, in_resume: bool, in_job: bool) -> SkillMatch {
        SkillMatch {
            skill: skill.to_string(),
            in_resume,
            in_job_description: in_job,
            match_score: 0.0,
        }
    }

    #[test]
    fn test_partition_splits_three_ways() {
        let matches = vec![
            record("Python", true, true),
            record("Java", false, true),
            record("Excel", true, false),
        ];
        let (matched, missing, extra) = partition_matches(&matches);
        assert_eq!(matched, vec!["Python"]);
        assert_eq!(missing, vec!["Java"]);
        assert_eq!(extra, vec!["Excel"]);
    }

    #[test]
    fn test_render_skill_list_empty_is_none_placeholder() {
        assert_eq!(render_skill_list(&[]), "None");
        assert_eq!(render_skill_list(&["Python", "SQL"]), "Python, SQL");
    }

    #[tokio::test]
    async fn test_generate_feedback_parses_oracle_bundle() {
        let oracle = ScriptedOracle(
            r#"{"feedback": "Solid match.", "strengths": ["Python depth"], "improvement_areas": ["Add Java"]}"#,
        );
        let bundle = generate_feedback(&oracle, "resume", "job", &[]).await;
        assert_eq!(bundle.feedback, "Solid match.");
        assert_eq!(bundle.strengths, vec!["Python depth"]);
        assert_eq!(bundle.improvement_areas, vec!["Add Java"]);
    }

    #[tokio::test]
    async fn test_generate_feedback_missing_key_falls_back() {
        // "feedback" key absent — the whole bundle is rejected.
        let oracle = ScriptedOracle(r#"{"strengths": [], "improvement_areas": []}"#);
        let bundle = generate_feedback(&oracle, "resume", "job", &[]).await;
        assert_eq!(bundle.feedback, FALLBACK_FEEDBACK);
        assert!(bundle.strengths.is_empty());
    }

    #[tokio::test]
    async fn test_generate_feedback_non_json_falls_back() {
        let oracle = ScriptedOracle("Here is my feedback: looks great!");
        let bundle = generate_feedback(&oracle, "resume", "job", &[]).await;
        assert_eq!(bundle.feedback, FALLBACK_FEEDBACK);
    }

    #[tokio::test]
    async fn test_prompt_embeds_lists_and_none_placeholder() {
        let oracle = PromptCapturingOracle(std::sync::Mutex::new(None));
        let matches = vec![record("Python", true, true), record("Java", false, true)];

        let bundle = generate_feedback(&oracle, "resume body", "job body", &matches).await;
        assert_eq!(bundle.feedback, FALLBACK_FEEDBACK);

        let prompt = oracle.0.lock().unwrap().take().unwrap();
        assert!(prompt.contains("resume body"));
        assert!(prompt.contains("job body"));
        assert!(prompt.contains("Python"));
        assert!(prompt.contains("Java"));
        // No extra skills — the placeholder must appear.
        assert!(prompt.contains("None"));
    }
}
