//! Skill Extractor — derives a normalized skill set from a block of free text.
//!
//! Any oracle or parse failure degrades to an empty skill set. "No skills" is
//! a valid, harmless outcome that downstream consumers must accept; it is
//! never surfaced as an error.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::analysis::prompts::{SKILL_EXTRACTION_PROMPT_TEMPLATE, SKILL_EXTRACTION_SYSTEM};
use crate::llm_client::{parse_json_response, Oracle};
use crate::models::resume::{Skill, DEFAULT_CONFIDENCE};

/// Low-randomness sampling for structured extraction.
const SKILL_EXTRACTION_TEMPERATURE: f32 = 0.1;

/// Expected oracle payload. Entries stay untyped here so one malformed entry
/// is dropped instead of discarding the whole list.
#[derive(Debug, Deserialize)]
struct SkillPayload {
    #[serde(default)]
    skills: Vec<Value>,
}

/// Extracts skills from `text` via the oracle.
///
/// The conversion from a failed call to the empty skill set happens here,
/// visibly, at the call boundary.
pub async fn extract_skills(oracle: &dyn Oracle, text: &str) -> Vec<Skill> {
    let prompt = SKILL_EXTRACTION_PROMPT_TEMPLATE.replace("{text}", text);

    let raw = match oracle
        .complete(SKILL_EXTRACTION_SYSTEM, &prompt, SKILL_EXTRACTION_TEMPERATURE)
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            warn!("skill extraction call failed, continuing with no skills: {e}");
            return Vec::new();
        }
    };

    match parse_json_response::<SkillPayload>(&raw) {
        Ok(payload) => normalize_skills(payload.skills),
        Err(e) => {
            warn!("skill extraction returned unparseable output, continuing with no skills: {e}");
            Vec::new()
        }
    }
}

/// Normalizes raw oracle skill entries:
/// - a `{name, confidence}` object is kept as-is
/// - a bare string name is upgraded with `DEFAULT_CONFIDENCE`
/// - anything else is dropped silently
pub fn normalize_skills(entries: Vec<Value>) -> Vec<Skill> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(name) => Some(Skill {
                name,
                confidence: DEFAULT_CONFIDENCE,
            }),
            Value::Object(map) => {
                let name = map.get("name")?.as_str()?.to_string();
                let confidence = map.get("confidence")?.as_f64()?;
                Some(Skill { name, confidence })
            }
            _ => None,
        })
        .collect()
}
