//! Career-insight generation from completed ikigai reflections.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::ikigai::models::IkigaiData;
use crate::ikigai::prompts::{IKIGAI_INSIGHTS_PROMPT, IKIGAI_INSIGHTS_SYSTEM};
use crate::llm_client::{AiContent, LlmClient};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerInsights {
    pub summary: String,
    pub themes: Vec<String>,
    pub suggested_roles: Vec<String>,
}

/// Generates career insights from the user's ikigai answers.
/// Unparseable model output degrades to the static fallback, flagged as
/// such in the returned `AiContent`; transport failures are real errors.
pub async fn generate_career_insights(
    llm: &LlmClient,
    data: &IkigaiData,
) -> Result<AiContent<CareerInsights>, AppError> {
    let prompt = IKIGAI_INSIGHTS_PROMPT
        .replace("{passion}", &bullet_list(&data.passion))
        .replace("{mission}", &bullet_list(&data.mission))
        .replace("{profession}", &bullet_list(&data.profession))
        .replace("{vocation}", &bullet_list(&data.vocation));

    llm.call_json_or(&prompt, IKIGAI_INSIGHTS_SYSTEM, fallback_insights)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate career insights: {e}")))
}

/// Static content served when the model response cannot be parsed.
pub fn fallback_insights() -> CareerInsights {
    CareerInsights {
        summary: "Your reflections show a genuine pull toward purposeful, hands-on work. \
                  Revisit your four ikigai lists and look for the overlaps — that \
                  intersection is where your next role lives."
            .to_string(),
        themes: vec![
            "Learning by building".to_string(),
            "Helping others through technology".to_string(),
            "Turning existing strengths toward AI".to_string(),
        ],
        suggested_roles: vec![
            "AI Product Analyst".to_string(),
            "Machine Learning Operations Associate".to_string(),
            "Technical Program Coordinator".to_string(),
        ],
    }
}

fn bullet_list(answers: &[String]) -> String {
    if answers.is_empty() {
        return "- (no answers)".to_string();
    }
    answers
        .iter()
        .map(|a| format!("- {a}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_well_formed() {
        let fb = fallback_insights();
        assert!(!fb.summary.is_empty());
        assert!(!fb.themes.is_empty());
        assert!(!fb.suggested_roles.is_empty());
    }

    #[test]
    fn test_bullet_list_formats_answers() {
        let answers = vec!["teaching".to_string(), "writing".to_string()];
        assert_eq!(bullet_list(&answers), "- teaching\n- writing");
    }

    #[test]
    fn test_bullet_list_handles_empty() {
        assert_eq!(bullet_list(&[]), "- (no answers)");
    }
}
