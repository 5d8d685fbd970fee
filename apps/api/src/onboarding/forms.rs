//! Onboarding wizard form state and per-step validation.

use serde::{Deserialize, Serialize};

/// Everything the onboarding wizard collects. The resume file is handled
/// entirely on the client and never reaches this service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingData {
    pub full_name: String,
    pub email: String,
    pub current_role: String,
    pub experience: String,
    pub background: String,
    pub ai_interest: String,
    pub goals: Vec<String>,
    pub timeline: String,
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OnboardingStep {
    pub key: &'static str,
    pub title: &'static str,
}

/// The fixed wizard steps, in order.
pub const ONBOARDING_STEPS: [OnboardingStep; 6] = [
    OnboardingStep {
        key: "basics",
        title: "About you",
    },
    OnboardingStep {
        key: "role",
        title: "Your current role",
    },
    OnboardingStep {
        key: "background",
        title: "Background and AI interest",
    },
    OnboardingStep {
        key: "goals",
        title: "Your goals",
    },
    OnboardingStep {
        key: "timeline",
        title: "Your timeline",
    },
    OnboardingStep {
        key: "links",
        title: "Links",
    },
];

/// Validates the required fields for one step. Returns the list of missing
/// field names; empty means the step may advance. Fields belonging to other
/// steps are ignored, so partially filled forms validate step by step.
pub fn validate_step(step: usize, data: &OnboardingData) -> Vec<&'static str> {
    fn require(missing: &mut Vec<&'static str>, name: &'static str, value: &str) {
        if value.trim().is_empty() {
            missing.push(name);
        }
    }

    let mut missing = Vec::new();
    match step {
        0 => {
            require(&mut missing, "full_name", &data.full_name);
            require(&mut missing, "email", &data.email);
        }
        1 => {
            require(&mut missing, "current_role", &data.current_role);
            require(&mut missing, "experience", &data.experience);
        }
        2 => {
            require(&mut missing, "background", &data.background);
            require(&mut missing, "ai_interest", &data.ai_interest);
        }
        3 => {
            if data.goals.iter().all(|g| g.trim().is_empty()) {
                missing.push("goals");
            }
        }
        4 => {
            require(&mut missing, "timeline", &data.timeline);
        }
        // links step: linkedin_url is optional
        _ => {}
    }

    missing
}

/// Validates every step up to and including `step`. Advancing persists the
/// whole submitted form, so a payload that blanks out a field an earlier
/// step already required must not pass. At the final step this checks the
/// entire form, which is what gates profile creation.
pub fn validate_through(step: usize, data: &OnboardingData) -> Vec<&'static str> {
    (0..=step).flat_map(|s| validate_step(s, data)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OnboardingData {
        OnboardingData {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            current_role: "Analyst".to_string(),
            experience: "8 years".to_string(),
            background: "Mathematics".to_string(),
            ai_interest: "Applied ML".to_string(),
            goals: vec!["transition into AI".to_string()],
            timeline: "6 months".to_string(),
            linkedin_url: None,
        }
    }

    #[test]
    fn test_empty_form_fails_first_step() {
        let missing = validate_step(0, &OnboardingData::default());
        assert_eq!(missing, vec!["full_name", "email"]);
    }

    #[test]
    fn test_filled_form_passes_every_step() {
        let data = filled();
        for step in 0..ONBOARDING_STEPS.len() {
            assert!(validate_step(step, &data).is_empty(), "step {step} failed");
        }
    }

    #[test]
    fn test_goals_step_requires_nonempty_goals() {
        let mut data = filled();
        data.goals.clear();
        assert_eq!(validate_step(3, &data), vec!["goals"]);
    }

    #[test]
    fn test_whitespace_only_goal_does_not_count() {
        let mut data = filled();
        data.goals = vec!["   ".to_string()];
        assert_eq!(validate_step(3, &data), vec!["goals"]);
    }

    #[test]
    fn test_links_step_is_optional() {
        assert!(validate_step(5, &OnboardingData::default()).is_empty());
    }

    #[test]
    fn test_whitespace_field_counts_as_missing() {
        let mut data = filled();
        data.timeline = "  ".to_string();
        assert_eq!(validate_step(4, &data), vec!["timeline"]);
    }

    #[test]
    fn test_final_step_requires_the_whole_form() {
        // The links step itself has no required fields, but advancing off it
        // creates the profile, so every earlier step must still hold.
        let missing = validate_through(ONBOARDING_STEPS.len() - 1, &OnboardingData::default());
        assert!(missing.contains(&"full_name"));
        assert!(missing.contains(&"email"));
        assert!(missing.contains(&"goals"));
        assert!(missing.contains(&"timeline"));

        assert!(validate_through(ONBOARDING_STEPS.len() - 1, &filled()).is_empty());
    }

    #[test]
    fn test_advance_payload_cannot_blank_earlier_fields() {
        // A step-1 submission with full_name erased fails even though
        // step 1's own fields are present.
        let mut data = filled();
        data.full_name.clear();
        assert!(validate_step(1, &data).is_empty());
        assert_eq!(validate_through(1, &data), vec!["full_name"]);
    }

    #[test]
    fn test_step_validation_ignores_other_steps() {
        // Only basics filled: step 0 passes even though the rest is empty.
        let data = OnboardingData {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert!(validate_step(0, &data).is_empty());
        assert!(!validate_step(1, &data).is_empty());
    }
}
