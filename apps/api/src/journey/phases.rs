use serde::Serialize;

/// One of the four top-level program stages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PhaseDef {
    pub name: &'static str,
    pub description: &'static str,
}

/// The fixed, ordered program. Index order is the only sequencing rule.
pub const PHASES: [PhaseDef; 4] = [
    PhaseDef {
        name: "Introspection",
        description: "Understand who you are: onboarding and ikigai reflection.",
    },
    PhaseDef {
        name: "Exploration",
        description: "Research industries and get hands-on with an AI project.",
    },
    PhaseDef {
        name: "Reflection",
        description: "Consolidate what you learned by building in public.",
    },
    PhaseDef {
        name: "Action",
        description: "Track target firms and act on job-search alerts.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_phases_in_program_order() {
        let names: Vec<&str> = PHASES.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Introspection", "Exploration", "Reflection", "Action"]
        );
    }

    #[test]
    fn test_descriptions_are_nonempty() {
        assert!(PHASES.iter().all(|p| !p.description.is_empty()));
    }
}
