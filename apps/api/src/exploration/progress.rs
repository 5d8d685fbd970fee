//! Exploration progress aggregation.
//!
//! Pure, deterministic functions of the per-project progress mapping.
//! No I/O, no error cases beyond an empty mapping yielding 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recorded progress flags for one project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectProgress {
    pub learning_plan: bool,
    pub building_plan: bool,
}

/// Granted when the mapping has any key at all, i.e. exploration started.
/// A key whose flags are both false still earns this: presence in the map
/// means the user engaged with the project. Kept as shipped pending product
/// clarification (see DESIGN.md).
const STARTED_CREDIT: u8 = 33;
/// Granted when any project has a learning plan.
const LEARNING_CREDIT: u8 = 33;
/// Granted when any project has a building-in-public plan.
const BUILDING_CREDIT: u8 = 34;

/// Overall exploration completion, 0-100, with the fixed three-step
/// weighting: started + any learning plan + any building plan.
pub fn overall_completion(progress: &BTreeMap<Uuid, ProjectProgress>) -> u8 {
    if progress.is_empty() {
        return 0;
    }

    let mut pct = STARTED_CREDIT;
    if progress.values().any(|p| p.learning_plan) {
        pct += LEARNING_CREDIT;
    }
    if progress.values().any(|p| p.building_plan) {
        pct += BUILDING_CREDIT;
    }
    pct
}

/// Per-project completion, independent of every other project:
/// 50 points per plan, summed.
pub fn project_completion(progress: ProjectProgress) -> u8 {
    let mut pct = 0;
    if progress.learning_plan {
        pct += 50;
    }
    if progress.building_plan {
        pct += 50;
    }
    pct
}

/// Assembles the progress mapping from the stored pieces: the selected
/// project (if any) plus every project that has a plan on record.
pub fn progress_map(
    selected: Option<Uuid>,
    learning_plan_projects: &[Uuid],
    building_plan_projects: &[Uuid],
) -> BTreeMap<Uuid, ProjectProgress> {
    let mut map: BTreeMap<Uuid, ProjectProgress> = BTreeMap::new();

    if let Some(id) = selected {
        map.entry(id).or_default();
    }
    for id in learning_plan_projects {
        map.entry(*id).or_default().learning_plan = true;
    }
    for id in building_plan_projects {
        map.entry(*id).or_default().building_plan = true;
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: Vec<(Uuid, bool, bool)>) -> BTreeMap<Uuid, ProjectProgress> {
        entries
            .into_iter()
            .map(|(id, learning_plan, building_plan)| {
                (
                    id,
                    ProjectProgress {
                        learning_plan,
                        building_plan,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_mapping_is_zero() {
        assert_eq!(overall_completion(&BTreeMap::new()), 0);
    }

    #[test]
    fn test_learning_plan_only_is_66() {
        let progress = map(vec![(Uuid::new_v4(), true, false)]);
        assert_eq!(overall_completion(&progress), 66);
    }

    #[test]
    fn test_both_plans_anywhere_is_100() {
        // The learning and building plans may be on different projects.
        let progress = map(vec![
            (Uuid::new_v4(), true, false),
            (Uuid::new_v4(), false, true),
        ]);
        assert_eq!(overall_completion(&progress), 100);
    }

    #[test]
    fn test_started_credit_granted_for_flagless_entry() {
        // A key present with both flags false still counts as started.
        let id = Uuid::new_v4();
        let progress = map(vec![(id, false, false)]);
        assert_eq!(overall_completion(&progress), 33);
        assert_eq!(project_completion(progress[&id]), 0);
    }

    #[test]
    fn test_building_plan_only_is_67() {
        let progress = map(vec![(Uuid::new_v4(), false, true)]);
        assert_eq!(overall_completion(&progress), 33 + 34);
    }

    #[test]
    fn test_project_completion_halves() {
        assert_eq!(project_completion(ProjectProgress::default()), 0);
        assert_eq!(
            project_completion(ProjectProgress {
                learning_plan: true,
                building_plan: false
            }),
            50
        );
        assert_eq!(
            project_completion(ProjectProgress {
                learning_plan: false,
                building_plan: true
            }),
            50
        );
        assert_eq!(
            project_completion(ProjectProgress {
                learning_plan: true,
                building_plan: true
            }),
            100
        );
    }

    #[test]
    fn test_progress_map_merges_sources() {
        let selected = Uuid::new_v4();
        let planned = Uuid::new_v4();
        let map = progress_map(Some(selected), &[planned], &[planned]);

        assert_eq!(map.len(), 2);
        assert_eq!(map[&selected], ProjectProgress::default());
        assert_eq!(
            map[&planned],
            ProjectProgress {
                learning_plan: true,
                building_plan: true
            }
        );
        assert_eq!(overall_completion(&map), 100);
    }

    #[test]
    fn test_progress_map_selected_project_with_plans() {
        let id = Uuid::new_v4();
        let map = progress_map(Some(id), &[id], &[]);
        assert_eq!(map.len(), 1);
        assert!(map[&id].learning_plan);
        assert_eq!(overall_completion(&map), 66);
    }
}
