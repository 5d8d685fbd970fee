use serde::{Deserialize, Serialize};

/// The four ikigai reflection categories, each an ordered sequence of
/// free-text answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IkigaiData {
    pub passion: Vec<String>,
    pub mission: Vec<String>,
    pub profession: Vec<String>,
    pub vocation: Vec<String>,
}

impl IkigaiData {
    /// Complete means every one of the four sequences has at least one
    /// non-blank answer.
    pub fn is_complete(&self) -> bool {
        [&self.passion, &self.mission, &self.profession, &self.vocation]
            .iter()
            .all(|answers| answers.iter().any(|a| !a.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::versioned::read_versioned;
    use serde_json::json;

    fn answered() -> IkigaiData {
        IkigaiData {
            passion: vec!["teaching".to_string()],
            mission: vec!["widen access to tech".to_string()],
            profession: vec!["data analysis".to_string()],
            vocation: vec!["ML consulting".to_string()],
        }
    }

    #[test]
    fn test_all_four_answered_is_complete() {
        assert!(answered().is_complete());
    }

    #[test]
    fn test_one_empty_sequence_is_incomplete() {
        let mut data = answered();
        data.vocation.clear();
        assert!(!data.is_complete());
    }

    #[test]
    fn test_blank_answers_do_not_count() {
        let mut data = answered();
        data.mission = vec!["  ".to_string()];
        assert!(!data.is_complete());
    }

    #[test]
    fn test_default_is_incomplete() {
        assert!(!IkigaiData::default().is_complete());
    }

    #[test]
    fn test_malformed_stored_shape_reads_as_empty_default() {
        // Round-trip property from the read boundary: an absent or
        // malformed blob must yield the all-empty default, never an error.
        let absent: IkigaiData = read_versioned(None);
        assert_eq!(absent, IkigaiData::default());

        let malformed = json!({"schema_version": 1, "data": {"passion": 42}});
        let read: IkigaiData = read_versioned(Some(&malformed));
        assert_eq!(read, IkigaiData::default());
    }
}
