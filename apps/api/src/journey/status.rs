//! Completion-status derivation over ordered per-step flags.
//!
//! Strictly sequential: step k is "current" iff every step before k is
//! complete and k itself is not; every step after the current one is
//! "locked" no matter what its own flag says.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepStatus {
    pub completed: bool,
    pub current: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    pub steps: Vec<StepStatus>,
    /// First not-completed step, left to right. `None` when everything is done.
    pub current: Option<usize>,
    pub completed: usize,
    pub total: usize,
}

/// Derives current/locked/completed status from raw per-step flags.
///
/// The completed count is the length of the contiguous completed prefix:
/// a true flag sitting behind a locked step does not count, since the user
/// cannot legitimately have reached it yet.
pub fn derive_status(flags: &[bool]) -> StatusSummary {
    let current = flags.iter().position(|done| !done);

    let steps = flags
        .iter()
        .enumerate()
        .map(|(i, _)| match current {
            Some(c) if i < c => StepStatus {
                completed: true,
                current: false,
                locked: false,
            },
            Some(c) if i == c => StepStatus {
                completed: false,
                current: true,
                locked: false,
            },
            Some(_) => StepStatus {
                completed: false,
                current: false,
                locked: true,
            },
            None => StepStatus {
                completed: true,
                current: false,
                locked: false,
            },
        })
        .collect::<Vec<_>>();

    let completed = current.unwrap_or(flags.len());

    StatusSummary {
        steps,
        current,
        completed,
        total: flags.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_sequential_locking() {
        // Step 2's own flag is true but it sits behind the current step,
        // so it is locked and does not count as completed.
        let summary = derive_status(&[true, false, true]);
        assert_eq!(summary.current, Some(1));
        assert!(summary.steps[0].completed);
        assert!(summary.steps[1].current);
        assert!(summary.steps[2].locked);
        assert!(!summary.steps[2].completed);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn test_all_complete() {
        let summary = derive_status(&[true, true, true]);
        assert_eq!(summary.current, None);
        assert_eq!(summary.completed, 3);
        assert!(summary.steps.iter().all(|s| s.completed && !s.locked));
    }

    #[test]
    fn test_nothing_complete() {
        let summary = derive_status(&[false, false, false]);
        assert_eq!(summary.current, Some(0));
        assert_eq!(summary.completed, 0);
        assert!(summary.steps[0].current);
        assert!(summary.steps[1].locked);
        assert!(summary.steps[2].locked);
    }

    #[test]
    fn test_empty_flags() {
        let summary = derive_status(&[]);
        assert_eq!(summary.current, None);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.total, 0);
        assert!(summary.steps.is_empty());
    }

    #[test]
    fn test_only_first_step_current() {
        let summary = derive_status(&[true, true, false, false]);
        assert_eq!(summary.current, Some(2));
        let currents = summary.steps.iter().filter(|s| s.current).count();
        assert_eq!(currents, 1);
        assert_eq!(summary.completed, 2);
    }
}
