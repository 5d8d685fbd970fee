//! Bounded linear step navigation shared by the onboarding and ikigai
//! wizards: an integer index over a fixed-length step list, two transition
//! edges per step (forward/back), no cycles, no skip-ahead.

/// Forward button label on interior steps.
pub const LABEL_CONTINUE: &str = "Continue";
/// Forward button label on the final step.
pub const LABEL_COMPLETE: &str = "Complete";

/// A linear, terminating step cursor. Advancing is gated on an externally
/// supplied validity flag; the navigator imposes no other sequencing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNavigator {
    index: usize,
    total: usize,
}

impl StepNavigator {
    /// Starts at step 0 of a wizard with `total` steps. `total` must be ≥ 1.
    pub fn new(total: usize) -> Self {
        assert!(total >= 1, "a wizard needs at least one step");
        Self { index: 0, total }
    }

    /// Resumes at a stored index, clamped into bounds so a stale or
    /// out-of-range saved position never panics.
    pub fn resume(index: usize, total: usize) -> Self {
        let mut nav = Self::new(total);
        nav.index = index.min(total - 1);
        nav
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Moves forward one step if the current step's input is valid.
    /// Bounded above by `total - 1`. Returns whether the index moved.
    pub fn advance(&mut self, step_valid: bool) -> bool {
        if !step_valid || self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves back one step, bounded below by 0. Returns whether the index moved.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// "Previous" is disabled at step 0.
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.total - 1
    }

    /// Label for the forward button: "Complete" on the final step,
    /// "Continue" everywhere else.
    pub fn forward_label(&self) -> &'static str {
        if self.is_last() {
            LABEL_COMPLETE
        } else {
            LABEL_CONTINUE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_disabled_at_step_zero() {
        let mut nav = StepNavigator::new(4);
        assert!(!nav.can_go_back());
        assert!(!nav.back());
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn test_forward_label_is_complete_on_last_step() {
        let nav = StepNavigator::resume(3, 4);
        assert!(nav.is_last());
        assert_eq!(nav.forward_label(), LABEL_COMPLETE);
    }

    #[test]
    fn test_forward_label_is_continue_on_interior_steps() {
        let nav = StepNavigator::new(4);
        assert_eq!(nav.forward_label(), LABEL_CONTINUE);
        let nav = StepNavigator::resume(2, 4);
        assert_eq!(nav.forward_label(), LABEL_CONTINUE);
    }

    #[test]
    fn test_advance_requires_valid_flag() {
        let mut nav = StepNavigator::new(3);
        assert!(!nav.advance(false));
        assert_eq!(nav.index(), 0);
        assert!(nav.advance(true));
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn test_advance_bounded_by_last_step() {
        let mut nav = StepNavigator::resume(2, 3);
        assert!(!nav.advance(true));
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn test_back_and_forth() {
        let mut nav = StepNavigator::new(3);
        assert!(nav.advance(true));
        assert!(nav.advance(true));
        assert!(nav.back());
        assert_eq!(nav.index(), 1);
        assert!(nav.can_go_back());
    }

    #[test]
    fn test_resume_clamps_out_of_range_index() {
        let nav = StepNavigator::resume(99, 4);
        assert_eq!(nav.index(), 3);
    }

    #[test]
    fn test_single_step_wizard_shows_complete() {
        let nav = StepNavigator::new(1);
        assert!(nav.is_last());
        assert!(!nav.can_go_back());
        assert_eq!(nav.forward_label(), LABEL_COMPLETE);
    }
}
