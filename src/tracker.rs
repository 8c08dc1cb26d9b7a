//! The goal tracker: draft text plus the ordered goal list.
//!
//! This is the only mutation boundary for domain state. Everything here
//! is pure in-memory bookkeeping, fully testable without a terminal.
//! The list is newest-first: a submitted goal is prepended.

use crate::types::{Goal, GoalId};

/// Owner of the two state cells: the uncommitted draft and the goal list.
///
/// Both fields are private; mutation goes through the three operations
/// below. Invariants held at this boundary:
/// - every goal's text is trimmed and non-empty
/// - every goal's id is unique for this tracker's lifetime
/// - relative order of surviving goals never changes
#[derive(Debug, Default)]
pub struct GoalTracker {
    /// Text not yet committed to a goal. Verbatim, untrimmed.
    draft: String,
    /// Newest-first.
    goals: Vec<Goal>,
    /// Next id to mint. Monotonic, never reused.
    next_id: u64,
}

impl GoalTracker {
    /// Create a tracker with an empty draft and an empty list.
    pub fn new() -> Self {
        GoalTracker::default()
    }

    /// The current draft, exactly as typed.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The goals, newest first.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Replace the draft verbatim. No trimming, no validation.
    pub fn update_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Commit the draft as a new goal.
    ///
    /// Trims the draft; a blank result is a silent no-op returning `None`
    /// with the draft left untouched. Otherwise prepends a goal with a
    /// fresh id and the trimmed text, clears the draft, and returns the
    /// new id. Identical text submitted twice yields two distinct goals;
    /// duplicates are permitted by design.
    pub fn submit_draft(&mut self) -> Option<GoalId> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = GoalId(self.next_id);
        self.next_id += 1;
        self.goals.insert(0, Goal { id, text: trimmed.to_string() });
        self.draft.clear();
        Some(id)
    }

    /// Remove the goal with the given id, preserving the order of the rest.
    ///
    /// A miss (already deleted, never existed) is a silent no-op returning
    /// `false`. Removes at most one entry.
    pub fn delete_goal(&mut self, id: GoalId) -> bool {
        match self.goals.iter().position(|g| g.id == id) {
            Some(pos) => {
                self.goals.remove(pos);
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(texts: &[&str]) -> GoalTracker {
        let mut t = GoalTracker::new();
        for text in texts {
            t.update_draft(text.to_string());
            t.submit_draft().expect("fixture text must be non-blank");
        }
        t
    }

    // -- submit --

    #[test]
    fn submit_empty_draft_is_noop() {
        let mut t = GoalTracker::new();
        assert_eq!(t.submit_draft(), None);
        assert!(t.goals().is_empty());
        assert_eq!(t.draft(), "");
    }

    #[test]
    fn submit_whitespace_only_draft_is_noop_and_preserves_draft() {
        let mut t = GoalTracker::new();
        for blank in ["   ", "\t", "\n\n", " \t \n "] {
            t.update_draft(blank.to_string());
            assert_eq!(t.submit_draft(), None);
            assert!(t.goals().is_empty());
            // Rejected commit leaves the draft untouched
            assert_eq!(t.draft(), blank);
        }
    }

    #[test]
    fn submit_prepends_trimmed_text_and_clears_draft() {
        let mut t = GoalTracker::new();
        t.update_draft("  Learn Rust  ".to_string());
        let id = t.submit_draft();
        assert!(id.is_some());
        assert_eq!(t.goals().len(), 1);
        assert_eq!(t.goals()[0].text, "Learn Rust");
        assert_eq!(t.draft(), "");
    }

    #[test]
    fn submit_preserves_interior_newlines() {
        let mut t = GoalTracker::new();
        t.update_draft("  Run 5k\nevery week  ".to_string());
        t.submit_draft().unwrap();
        assert_eq!(t.goals()[0].text, "Run 5k\nevery week");
    }

    #[test]
    fn submit_after_clear_is_noop() {
        let mut t = tracker_with(&["Learn Rust"]);
        // Draft was cleared by the successful submit; a repeat call no-ops
        assert_eq!(t.submit_draft(), None);
        assert_eq!(t.goals().len(), 1);
    }

    #[test]
    fn duplicate_text_creates_distinct_goals() {
        let mut t = tracker_with(&["Learn Rust", "Learn Rust"]);
        assert_eq!(t.goals().len(), 2);
        assert_ne!(t.goals()[0].id, t.goals()[1].id);
        assert_eq!(t.goals()[0].text, t.goals()[1].text);
        // And a third, for good measure
        t.update_draft("Learn Rust".to_string());
        t.submit_draft().unwrap();
        assert_eq!(t.goals().len(), 3);
    }

    #[test]
    fn newest_goal_is_first() {
        let t = tracker_with(&["t1", "t2", "t3", "t4"]);
        let texts: Vec<&str> = t.goals().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["t4", "t3", "t2", "t1"]);
    }

    // -- delete --

    #[test]
    fn delete_removes_exactly_one_and_preserves_order() {
        let mut t = tracker_with(&["a", "b", "c"]);
        let middle = t.goals()[1].id;
        assert!(t.delete_goal(middle));
        let texts: Vec<&str> = t.goals().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "a"]);
        assert!(!t.goals().iter().any(|g| g.id == middle));
    }

    #[test]
    fn delete_same_id_twice_is_noop_second_time() {
        let mut t = tracker_with(&["a", "b"]);
        let id = t.goals()[0].id;
        assert!(t.delete_goal(id));
        assert_eq!(t.goals().len(), 1);
        assert!(!t.delete_goal(id));
        assert_eq!(t.goals().len(), 1);
    }

    #[test]
    fn delete_unknown_id_leaves_list_identical() {
        let mut t = tracker_with(&["a", "b"]);
        let before = t.goals().to_vec();
        assert!(!t.delete_goal(GoalId(9999)));
        assert_eq!(t.goals(), before.as_slice());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut t = tracker_with(&["a"]);
        let first = t.goals()[0].id;
        t.delete_goal(first);
        t.update_draft("b".to_string());
        let second = t.submit_draft().unwrap();
        assert_ne!(first, second);
    }

    // -- scenario from the visible behavior --

    #[test]
    fn add_blank_add_delete_scenario() {
        let mut t = GoalTracker::new();

        t.update_draft("Learn Rust".to_string());
        t.submit_draft().unwrap();
        assert_eq!(t.goals().len(), 1);
        assert_eq!(t.goals()[0].text, "Learn Rust");

        t.update_draft("  ".to_string());
        assert_eq!(t.submit_draft(), None);
        assert_eq!(t.goals().len(), 1);

        t.update_draft("Run 5k".to_string());
        t.submit_draft().unwrap();
        let texts: Vec<&str> = t.goals().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["Run 5k", "Learn Rust"]);

        let learn_rust = t
            .goals()
            .iter()
            .find(|g| g.text == "Learn Rust")
            .map(|g| g.id)
            .unwrap();
        assert!(t.delete_goal(learn_rust));
        let texts: Vec<&str> = t.goals().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["Run 5k"]);
    }

    #[test]
    fn length_tracks_insertions_minus_deletions() {
        let mut t = tracker_with(&["a", "b", "c", "d"]);
        assert_eq!(t.goals().len(), 4);
        let id = t.goals()[2].id;
        t.delete_goal(id);
        t.delete_goal(id); // miss
        assert_eq!(t.goals().len(), 3);
        t.update_draft("e".to_string());
        t.submit_draft().unwrap();
        assert_eq!(t.goals().len(), 4);
    }
}
