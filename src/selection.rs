// ☑️ Selection Set - Bounded comparison selection
// Insertion-ordered, duplicate-free set of entity ids with a hard cap

use serde::{Deserialize, Serialize};

/// Maximum cards in a comparison
pub const MAX_COMPARE_CARDS: usize = 6;

/// Maximum privacy protocols in a comparison
pub const MAX_COMPARE_PROTOCOLS: usize = 6;

/// Maximum LLM assistants in a comparison
pub const MAX_COMPARE_LLMS: usize = 4;

/// Anything with a stable string identity that can be selected.
pub trait Keyed {
    fn key(&self) -> &str;
}

// ============================================================================
// TOGGLE OUTCOME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    /// Id was appended to the set
    Added,

    /// Id was already present and has been removed
    Removed,

    /// Set is full; nothing changed and the caller should surface a limit warning
    Rejected,
}

impl ToggleOutcome {
    pub fn overflowed(&self) -> bool {
        matches!(self, ToggleOutcome::Rejected)
    }
}

// ============================================================================
// SELECTION SET
// ============================================================================

/// Ordered set of selected entity ids, bounded at `limit`.
///
/// Insertion order is preserved across removals of other members, so the
/// comparison view shows entities in the order the user picked them, not
/// in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: Vec<String>,
    limit: usize,
}

impl SelectionSet {
    pub fn new(limit: usize) -> Self {
        SelectionSet {
            ids: Vec::new(),
            limit,
        }
    }

    /// Toggle membership of `id`: remove if present, append if absent and
    /// under the bound, reject without mutating if absent and at the bound.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }

        if self.ids.len() >= self.limit {
            return ToggleOutcome::Rejected;
        }

        self.ids.push(id.to_string());
        ToggleOutcome::Added
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Project the selection onto a catalog slice, preserving selection
    /// order (not catalog order). Ids with no backing entity are skipped.
    pub fn project<'a, T: Keyed>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.ids
            .iter()
            .filter_map(|id| items.iter().find(|item| item.key() == id))
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: String,
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn items(ids: &[&str]) -> Vec<Item> {
        ids.iter().map(|id| Item { id: id.to_string() }).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = SelectionSet::new(6);

        assert_eq!(set.toggle("a"), ToggleOutcome::Added);
        assert!(set.contains("a"));
        assert_eq!(set.len(), 1);

        assert_eq!(set.toggle("a"), ToggleOutcome::Removed);
        assert!(!set.contains("a"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let mut set = SelectionSet::new(6);
        set.toggle("a");
        set.toggle("b");

        let before: Vec<String> = set.ids().to_vec();
        set.toggle("c");
        set.toggle("c");
        assert_eq!(set.ids(), &before[..]);
    }

    #[test]
    fn test_bound_rejects_overflow() {
        let mut set = SelectionSet::new(6);
        for id in ["a", "b", "c", "d", "e", "f"] {
            assert_eq!(set.toggle(id), ToggleOutcome::Added);
        }

        // Seventh distinct id is rejected, state unchanged
        let outcome = set.toggle("g");
        assert_eq!(outcome, ToggleOutcome::Rejected);
        assert!(outcome.overflowed());
        assert_eq!(set.len(), 6);
        assert!(!set.contains("g"));
    }

    #[test]
    fn test_remove_then_readd_after_overflow() {
        let mut set = SelectionSet::new(6);
        for id in ["a", "b", "c", "d", "e", "f"] {
            set.toggle(id);
        }
        assert_eq!(set.toggle("g"), ToggleOutcome::Rejected);

        assert_eq!(set.toggle("a"), ToggleOutcome::Removed);
        assert_eq!(set.toggle("g"), ToggleOutcome::Added);
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = SelectionSet::new(6);
        set.toggle("c");
        set.toggle("a");
        set.toggle("b");

        assert_eq!(set.ids(), &["c", "a", "b"]);

        // Removing a middle member keeps relative order of the rest
        set.toggle("a");
        assert_eq!(set.ids(), &["c", "b"]);
    }

    #[test]
    fn test_projection_uses_selection_order() {
        let catalog = items(&["a", "b", "c", "d"]);
        let mut set = SelectionSet::new(6);
        set.toggle("d");
        set.toggle("b");

        let projected: Vec<&str> = set.project(&catalog).iter().map(|i| i.key()).collect();
        assert_eq!(projected, vec!["d", "b"]);
    }

    #[test]
    fn test_projection_skips_unknown_ids() {
        let catalog = items(&["a"]);
        let mut set = SelectionSet::new(6);
        set.toggle("a");
        set.toggle("ghost");

        assert_eq!(set.project(&catalog).len(), 1);
    }
}
