//! Row selection tracking.

use std::collections::HashSet;
use std::hash::Hash;

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    None,
    /// Single row selection (radio-button style).
    Single,
    /// Multiple rows can be selected (checkbox style).
    #[default]
    Multi,
}

/// Tracks selected rows by their keys.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    pub mode: SelectionMode,
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::multi()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create selection with no selection allowed.
    pub fn none() -> Self {
        Self::with_mode(SelectionMode::None)
    }

    /// Create single-selection mode.
    pub fn single() -> Self {
        Self::with_mode(SelectionMode::Single)
    }

    /// Create multi-selection mode.
    pub fn multi() -> Self {
        Self::with_mode(SelectionMode::Multi)
    }

    fn with_mode(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// Toggle selection for a key. Returns true if selection changed.
    pub fn toggle(&mut self, key: K) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.selected.contains(&key) {
                    self.selected.clear();
                } else {
                    self.selected.clear();
                    self.selected.insert(key);
                }
                true
            }
            SelectionMode::Multi => {
                if !self.selected.remove(&key) {
                    self.selected.insert(key);
                }
                true
            }
        }
    }

    /// True if every key in `keys` is selected and `keys` is not empty.
    pub fn contains_all<'a>(&self, keys: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        let mut any = false;
        for key in keys {
            if !self.selected.contains(key) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Select every key in `keys`, or deselect exactly those keys if they are
    /// all selected already. Keys outside `keys` are never touched.
    ///
    /// Only meaningful in multi mode; returns false otherwise.
    pub fn toggle_all(&mut self, keys: &[K]) -> bool {
        if self.mode != SelectionMode::Multi || keys.is_empty() {
            return false;
        }
        if self.contains_all(keys) {
            for key in keys {
                self.selected.remove(key);
            }
        } else {
            self.selected.extend(keys.iter().cloned());
        }
        true
    }

    /// Keep only the keys for which `keep` returns true.
    ///
    /// Returns the number of keys dropped.
    pub fn retain(&mut self, keep: impl Fn(&K) -> bool) -> usize {
        let before = self.selected.len();
        self.selected.retain(|key| keep(key));
        before - self.selected.len()
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Number of selected keys.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Get all selected keys.
    pub fn get_all(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        let mut selection = Selection::multi();
        selection.toggle(7);
        selection.toggle(3);
        selection.toggle(3);
        assert!(selection.is_selected(&7));
        assert!(!selection.is_selected(&3));
        assert_eq!(selection.count(), 1);
    }

    #[test]
    fn test_single_mode_replaces() {
        let mut selection = Selection::single();
        selection.toggle(1);
        selection.toggle(2);
        assert_eq!(selection.get_all().copied().collect::<Vec<_>>(), vec![2]);
        assert!(!selection.toggle_all(&[1, 2]));
    }

    #[test]
    fn test_none_mode_ignores() {
        let mut selection = Selection::none();
        assert!(!selection.toggle(1));
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_toggle_all_touches_only_given_keys() {
        let mut selection = Selection::multi();
        selection.toggle(99);
        selection.toggle(1);

        selection.toggle_all(&[1, 2, 3]);
        assert_eq!(selection.count(), 4);

        selection.toggle_all(&[1, 2, 3]);
        assert_eq!(selection.get_all().copied().collect::<Vec<_>>(), vec![99]);
    }

    #[test]
    fn test_retain_prunes() {
        let mut selection = Selection::multi();
        for key in [1, 2, 3] {
            selection.toggle(key);
        }
        assert_eq!(selection.retain(|k| *k != 2), 1);
        assert!(!selection.is_selected(&2));
        assert_eq!(selection.count(), 2);
    }
}
