//! Multi-select state for bulk actions.

use std::collections::HashSet;

/// Set of selected item identifiers (item source URLs).
///
/// Operations return new values and leave the receiver untouched, so a
/// selection can be stored in a signal and replaced wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection containing every id in `ids`.
    pub fn select_all<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Add `id` if absent, remove it if present.
    #[must_use]
    pub fn toggle(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(id) {
            ids.insert(id.to_string());
        }
        Self { ids }
    }

    /// Keep only ids that satisfy `present`.
    #[must_use]
    pub fn retain_present(&self, present: impl Fn(&str) -> bool) -> Self {
        Self {
            ids: self.ids.iter().filter(|id| present(id)).cloned().collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
