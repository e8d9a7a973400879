use std::collections::HashSet;

/// Row key → expanded. Only expanded keys are stored, so collapsing a row
/// returns the map to exactly its previous state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionMap {
    expanded: HashSet<String>,
}

impl ExpansionMap {
    /// Flips the row and returns its new state.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }
}
