//! Mapping between detector class names and the numeric ids tracks carry.

use std::collections::HashMap;

/// Name given to ids missing from the table.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Bidirectional class-name/id table.
///
/// Names without an entry map to id `0`; ids without an entry, and tracks
/// without a class, map to [`UNKNOWN_LABEL`].
#[derive(Debug, Clone)]
pub struct ClassLabels {
    by_name: HashMap<String, i32>,
    by_id: HashMap<i32, String>,
}

impl Default for ClassLabels {
    fn default() -> Self {
        Self::from_names(["person", "car", "bicycle", "dog", "cat"])
    }
}

impl ClassLabels {
    /// Empty table.
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            by_id: HashMap::new(),
        }
    }

    /// Assign ids `0..n` in iteration order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels = Self::new();
        for (id, name) in (0..).zip(names) {
            labels.insert(id, name);
        }
        labels
    }

    /// Add or replace an entry. A name keeps only its latest id.
    pub fn insert(&mut self, id: i32, name: impl Into<String>) {
        let name = name.into();
        if let Some(old) = self.by_id.insert(id, name.clone()) {
            self.by_name.remove(&old);
        }
        if let Some(old_id) = self.by_name.insert(name, id) {
            if old_id != id {
                self.by_id.remove(&old_id);
            }
        }
    }

    pub fn id_of(&self, name: &str) -> i32 {
        self.by_name.get(name).copied().unwrap_or(0)
    }

    pub fn name_of(&self, class_id: Option<i32>) -> &str {
        class_id
            .and_then(|id| self.by_id.get(&id))
            .map_or(UNKNOWN_LABEL, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
