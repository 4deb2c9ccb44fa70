// Wed Jan 15 2026 - Alex

use std::collections::HashMap;

/// Handler names keyed by vtable slot (reserved slots already excluded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexNameMap {
    names: HashMap<i32, String>,
}

impl IndexNameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the name previously bound to `slot`, if any.
    pub fn insert(&mut self, slot: i32, name: impl Into<String>) -> Option<String> {
        self.names.insert(slot, name.into())
    }

    pub fn get(&self, slot: i32) -> Option<&str> {
        self.names.get(&slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(i32, S)> for IndexNameMap {
    fn from_iter<T: IntoIterator<Item = (i32, S)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (slot, name) in iter {
            map.insert(slot, name);
        }
        map
    }
}
