use std::collections::HashMap;

use super::ResourceLookup;

/// In-memory resource entries keyed by (type, key).
#[derive(Clone, Debug, Default)]
pub struct MapResources {
    entries: HashMap<String, HashMap<String, String>>,
}

impl MapResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    #[must_use]
    pub fn with(
        mut self,
        type_name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(type_name, key, value);
        self
    }

    pub fn insert(
        &mut self,
        type_name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries
            .entry(type_name.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Total number of entries across all types.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceLookup for MapResources {
    fn lookup(&self, type_name: &str, key: &str) -> Option<String> {
        self.entries.get(type_name)?.get(key).cloned()
    }
}
