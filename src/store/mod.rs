pub mod json_store;
pub mod schema;

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine a data directory")]
    NoDataDir,
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The named integer slots that survive between launches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    SelectedTable,
    QuestionsPerRound,
}

impl PreferenceKey {
    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceKey::SelectedTable => "selected_table",
            PreferenceKey::QuestionsPerRound => "questions_per_round",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Get/set access to persisted preferences, injected into the quiz session.
pub trait PreferenceStore {
    fn get(&self, key: PreferenceKey) -> Option<u32>;
    fn set(&mut self, key: PreferenceKey, value: u32) -> Result<(), StoreError>;
}

/// Volatile store for tests and `--no-save` style runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<PreferenceKey, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: &[(PreferenceKey, u32)]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: PreferenceKey) -> Option<u32> {
        self.values.get(&key).copied()
    }

    fn set(&mut self, key: PreferenceKey, value: u32) -> Result<(), StoreError> {
        self.values.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(PreferenceKey::SelectedTable), None);
        store.set(PreferenceKey::SelectedTable, 7).unwrap();
        assert_eq!(store.get(PreferenceKey::SelectedTable), Some(7));
        assert_eq!(store.get(PreferenceKey::QuestionsPerRound), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(PreferenceKey::SelectedTable.to_string(), "selected_table");
        assert_eq!(PreferenceKey::QuestionsPerRound.as_str(), "questions_per_round");
    }
}
