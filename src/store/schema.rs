use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::PreferenceKey;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesData {
    pub schema_version: u32,
    #[serde(default)]
    pub values: BTreeMap<String, u32>,
}

impl Default for PreferencesData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            values: BTreeMap::new(),
        }
    }
}

impl PreferencesData {
    /// Check if loaded data has a stale schema version and needs reset.
    pub fn needs_reset(&self) -> bool {
        self.schema_version != SCHEMA_VERSION
    }

    pub fn get(&self, key: PreferenceKey) -> Option<u32> {
        self.values.get(key.as_str()).copied()
    }

    pub fn set(&mut self, key: PreferenceKey, value: u32) {
        self.values.insert(key.as_str().to_string(), value);
    }
}
