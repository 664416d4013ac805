use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::store::schema::PreferencesData;
use crate::store::{PreferenceKey, PreferenceStore, StoreError};

const PREFERENCES_FILE: &str = "preferences.json";

/// Preferences persisted as pretty JSON in the user's data directory.
pub struct JsonPreferenceStore {
    base_dir: PathBuf,
    data: PreferencesData,
}

impl JsonPreferenceStore {
    pub fn new() -> Result<Self, StoreError> {
        let base_dir = dirs::data_dir()
            .ok_or(StoreError::NoDataDir)?
            .join("times-tables");
        Self::with_base_dir(base_dir)
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_dir)?;
        let data = Self::load(&base_dir.join(PREFERENCES_FILE));
        Ok(Self { base_dir, data })
    }

    pub fn file_path(&self) -> PathBuf {
        self.base_dir.join(PREFERENCES_FILE)
    }

    /// Missing, unreadable, corrupt or stale files all read as empty.
    fn load(path: &Path) -> PreferencesData {
        if !path.exists() {
            return PreferencesData::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<PreferencesData>(&content) {
                Ok(data) if !data.needs_reset() => data,
                _ => PreferencesData::default(),
            },
            Err(_) => PreferencesData::default(),
        }
    }

    fn save(&self) -> Result<(), StoreError> {
        let path = self.file_path();
        let tmp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(&self.data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: PreferenceKey) -> Option<u32> {
        self.data.get(key)
    }

    fn set(&mut self, key: PreferenceKey, value: u32) -> Result<(), StoreError> {
        self.data.set(key, value);
        self.save()
    }
}
