//! Preferences persisted as a small JSON object in the user's config directory

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use storefront_core::{PreferenceStore, PrefsError};

/// Get the default preferences file
pub fn default_prefs_path() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("", "", "storefront") {
        dirs.config_dir().join("prefs.json")
    } else {
        PathBuf::from("storefront-prefs.json")
    }
}

/// `{ "key": "value", ... }` on disk
#[derive(Debug, Clone)]
pub struct JsonFilePrefs {
    path: PathBuf,
}

impl JsonFilePrefs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PrefsError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| PrefsError::Backend(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(PrefsError::Backend(e.to_string())),
        }
    }
}

impl PreferenceStore for JsonFilePrefs {
    fn load(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PrefsError::Backend(e.to_string()))?;
        }
        let text = serde_json::to_string_pretty(&values).map_err(|e| PrefsError::Backend(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| PrefsError::Backend(e.to_string()))?;
        tracing::debug!(key, value, path = %self.path.display(), "saved preference");
        Ok(())
    }
}
