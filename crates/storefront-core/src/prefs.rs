//! Persisted display preferences

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseViewModeError, PrefsError};

/// Storage key for the listing's view mode
pub const VIEW_MODE_KEY: &str = "product_view_mode";

/// Listing density
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid view",
            ViewMode::List => "List view",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(ParseViewModeError(other.to_string())),
        }
    }
}

/// Synchronous key-value persistence.
///
/// Backends implement [`load`](Self::load) and [`store`](Self::store); callers
/// use [`get`](Self::get) and [`set`](Self::set), which never fail. A backend
/// failure is logged and treated as if the operation had no effect.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PrefsError>;

    fn store(&self, key: &str, value: &str) -> Result<(), PrefsError>;

    fn get(&self, key: &str) -> Option<String> {
        match self.load(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "preference read failed");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.store(key, value) {
            tracing::warn!(key, value, error = %e, "preference write failed");
        }
    }
}

/// Stored view mode, `Grid` when absent or unrecognised
pub fn load_view_mode<P: PreferenceStore + ?Sized>(prefs: &P, key: &str) -> ViewMode {
    match prefs.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e: ParseViewModeError| {
            tracing::debug!(key, error = %e, "ignoring stored view mode");
            ViewMode::default()
        }),
        None => ViewMode::default(),
    }
}

pub fn save_view_mode<P: PreferenceStore + ?Sized>(prefs: &P, key: &str, mode: ViewMode) {
    prefs.set(key, mode.as_str());
}

/// Process-local preferences. Can be told to fail, to stand in for a full or
/// disabled browser storage.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::default();
        prefs.values.borrow_mut().insert(key.to_string(), value.to_string());
        prefs
    }

    /// Make every subsequent read and write fail
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }
}

impl PreferenceStore for MemoryPrefs {
    fn load(&self, key: &str) -> Result<Option<String>, PrefsError> {
        if self.unavailable.get() {
            return Err(PrefsError::Unavailable);
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        if self.unavailable.get() {
            return Err(PrefsError::Unavailable);
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<P> {
    fn load(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).load(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).store(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_defaults_to_grid() {
        let prefs = MemoryPrefs::new();
        assert_eq!(load_view_mode(&prefs, VIEW_MODE_KEY), ViewMode::Grid);

        let junk = MemoryPrefs::with_value(VIEW_MODE_KEY, "tiles");
        assert_eq!(load_view_mode(&junk, VIEW_MODE_KEY), ViewMode::Grid);
    }

    #[test]
    fn test_view_mode_round_trip() {
        let prefs = MemoryPrefs::new();
        save_view_mode(&prefs, VIEW_MODE_KEY, ViewMode::List);
        assert_eq!(prefs.get(VIEW_MODE_KEY).as_deref(), Some("list"));
        assert_eq!(load_view_mode(&prefs, VIEW_MODE_KEY), ViewMode::List);
    }

    #[test]
    fn test_failures_are_swallowed() {
        let prefs = MemoryPrefs::with_value(VIEW_MODE_KEY, "list");
        prefs.set_unavailable(true);
        assert_eq!(prefs.get(VIEW_MODE_KEY), None);
        prefs.set(VIEW_MODE_KEY, "grid");

        prefs.set_unavailable(false);
        assert_eq!(prefs.get(VIEW_MODE_KEY).as_deref(), Some("list"));
    }

    #[test]
    fn test_parse_view_mode() {
        assert_eq!("list".parse::<ViewMode>(), Ok(ViewMode::List));
        assert!("List".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Grid.to_string(), "grid");
    }
}
