//! Listing configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::prefs::VIEW_MODE_KEY;
use crate::query_sync::DEFAULT_DEBOUNCE;

/// Tunables for a listing. Every field has a default, so a TOML file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub page_size: usize,
    pub debounce_ms: u64,
    /// Address query parameter mirrored from the search box
    pub search_param: String,
    /// Preference key holding the view mode
    pub view_mode_key: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            search_param: "search".to_string(),
            view_mode_key: VIEW_MODE_KEY.to_string(),
        }
    }
}

impl ListingConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ListingConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.search_param.trim().is_empty() {
            return Err(ConfigError::EmptySearchParam);
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ListingConfig::default();
        assert_eq!(config.page_size, 9);
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.search_param, "search");
        assert_eq!(config.view_mode_key, "product_view_mode");
    }

    #[test]
    fn test_partial_toml() {
        let config = ListingConfig::from_toml_str("page_size = 12\n").unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.search_param, "search");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ListingConfig::from_toml_str("page_size = 0"),
            Err(ConfigError::ZeroPageSize)
        ));
        assert!(matches!(
            ListingConfig::from_toml_str("search_param = ' '"),
            Err(ConfigError::EmptySearchParam)
        ));
        assert!(matches!(
            ListingConfig::from_toml_str("page_size = 'nine'"),
            Err(ConfigError::Toml(_))
        ));
    }
}
