//! Catalog configuration.
//!
//! Stored as JSON, e.g.:
//!
//! ```json
//! {
//!   "bundleRoot": "resources/i18n",
//!   "locale": "ja_JP",
//!   "excludedProperties": ["class", "metaClass"]
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::base::CLASS_PROPERTY;
use crate::{Error, Result};

/// Settings for [`CatalogFactory::from_config`](crate::catalog::CatalogFactory::from_config).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Directory holding `.properties` resource bundles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_root: Option<PathBuf>,

    /// Locale tag for bundle fallback (`ja_JP`, `en`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Property names never included in catalogs. `class` is always excluded.
    pub excluded_properties: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bundle_root: None,
            locale: None,
            excluded_properties: vec![CLASS_PROPERTY.to_string()],
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bundle_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.bundle_root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded_properties.push(name.into());
        self
    }

    /// Parse from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read from a JSON file.
    pub fn read_from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!("Loaded catalog config from {}", path.display());
        Ok(config)
    }

    /// Check values that deserialization cannot.
    pub fn validate(&self) -> Result<()> {
        if let Some(root) = &self.bundle_root
            && root.is_file()
        {
            return Err(Error::config(format!(
                "bundle root {} is a file, expected a directory",
                root.display()
            )));
        }
        if let Some(locale) = &self.locale
            && locale.chars().any(char::is_whitespace)
        {
            return Err(Error::config(format!("invalid locale '{locale}'")));
        }
        if self.excluded_properties.iter().any(String::is_empty) {
            return Err(Error::config("excluded property names must not be empty"));
        }
        Ok(())
    }
}
