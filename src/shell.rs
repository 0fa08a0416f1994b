//! The shell is the always-present chrome wrapping the active page.
//!
//! One shell exists per session. Its configuration is read-mostly, loaded
//! once and shared; its content is the active page, replaced wholesale on
//! every successful redirect and never mutated in place.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::component::validate_slot;
use crate::error::{UiError, UiResult};
use crate::page::{split_route, Page};

/// An entry in the shell's extension menu. Activating one navigates to its
/// controller/action target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionEntry {
    pub id: String,
    pub label: String,
    pub controller: String,
    pub action: String,
}

impl ExtensionEntry {
    /// The "controller/action" route this entry navigates to
    pub fn route(&self) -> String {
        format!("{}/{}", self.controller, self.action)
    }
}

/// Feature flags and extension menu entries, loaded once per session or
/// app lifecycle and safe to read concurrently behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub features: HashMap<String, bool>,
    #[serde(default)]
    pub extensions: Vec<ExtensionEntry>,
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a shell configuration from a YAML document.
    ///
    /// ```yaml
    /// features:
    ///   dark_mode: true
    /// extensions:
    ///   - id: settings
    ///     label: Settings
    ///     controller: settings
    ///     action: index
    /// ```
    pub fn from_yaml(yaml: &str) -> UiResult<Self> {
        let config: ShellConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// A flag that is absent is disabled
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    pub fn extension(&self, id: &str) -> Option<&ExtensionEntry> {
        self.extensions.iter().find(|e| e.id == id)
    }

    /// Extension ids must be unique and every target must be a valid route
    pub fn validate(&self) -> UiResult<()> {
        let mut seen = HashSet::new();
        for entry in &self.extensions {
            validate_slot(&entry.id)?;
            if !seen.insert(entry.id.as_str()) {
                return Err(UiError::ValidationError(format!(
                    "Duplicate extension id '{}'",
                    entry.id
                )));
            }
            if entry.label.is_empty() {
                return Err(UiError::ValidationError(format!(
                    "Extension '{}' must have a label",
                    entry.id
                )));
            }
            split_route(&entry.route())?;
        }
        Ok(())
    }
}

/// Session-scoped wrapper around the active page
#[derive(Debug)]
pub struct Shell {
    config: Arc<ShellConfig>,
    content: Page,
}

impl Shell {
    pub fn new(config: Arc<ShellConfig>, content: Page) -> Self {
        Self { config, content }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Shared handle to the configuration for concurrent readers
    pub fn config_handle(&self) -> Arc<ShellConfig> {
        Arc::clone(&self.config)
    }

    /// The currently active page
    pub fn content(&self) -> &Page {
        &self.content
    }

    /// Mutable access to the active page, for collaborators whose rebuild
    /// policy mutates bound state between events. Navigation itself never
    /// mutates a page in place; it swaps via [`Self::set_content`].
    pub fn content_mut(&mut self) -> &mut Page {
        &mut self.content
    }

    /// Swap in a new page, dropping the old tree. This is the only way the
    /// active page changes.
    pub fn set_content(&mut self, page: Page) {
        self.content = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
features:
  dark_mode: true
  beta_nav: false
extensions:
  - id: settings
    label: Settings
    controller: settings
    action: index
"#;
        let config = ShellConfig::from_yaml(yaml).unwrap();
        assert!(config.feature_enabled("dark_mode"));
        assert!(!config.feature_enabled("beta_nav"));
        assert!(!config.feature_enabled("unknown"));
        assert_eq!(config.extension("settings").unwrap().route(), "settings/index");
    }

    #[test]
    fn test_duplicate_extension_ids_rejected() {
        let yaml = r#"
extensions:
  - id: settings
    label: Settings
    controller: settings
    action: index
  - id: settings
    label: Other
    controller: other
    action: index
"#;
        let err = ShellConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, UiError::ValidationError(_)));
    }

    #[test]
    fn test_bad_extension_target_rejected() {
        let yaml = r#"
extensions:
  - id: broken
    label: Broken
    controller: NotValid
    action: index
"#;
        let err = ShellConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, UiError::InvalidRoute { .. }));
    }
}
