//! Registration table mapping component kinds to their default view path
//! and required-argument set.
//!
//! The table is populated once at startup, either programmatically or from
//! a YAML manifest. Construction resolves every kind through this table;
//! there is no runtime name-based discovery.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{UiError, UiResult};

/// Declaration of a single component kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindSpec {
    /// PascalCase kind name (e.g. "Header")
    pub kind: String,
    /// Template resource rendered for this kind unless a component
    /// overrides it explicitly
    #[serde(rename = "viewPath")]
    pub view_path: String,
    /// Arguments that must be present and non-null at construction
    #[serde(default)]
    pub required: Vec<String>,
}

/// The startup table of known component kinds
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    kinds: HashMap<String, KindSpec>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind. Rejects non-PascalCase names, empty view paths and
    /// double registration.
    pub fn register(&mut self, spec: KindSpec) -> UiResult<()> {
        if !is_pascal_case(&spec.kind) {
            return Err(UiError::InvalidKindName {
                kind: spec.kind.clone(),
            });
        }
        if spec.view_path.is_empty() {
            return Err(UiError::MissingViewPath {
                component: spec.kind.clone(),
            });
        }
        if self.kinds.contains_key(&spec.kind) {
            return Err(UiError::DuplicateKind {
                kind: spec.kind.clone(),
            });
        }
        self.kinds.insert(spec.kind.clone(), spec);
        Ok(())
    }

    pub fn get(&self, kind: &str) -> UiResult<&KindSpec> {
        self.kinds.get(kind).ok_or_else(|| UiError::UnknownKind {
            kind: kind.to_string(),
        })
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Load a registry from a YAML manifest: a sequence of kind specs.
    ///
    /// ```yaml
    /// - kind: Header
    ///   viewPath: views/header.html
    ///   required: [title]
    /// - kind: Button
    ///   viewPath: views/button.html
    /// ```
    pub fn from_yaml(yaml: &str) -> UiResult<Self> {
        let specs: Vec<KindSpec> = serde_yaml::from_str(yaml)?;
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec)?;
        }
        Ok(registry)
    }
}

/// Check if a string is PascalCase (starts with uppercase, alphanumeric only)
pub fn is_pascal_case(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
