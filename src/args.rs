use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{UiError, UiResult};

/// Ordered bag of construction-time arguments (name -> value).
///
/// Insertion order is preserved. Keys the component's kind does not declare
/// are passed through opaquely to the template collaborator; only the
/// required set is ever interpreted by the core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Args {
    entries: Vec<(String, Value)>,
}

impl Args {
    /// Create an empty argument bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Writing an existing key replaces its value
    /// in place, keeping the original position.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// String view of an argument, when it holds a string
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Returns the argument value if present and non-null.
///
/// This is the construction-time check run for every argument a kind
/// declares mandatory: a missing or null value aborts construction with an
/// error naming both the key and the component being built. No default is
/// ever substituted.
pub fn require_argument<'a>(component: &str, args: &'a Args, name: &str) -> UiResult<&'a Value> {
    match args.get(name) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(UiError::MissingArgument {
            component: component.to_string(),
            argument: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insertion_order_preserved() {
        let args = Args::new()
            .with("zeta", "z")
            .with("alpha", "a")
            .with("mid", 3);
        let keys: Vec<&str> = args.iter().map(|(n, _)| n).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_with_replaces_in_place() {
        let args = Args::new().with("label", "old").with("icon", "gear").with("label", "new");
        assert_eq!(args.len(), 2);
        assert_eq!(args.get_str("label"), Some("new"));
        let keys: Vec<&str> = args.iter().map(|(n, _)| n).collect();
        assert_eq!(keys, vec!["label", "icon"]);
    }

    #[test]
    fn test_require_argument_present() {
        let args = Args::new().with("title", "Welcome");
        let value = require_argument("Header", &args, "title").unwrap();
        assert_eq!(value, &json!("Welcome"));
    }

    #[test]
    fn test_require_argument_missing() {
        let args = Args::new();
        let err = require_argument("Header", &args, "title").unwrap_err();
        assert!(matches!(err, UiError::MissingArgument { .. }));
        assert_eq!(
            err.to_string(),
            "Missing required argument 'title' for component 'Header'"
        );
    }

    #[test]
    fn test_require_argument_null_is_missing() {
        let args = Args::new().with("title", Value::Null);
        let err = require_argument("Header", &args, "title").unwrap_err();
        assert!(matches!(err, UiError::MissingArgument { .. }));
    }
}
