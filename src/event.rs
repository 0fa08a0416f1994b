//! Request-scoped, read-only context for one inbound UI event.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One UI-originated event as handed to the dispatcher.
///
/// Payload fields (e.g. a pressed-key identifier) are ambient, read-only
/// context for the handler; the core never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default)]
    payload: HashMap<String, Value>,
}

impl EventContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            payload: HashMap::new(),
        }
    }

    /// Record the slot id of the component that fired the event
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(name.into(), value.into());
        self
    }

    /// The event name handlers are registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    pub fn param_str(&self, name: &str) -> Option<&str> {
        self.payload.get(name).and_then(|v| v.as_str())
    }
}
