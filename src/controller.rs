//! Controllers and their registry.
//!
//! A controller owns two typed lookup tables, both populated explicitly at
//! startup: event name -> handler closure, and action name -> page builder.
//! Nothing is resolved by naming convention at runtime; an event with no
//! registered handler is a routing error.

use std::collections::HashMap;
use std::sync::Arc;

use crate::component::validate_slot;
use crate::dispatch::HandlerCx;
use crate::error::{UiError, UiResult};
use crate::kind::KindRegistry;
use crate::page::Page;
use crate::shell::ShellConfig;

/// An event handler. It may call `cx.display()` / `cx.display_to(..)` at
/// most once, or return without deciding — which re-renders.
pub type HandlerFn = Arc<dyn Fn(&mut HandlerCx<'_>) -> UiResult<()> + Send + Sync>;

/// Builds the page for one controller action.
pub type PageBuilderFn = Arc<dyn Fn(&PageCx<'_>) -> UiResult<Page> + Send + Sync>;

/// Context handed to a page builder
pub struct PageCx<'a> {
    pub kinds: &'a KindRegistry,
    pub config: &'a ShellConfig,
    /// The "controller/action" route the page must bind to
    pub route: String,
}

/// Handlers and actions for one controller name
pub struct Controller {
    name: String,
    handlers: HashMap<String, HandlerFn>,
    actions: HashMap<String, PageBuilderFn>,
}

impl Controller {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: HashMap::new(),
            actions: HashMap::new(),
        }
    }

    /// Register the handler for an event name. Last registration wins.
    pub fn on<F>(mut self, event: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut HandlerCx<'_>) -> UiResult<()> + Send + Sync + 'static,
    {
        self.handlers.insert(event.into(), Arc::new(handler));
        self
    }

    /// Register the page builder for an action name.
    pub fn action<F>(mut self, name: impl Into<String>, builder: F) -> Self
    where
        F: Fn(&PageCx<'_>) -> UiResult<Page> + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Arc::new(builder));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handles(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }

    pub(crate) fn handler(&self, event: &str) -> Option<&HandlerFn> {
        self.handlers.get(event)
    }

    pub(crate) fn builder(&self, action: &str) -> Option<&PageBuilderFn> {
        self.actions.get(action)
    }

    /// Controller, event and action names are all route-segment shaped
    fn validate(&self) -> UiResult<()> {
        validate_slot(&self.name).map_err(|_| UiError::ValidationError(format!(
            "Invalid controller name '{}': must be lowercase snake_case",
            self.name
        )))?;
        for event in self.handlers.keys() {
            validate_slot(event).map_err(|_| {
                UiError::ValidationError(format!(
                    "Invalid event name '{}' on controller '{}'",
                    event, self.name
                ))
            })?;
        }
        for action in self.actions.keys() {
            validate_slot(action).map_err(|_| {
                UiError::ValidationError(format!(
                    "Invalid action name '{}' on controller '{}'",
                    action, self.name
                ))
            })?;
        }
        Ok(())
    }
}

/// All controllers known to the dispatcher
#[derive(Default)]
pub struct ControllerRegistry {
    controllers: HashMap<String, Controller>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, controller: Controller) -> UiResult<()> {
        controller.validate()?;
        if self.controllers.contains_key(controller.name()) {
            return Err(UiError::DuplicateController {
                controller: controller.name().to_string(),
            });
        }
        self.controllers
            .insert(controller.name().to_string(), controller);
        Ok(())
    }

    pub fn get(&self, name: &str) -> UiResult<&Controller> {
        self.controllers
            .get(name)
            .ok_or_else(|| UiError::UnknownController {
                controller: name.to_string(),
            })
    }

    /// Resolve a navigation target to its page builder. Unknown controller
    /// or action is a routing error, surfaced as-is.
    pub fn resolve(&self, controller: &str, action: &str) -> UiResult<&PageBuilderFn> {
        let def = self.get(controller)?;
        def.builder(action).ok_or_else(|| UiError::UnknownAction {
            controller: controller.to_string(),
            action: action.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
