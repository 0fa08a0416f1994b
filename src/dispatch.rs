//! Event dispatch: route an inbound UI event to the handler registered for
//! it on the controller owning the active page, then apply the navigation
//! outcome to the shell.
//!
//! The dispatcher performs no recovery: a missing handler is a routing
//! error, and handler or collaborator failures propagate unmodified to the
//! request boundary.

use tracing::{debug, warn};

use crate::controller::{ControllerRegistry, PageCx};
use crate::directory::UserDirectory;
use crate::error::{UiError, UiResult};
use crate::event::EventContext;
use crate::kind::KindRegistry;
use crate::navigate::{NavState, Navigator};
use crate::page::{split_route, Page};
use crate::shell::{Shell, ShellConfig};

/// Everything a handler may touch while it runs: the event's read-only
/// payload, the injected collaborators, and the display primitive.
pub struct HandlerCx<'a> {
    pub event: &'a EventContext,
    pub users: &'a dyn UserDirectory,
    pub config: &'a ShellConfig,
    nav: &'a mut Navigator,
}

impl<'a> HandlerCx<'a> {
    /// Re-render the current view unchanged.
    pub fn display(&mut self) -> UiResult<()> {
        self.nav.display()
    }

    /// Redirect the whole shell to `controller/action`.
    pub fn display_to(&mut self, controller: &str, action: &str) -> UiResult<()> {
        self.nav.display_to(controller, action)
    }
}

/// Routes events and builds pages through the startup registries.
pub struct Dispatcher {
    kinds: KindRegistry,
    controllers: ControllerRegistry,
}

impl Dispatcher {
    pub fn new(kinds: KindRegistry, controllers: ControllerRegistry) -> Self {
        Self { kinds, controllers }
    }

    pub fn kinds(&self) -> &KindRegistry {
        &self.kinds
    }

    pub fn controllers(&self) -> &ControllerRegistry {
        &self.controllers
    }

    /// Handle one inbound event against a session's shell.
    ///
    /// The owning controller is the one bound to the active page's route.
    /// On `Redirect` the shell's content is swapped for a freshly built
    /// page; on `ReRender` the existing page is kept as-is. The returned
    /// state is terminal for this event.
    pub fn dispatch(
        &self,
        shell: &mut Shell,
        event: &EventContext,
        users: &dyn UserDirectory,
    ) -> UiResult<NavState> {
        let (controller_name, _) = split_route(shell.content().route())?;
        let controller = self.controllers.get(controller_name)?;
        let handler = controller.handler(event.name()).ok_or_else(|| {
            warn!(
                controller = controller_name,
                event = event.name(),
                "no handler registered for event"
            );
            UiError::NoHandler {
                controller: controller_name.to_string(),
                event: event.name().to_string(),
            }
        })?;

        let mut nav = Navigator::new();
        nav.begin()?;
        debug!(
            controller = controller_name,
            event = event.name(),
            "dispatching event"
        );
        {
            let mut cx = HandlerCx {
                event,
                users,
                config: shell.config(),
                nav: &mut nav,
            };
            handler(&mut cx)?;
        }

        let state = nav.finish();
        if let NavState::Redirect { controller, action } = &state {
            let page = self.build_page(controller, action, shell.config())?;
            debug!(route = page.route(), "redirecting shell content");
            shell.set_content(page);
        }
        Ok(state)
    }

    /// Build the page for `controller/action` through its registered
    /// builder. Used for redirects and for a session's initial page.
    pub fn build_page(
        &self,
        controller: &str,
        action: &str,
        config: &ShellConfig,
    ) -> UiResult<Page> {
        let builder = self.controllers.resolve(controller, action)?;
        let route = format!("{}/{}", controller, action);
        let cx = PageCx {
            kinds: &self.kinds,
            config,
            route: route.clone(),
        };
        let page = builder(&cx)?;
        if page.route() != route {
            return Err(UiError::ValidationError(format!(
                "Builder for '{}' produced a page bound to '{}'",
                route,
                page.route()
            )));
        }
        Ok(page)
    }
}
