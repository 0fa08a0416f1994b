//! Navigation director: one decision per event.
//!
//! Each inbound event runs a fresh cycle: `Idle` until the dispatcher picks
//! it up, `Dispatched` while the handler runs, then exactly one of
//! `ReRender` or `Redirect`. Both outcomes are terminal for the event; the
//! first decision wins and later display calls are rejected.

use tracing::debug;

use crate::component::validate_slot;
use crate::error::{UiError, UiResult};

/// Where the navigation state machine stands for the current event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    /// No event in flight
    Idle,
    /// A handler is running and has not decided yet
    Dispatched,
    /// Re-render the current view unchanged
    ReRender,
    /// Replace the shell's content with a page for this target
    Redirect { controller: String, action: String },
}

impl NavState {
    /// ReRender and Redirect end the cycle
    pub fn is_terminal(&self) -> bool {
        matches!(self, NavState::ReRender | NavState::Redirect { .. })
    }
}

/// Interprets a handler's display calls as the next render target
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavState,
}

impl Default for NavState {
    fn default() -> Self {
        NavState::Idle
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Mark the event as picked up. Fails if a cycle is already running;
    /// events for one shell are serialized upstream.
    pub fn begin(&mut self) -> UiResult<()> {
        match self.state {
            NavState::Idle => {
                self.state = NavState::Dispatched;
                Ok(())
            }
            _ => Err(UiError::EventInFlight),
        }
    }

    /// Handler selected the current view: re-render without reconstruction.
    pub fn display(&mut self) -> UiResult<()> {
        match self.state {
            NavState::Dispatched => {
                debug!("navigation: re-render current view");
                self.state = NavState::ReRender;
                Ok(())
            }
            NavState::Idle => Err(UiError::NotDispatching),
            _ => Err(UiError::NavigationDecided),
        }
    }

    /// Handler selected a different controller/action: redirect the shell.
    pub fn display_to(&mut self, controller: &str, action: &str) -> UiResult<()> {
        validate_slot(controller).map_err(|_| UiError::InvalidRoute {
            route: format!("{}/{}", controller, action),
        })?;
        validate_slot(action).map_err(|_| UiError::InvalidRoute {
            route: format!("{}/{}", controller, action),
        })?;
        match self.state {
            NavState::Dispatched => {
                debug!(controller, action, "navigation: redirect");
                self.state = NavState::Redirect {
                    controller: controller.to_string(),
                    action: action.to_string(),
                };
                Ok(())
            }
            NavState::Idle => Err(UiError::NotDispatching),
            _ => Err(UiError::NavigationDecided),
        }
    }

    /// Close the cycle when the handler returns. Completing without a
    /// display call is the same outcome as an explicit `display()`.
    pub fn finish(&mut self) -> NavState {
        if self.state == NavState::Dispatched {
            self.state = NavState::ReRender;
        }
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_means_re_render() {
        let mut nav = Navigator::new();
        nav.begin().unwrap();
        nav.display().unwrap();
        assert_eq!(nav.finish(), NavState::ReRender);
    }

    #[test]
    fn test_no_call_is_re_render() {
        let mut nav = Navigator::new();
        nav.begin().unwrap();
        assert_eq!(nav.finish(), NavState::ReRender);
    }

    #[test]
    fn test_display_to_redirects() {
        let mut nav = Navigator::new();
        nav.begin().unwrap();
        nav.display_to("auth", "logout").unwrap();
        assert_eq!(
            nav.finish(),
            NavState::Redirect {
                controller: "auth".to_string(),
                action: "logout".to_string(),
            }
        );
    }

    #[test]
    fn test_first_decision_wins() {
        let mut nav = Navigator::new();
        nav.begin().unwrap();
        nav.display_to("auth", "logout").unwrap();
        let err = nav.display().unwrap_err();
        assert!(matches!(err, UiError::NavigationDecided));
        let err = nav.display_to("home", "index").unwrap_err();
        assert!(matches!(err, UiError::NavigationDecided));
        // the original decision stands
        assert!(matches!(nav.finish(), NavState::Redirect { .. }));
    }

    #[test]
    fn test_display_outside_handler_rejected() {
        let mut nav = Navigator::new();
        let err = nav.display().unwrap_err();
        assert!(matches!(err, UiError::NotDispatching));
    }

    #[test]
    fn test_double_begin_rejected() {
        let mut nav = Navigator::new();
        nav.begin().unwrap();
        let err = nav.begin().unwrap_err();
        assert!(matches!(err, UiError::EventInFlight));
    }

    #[test]
    fn test_display_to_validates_target() {
        let mut nav = Navigator::new();
        nav.begin().unwrap();
        let err = nav.display_to("Bad", "logout").unwrap_err();
        assert!(matches!(err, UiError::InvalidRoute { .. }));
        // an invalid target is not a decision
        assert_eq!(nav.state(), &NavState::Dispatched);
    }
}
