//! A page is a root component bound 1:1 to a route.
//!
//! Pages are built per navigation event and replaced wholesale when the
//! shell redirects; the instance id makes that swap observable.

use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::args::Args;
use crate::component::{ComponentId, ComponentTree};
use crate::error::{UiError, UiResult};
use crate::kind::KindRegistry;

/// Routes are "controller/action", both segments lowercase snake_case
fn route_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*/[a-z][a-z0-9_]*$").unwrap())
}

/// Split a route into its (controller, action) segments
pub fn split_route(route: &str) -> UiResult<(&str, &str)> {
    if !route_regex().is_match(route) {
        return Err(UiError::InvalidRoute {
            route: route.to_string(),
        });
    }
    // the regex guarantees exactly one '/'
    let (controller, action) = route.split_once('/').ok_or_else(|| UiError::InvalidRoute {
        route: route.to_string(),
    })?;
    Ok((controller, action))
}

/// A routable root component: the entry point a controller renders into
#[derive(Debug, Clone)]
pub struct Page {
    route: String,
    instance: Uuid,
    tree: ComponentTree,
}

impl Page {
    /// Build a page for `route` rooted at a fresh component of `root_kind`.
    ///
    /// The root's slot id is the route's action segment.
    pub fn build(
        registry: &KindRegistry,
        route: &str,
        root_kind: &str,
        args: Args,
    ) -> UiResult<Self> {
        let (_, action) = split_route(route)?;
        let tree = ComponentTree::new(registry, root_kind, action, args)?;
        Ok(Self {
            route: route.to_string(),
            instance: Uuid::new_v4(),
            tree,
        })
    }

    /// The route this page is bound to ("controller/action")
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Controller segment of the route
    pub fn controller(&self) -> &str {
        // route was validated at build time
        self.route.split('/').next().unwrap_or(&self.route)
    }

    /// Action segment of the route
    pub fn action(&self) -> &str {
        self.route.split('/').nth(1).unwrap_or(&self.route)
    }

    /// Identity of this page instance. A re-render keeps it; a redirect
    /// replaces the page and with it the instance id.
    pub fn instance(&self) -> Uuid {
        self.instance
    }

    pub fn root(&self) -> ComponentId {
        self.tree.root()
    }

    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    /// Mutable access for composing child components during page build
    pub fn tree_mut(&mut self) -> &mut ComponentTree {
        &mut self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::KindSpec;

    fn registry() -> KindRegistry {
        let mut registry = KindRegistry::new();
        registry
            .register(KindSpec {
                kind: "Page".to_string(),
                view_path: "views/page.html".to_string(),
                required: vec![],
            })
            .unwrap();
        registry
    }

    #[test]
    fn test_split_route() {
        assert_eq!(split_route("home/index").unwrap(), ("home", "index"));
        assert!(matches!(
            split_route("HomeIndex").unwrap_err(),
            UiError::InvalidRoute { .. }
        ));
        assert!(matches!(
            split_route("home/index/extra").unwrap_err(),
            UiError::InvalidRoute { .. }
        ));
        assert!(matches!(
            split_route("home/").unwrap_err(),
            UiError::InvalidRoute { .. }
        ));
    }

    #[test]
    fn test_build_binds_route() {
        let page = Page::build(&registry(), "home/index", "Page", Args::new()).unwrap();
        assert_eq!(page.route(), "home/index");
        assert_eq!(page.controller(), "home");
        assert_eq!(page.action(), "index");
        assert_eq!(page.tree().node(page.root()).slot(), "index");
    }

    #[test]
    fn test_each_build_is_a_fresh_instance() {
        let registry = registry();
        let a = Page::build(&registry, "home/index", "Page", Args::new()).unwrap();
        let b = Page::build(&registry, "home/index", "Page", Args::new()).unwrap();
        assert_ne!(a.instance(), b.instance());
    }
}
