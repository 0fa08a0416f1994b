//! Arena-backed component tree.
//!
//! Components live in a flat arena indexed by [`ComponentId`]; parent links
//! and ordered child lists are explicit indices, so parent lookup is O(1)
//! and the tree cannot form reference cycles. A tree is built per request
//! (or per navigation event) and discarded whole; nodes are never removed
//! individually.
//!
//! Construction and render are separate phases: nothing here touches the
//! template collaborator.

use regex::Regex;
use std::sync::OnceLock;

use crate::args::{require_argument, Args};
use crate::error::{UiError, UiResult};
use crate::kind::KindRegistry;

/// Index of a component inside its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(usize);

/// A single UI node: identity, view path, validated args, ordered children
#[derive(Debug, Clone)]
pub struct ComponentNode {
    slot: String,
    kind: String,
    view_path: String,
    args: Args,
    parent: Option<ComponentId>,
    children: Vec<ComponentId>,
}

impl ComponentNode {
    /// The node's id, unique among siblings under the same parent
    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn view_path(&self) -> &str {
        &self.view_path
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    /// Child ids in insertion order — this is the render order
    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }
}

/// Spec for an interactive leaf control (buttons and friends).
///
/// Presentation hints are opaque to the core: they are stored in the
/// argument bag and forwarded to the template collaborator untouched.
#[derive(Debug, Clone, Default)]
pub struct ControlSpec {
    pub kind: String,
    pub id: Option<String>,
    pub icon: Option<String>,
    pub label: Option<String>,
    pub animation: Option<String>,
    pub args: Args,
}

impl ControlSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn animation(mut self, animation: impl Into<String>) -> Self {
        self.animation = Some(animation.into());
        self
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.args = self.args.with(name, value);
        self
    }

    /// Fold the presentation hints into the argument bag
    fn into_args(self) -> (String, Option<String>, Args) {
        let mut args = self.args;
        if let Some(icon) = self.icon {
            args = args.with("icon", icon);
        }
        if let Some(label) = self.label {
            args = args.with("label", label);
        }
        if let Some(animation) = self.animation {
            args = args.with("animation", animation);
        }
        (self.kind, self.id, args)
    }
}

/// The component arena. Holds the root and every descendant of one page.
#[derive(Debug, Clone)]
pub struct ComponentTree {
    nodes: Vec<ComponentNode>,
    root: ComponentId,
}

impl ComponentTree {
    /// Create a tree whose root is a fresh component of `kind`.
    ///
    /// The root has no owner; its required arguments are validated exactly
    /// like any other component's.
    pub fn new(registry: &KindRegistry, kind: &str, slot: &str, args: Args) -> UiResult<Self> {
        let mut tree = Self {
            nodes: Vec::new(),
            root: ComponentId(0),
        };
        let root = tree.insert(registry, None, kind, Some(slot), args, None)?;
        tree.root = root;
        Ok(tree)
    }

    pub fn root(&self) -> ComponentId {
        self.root
    }

    pub fn node(&self, id: ComponentId) -> &ComponentNode {
        &self.nodes[id.0]
    }

    /// O(1) owner lookup; `None` for the root
    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.nodes[id.0].parent
    }

    /// Children of `id` in insertion order
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        &self.nodes[id.0].children
    }

    /// Find a direct child by its slot id
    pub fn child_by_slot(&self, parent: ComponentId, slot: &str) -> Option<ComponentId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c.0].slot == slot)
    }

    /// Number of components in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Instantiate a child of `kind` under `parent`.
    ///
    /// Validates the kind against the registry, runs the argument check
    /// over the kind's required set, assigns the explicit slot id (or a
    /// deterministic default derived from the kind) and registers the child
    /// at the next ordered position. The child's view path comes from the
    /// kind's registration.
    pub fn create_component(
        &mut self,
        registry: &KindRegistry,
        parent: ComponentId,
        kind: &str,
        slot: Option<&str>,
        args: Args,
    ) -> UiResult<ComponentId> {
        self.insert(registry, Some(parent), kind, slot, args, None)
    }

    /// Instantiate an interactive leaf control under `parent`.
    ///
    /// Identical contract to [`Self::create_component`]; the presentation
    /// hints in `spec` land in the argument bag before validation, so a
    /// kind may declare e.g. `label` as required and have the hint satisfy
    /// it.
    pub fn create_control(
        &mut self,
        registry: &KindRegistry,
        parent: ComponentId,
        spec: ControlSpec,
    ) -> UiResult<ComponentId> {
        let (kind, id, args) = spec.into_args();
        self.insert(registry, Some(parent), &kind, id.as_deref(), args, None)
    }

    /// Like [`Self::create_component`], but renders through `view_path`
    /// instead of the kind's registered default.
    pub fn create_component_with_view(
        &mut self,
        registry: &KindRegistry,
        parent: ComponentId,
        kind: &str,
        slot: Option<&str>,
        args: Args,
        view_path: &str,
    ) -> UiResult<ComponentId> {
        self.insert(registry, Some(parent), kind, slot, args, Some(view_path))
    }

    /// Point an existing component at a different template resource.
    /// The path must be non-empty; every component must resolve to a view
    /// path before render.
    pub fn override_view_path(&mut self, id: ComponentId, view_path: &str) -> UiResult<()> {
        if view_path.is_empty() {
            return Err(UiError::MissingViewPath {
                component: self.nodes[id.0].slot.clone(),
            });
        }
        self.nodes[id.0].view_path = view_path.to_string();
        Ok(())
    }

    fn insert(
        &mut self,
        registry: &KindRegistry,
        parent: Option<ComponentId>,
        kind: &str,
        slot: Option<&str>,
        args: Args,
        view_path: Option<&str>,
    ) -> UiResult<ComponentId> {
        let spec = registry.get(kind)?;

        // Argument check runs before anything is allocated: a component
        // with a missing required argument never exists.
        let slot_for_errors = slot.unwrap_or(kind);
        for required in &spec.required {
            require_argument(slot_for_errors, &args, required)?;
        }

        let slot = match slot {
            Some(explicit) => {
                validate_slot(explicit)?;
                if let Some(parent) = parent {
                    if self.child_by_slot(parent, explicit).is_some() {
                        return Err(UiError::DuplicateChildId {
                            parent: self.nodes[parent.0].slot.clone(),
                            id: explicit.to_string(),
                        });
                    }
                }
                explicit.to_string()
            }
            None => match parent {
                Some(parent) => self.default_slot(parent, kind),
                None => default_slot_base(kind),
            },
        };

        let view_path = match view_path {
            Some(path) if !path.is_empty() => path.to_string(),
            Some(_) => {
                return Err(UiError::MissingViewPath {
                    component: slot.clone(),
                })
            }
            None => spec.view_path.clone(),
        };

        let id = ComponentId(self.nodes.len());
        self.nodes.push(ComponentNode {
            slot,
            kind: kind.to_string(),
            view_path,
            args,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        Ok(id)
    }

    /// Deterministic default slot id: the kind's snake_case name plus the
    /// first free ordinal under this parent.
    fn default_slot(&self, parent: ComponentId, kind: &str) -> String {
        let base = default_slot_base(kind);
        let mut ordinal = self.nodes[parent.0].children.len();
        loop {
            let candidate = format!("{}_{}", base, ordinal);
            if self.child_by_slot(parent, &candidate).is_none() {
                return candidate;
            }
            ordinal += 1;
        }
    }
}

/// snake_case form of a PascalCase kind name ("NavButton" -> "nav_button")
fn default_slot_base(kind: &str) -> String {
    let mut out = String::with_capacity(kind.len() + 2);
    for (i, c) in kind.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn slot_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap())
}

/// Slot ids are lowercase snake_case, like route segments
pub(crate) fn validate_slot(slot: &str) -> UiResult<()> {
    if !slot_regex().is_match(slot) {
        return Err(UiError::InvalidComponentId {
            id: slot.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::KindSpec;
    use pretty_assertions::assert_eq;

    fn registry() -> KindRegistry {
        let mut registry = KindRegistry::new();
        for (kind, view, required) in [
            ("Page", "views/page.html", vec![]),
            ("Header", "views/header.html", vec!["title"]),
            ("Region", "views/region.html", vec![]),
            ("NavButton", "views/nav_button.html", vec![]),
        ] {
            registry
                .register(KindSpec {
                    kind: kind.to_string(),
                    view_path: view.to_string(),
                    required: required.into_iter().map(str::to_string).collect(),
                })
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_missing_required_argument_aborts_construction() {
        let registry = registry();
        let mut tree = ComponentTree::new(&registry, "Page", "page", Args::new()).unwrap();
        let before = tree.len();
        let err = tree
            .create_component(&registry, tree.root(), "Header", Some("header"), Args::new())
            .unwrap_err();
        assert!(matches!(err, UiError::MissingArgument { .. }));
        // nothing was allocated, no partially built tree
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let registry = registry();
        let mut tree = ComponentTree::new(&registry, "Page", "page", Args::new()).unwrap();
        let root = tree.root();
        tree.create_component(&registry, root, "Region", Some("content"), Args::new())
            .unwrap();
        let err = tree
            .create_component(&registry, root, "Region", Some("content"), Args::new())
            .unwrap_err();
        assert!(matches!(err, UiError::DuplicateChildId { .. }));
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let registry = registry();
        let mut tree = ComponentTree::new(&registry, "Page", "page", Args::new()).unwrap();
        let root = tree.root();
        let title = Args::new().with("title", "t");
        tree.create_component(&registry, root, "Header", Some("zz_last_name"), title)
            .unwrap();
        tree.create_component(&registry, root, "Region", Some("aa_first_name"), Args::new())
            .unwrap();
        let slots: Vec<&str> = tree
            .children(root)
            .iter()
            .map(|&c| tree.node(c).slot())
            .collect();
        // order is insertion order, not id order
        assert_eq!(slots, vec!["zz_last_name", "aa_first_name"]);
    }

    #[test]
    fn test_default_slot_is_deterministic() {
        let registry = registry();
        let mut tree = ComponentTree::new(&registry, "Page", "page", Args::new()).unwrap();
        let root = tree.root();
        let a = tree
            .create_component(&registry, root, "NavButton", None, Args::new())
            .unwrap();
        let b = tree
            .create_component(&registry, root, "NavButton", None, Args::new())
            .unwrap();
        assert_eq!(tree.node(a).slot(), "nav_button_0");
        assert_eq!(tree.node(b).slot(), "nav_button_1");
    }

    #[test]
    fn test_default_slot_skips_taken_names() {
        let registry = registry();
        let mut tree = ComponentTree::new(&registry, "Page", "page", Args::new()).unwrap();
        let root = tree.root();
        tree.create_component(&registry, root, "Region", Some("region_0"), Args::new())
            .unwrap();
        // default for the second child starts at ordinal 1, which is free
        let id = tree
            .create_component(&registry, root, "Region", None, Args::new())
            .unwrap();
        assert_eq!(tree.node(id).slot(), "region_1");
    }

    #[test]
    fn test_parent_lookup() {
        let registry = registry();
        let mut tree = ComponentTree::new(&registry, "Page", "page", Args::new()).unwrap();
        let root = tree.root();
        let region = tree
            .create_component(&registry, root, "Region", Some("content"), Args::new())
            .unwrap();
        assert_eq!(tree.parent(region), Some(root));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn test_control_hints_land_in_args() {
        let registry = registry();
        let mut tree = ComponentTree::new(&registry, "Page", "page", Args::new()).unwrap();
        let root = tree.root();
        let spec = ControlSpec::new("NavButton")
            .id("logout")
            .icon("door")
            .label("Log out")
            .animation("pulse")
            .arg("confirm", true);
        let id = tree.create_control(&registry, root, spec).unwrap();
        let node = tree.node(id);
        assert_eq!(node.slot(), "logout");
        assert_eq!(node.args().get_str("icon"), Some("door"));
        assert_eq!(node.args().get_str("label"), Some("Log out"));
        assert_eq!(node.args().get_str("animation"), Some("pulse"));
        assert_eq!(node.args().get("confirm"), Some(&serde_json::json!(true)));
    }

    #[test]
    fn test_invalid_slot_rejected() {
        let registry = registry();
        let mut tree = ComponentTree::new(&registry, "Page", "page", Args::new()).unwrap();
        let err = tree
            .create_component(&registry, tree.root(), "Region", Some("Not-Valid"), Args::new())
            .unwrap_err();
        assert!(matches!(err, UiError::InvalidComponentId { .. }));
    }
}
