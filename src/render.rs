//! Render phase: bottom-up walk of a component tree through the external
//! template engine.
//!
//! Children render first, in insertion order. A parent's template may
//! place a child with a `{slot.<id>}` placeholder; child markup the
//! template did not consume is appended after the parent's own markup, in
//! insertion order. Render failures surface unmodified — there is no
//! retry and no partial output.

use crate::args::Args;
use crate::component::{ComponentId, ComponentTree};
use crate::error::{UiError, UiResult};
use crate::page::Page;

/// Model handed to the template engine for one component
pub struct ViewModel<'a> {
    /// Slot id of the component being rendered
    pub id: &'a str,
    pub kind: &'a str,
    pub args: &'a Args,
    /// Rendered child markup in insertion order: (slot id, markup)
    pub children: &'a [(String, String)],
}

/// External template engine contract.
///
/// `render` must be deterministic for a given `(view_path, model)` pair.
pub trait TemplateRenderer {
    fn render(&self, view_path: &str, model: &ViewModel<'_>) -> UiResult<String>;
}

/// Render a page to its final markup.
pub fn render_page(page: &Page, renderer: &dyn TemplateRenderer) -> UiResult<String> {
    render_component(page.tree(), page.root(), renderer)
}

/// Render one component and its subtree, children first.
pub fn render_component(
    tree: &ComponentTree,
    id: ComponentId,
    renderer: &dyn TemplateRenderer,
) -> UiResult<String> {
    let node = tree.node(id);
    if node.view_path().is_empty() {
        return Err(UiError::MissingViewPath {
            component: node.slot().to_string(),
        });
    }

    let mut children: Vec<(String, String)> = Vec::with_capacity(tree.children(id).len());
    for &child in tree.children(id) {
        let markup = render_component(tree, child, renderer)?;
        children.push((tree.node(child).slot().to_string(), markup));
    }

    let own = renderer.render(
        node.view_path(),
        &ViewModel {
            id: node.slot(),
            kind: node.kind(),
            args: node.args(),
            children: &children,
        },
    )?;

    Ok(substitute_slots(own, &children))
}

/// Replace `{slot.<id>}` placeholders with child markup; append whatever
/// the template did not reference, keeping insertion order.
fn substitute_slots(own: String, children: &[(String, String)]) -> String {
    let mut out = own;
    let mut appended = String::new();
    for (slot, markup) in children {
        let placeholder = format!("{{slot.{}}}", slot);
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, markup);
        } else {
            appended.push_str(markup);
        }
    }
    out.push_str(&appended);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_slots_placeholder() {
        let children = vec![("header".to_string(), "<h>".to_string())];
        let out = substitute_slots("[{slot.header}]".to_string(), &children);
        assert_eq!(out, "[<h>]");
    }

    #[test]
    fn test_substitute_slots_appends_unreferenced() {
        let children = vec![
            ("header".to_string(), "<h>".to_string()),
            ("content".to_string(), "<c>".to_string()),
        ];
        let out = substitute_slots("[{slot.header}]".to_string(), &children);
        assert_eq!(out, "[<h>]<c>");
    }
}
