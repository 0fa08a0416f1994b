//! # Glasspane
//!
//! A server-side UI composition and navigation runtime: pages are trees of
//! argument-validated components wrapped by a persistent session shell,
//! and UI-originated events are routed to controller handlers that either
//! re-render the current page or redirect the whole shell.
//!
//! ## Features
//! - Arena-backed component trees with validated, typed argument bags
//! - Explicit kind registry: kind -> view path + required arguments
//! - Typed event dispatch — handlers are registered closures, no reflection
//! - A per-event navigation state machine with first-wins display semantics
//! - Session store with a per-session serialization point
//! - YAML manifests for the kind registry and shell configuration
//!
//! ## Example — composing and rendering a page
//! ```ignore
//! use glasspane::{Args, KindRegistry, Page};
//!
//! let kinds = KindRegistry::from_yaml(r#"
//! - kind: Page
//!   viewPath: views/page.html
//! - kind: Header
//!   viewPath: views/header.html
//!   required: [title]
//! "#)?;
//!
//! let mut page = Page::build(&kinds, "home/index", "Page", Args::new())?;
//! let root = page.root();
//! page.tree_mut().create_component(
//!     &kinds, root, "Header", Some("header"),
//!     Args::new().with("title", "Welcome"),
//! )?;
//! ```
//!
//! ## Example — dispatching an event
//! ```ignore
//! use glasspane::{Controller, ControllerRegistry, Dispatcher, EventContext};
//!
//! let mut controllers = ControllerRegistry::new();
//! controllers.register(
//!     Controller::new("home")
//!         .action("index", |cx| Page::build(cx.kinds, &cx.route, "Page", Args::new()))
//!         .on("key_pressed", |cx| {
//!             if cx.event.param_str("key") == Some("escape") {
//!                 cx.display_to("auth", "logout")
//!             } else {
//!                 cx.display()
//!             }
//!         }),
//! )?;
//!
//! let dispatcher = Dispatcher::new(kinds, controllers);
//! let state = dispatcher.dispatch(&mut shell, &EventContext::new("key_pressed"), &users)?;
//! ```

pub mod args;
pub mod component;
pub mod controller;
pub mod directory;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod kind;
pub mod navigate;
pub mod page;
pub mod render;
pub mod session;
pub mod shell;

// --- Core types ---
pub use args::{require_argument, Args};
pub use component::{ComponentId, ComponentNode, ComponentTree, ControlSpec};
pub use error::{UiError, UiResult};
pub use kind::{KindRegistry, KindSpec};
pub use page::{split_route, Page};
pub use shell::{ExtensionEntry, Shell, ShellConfig};

// --- Dispatch types ---
pub use controller::{Controller, ControllerRegistry, PageCx};
pub use directory::{EmptyDirectory, User, UserDirectory};
pub use dispatch::{Dispatcher, HandlerCx};
pub use event::EventContext;
pub use navigate::{NavState, Navigator};

// --- Render types ---
pub use render::{render_component, render_page, TemplateRenderer, ViewModel};

// --- Session types ---
pub use session::{dispatch_for, new_session_store, Session, SessionStore};

/// Load a kind registry from a YAML manifest
pub fn load_kinds(yaml: &str) -> UiResult<KindRegistry> {
    KindRegistry::from_yaml(yaml)
}

/// Load and validate a shell configuration from a YAML document
pub fn load_shell_config(yaml: &str) -> UiResult<ShellConfig> {
    ShellConfig::from_yaml(yaml)
}
