//! Per-session shell storage.
//!
//! One shell per session, created at session start and dropped at
//! teardown. Events for a session execute one at a time in arrival order:
//! the session's mutex is the serialization point, taken for the whole
//! construction/dispatch/render span of an event. The shell configuration
//! stays readable concurrently through its `Arc`.

use dashmap::DashMap;

use crate::directory::UserDirectory;
use crate::dispatch::Dispatcher;
use crate::error::{UiError, UiResult};
use crate::event::EventContext;
use crate::navigate::NavState;
use crate::shell::Shell;
use std::sync::Mutex;

/// A session's shell behind its serialization point
pub struct Session {
    shell: Mutex<Shell>,
}

impl Session {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell: Mutex::new(shell),
        }
    }

    /// Run `f` with exclusive access to the shell. No two events touch the
    /// same shell concurrently.
    pub fn with_shell<T>(&self, f: impl FnOnce(&mut Shell) -> T) -> T {
        let mut shell = self.shell.lock().unwrap();
        f(&mut shell)
    }
}

/// Global storage for sessions. Key = session id.
pub type SessionStore = DashMap<String, Session>;

/// Creates a new SessionStore.
pub fn new_session_store() -> SessionStore {
    DashMap::new()
}

/// Dispatch an event for a session, serialized against any other event on
/// the same session.
pub fn dispatch_for(
    store: &SessionStore,
    session_id: &str,
    dispatcher: &Dispatcher,
    event: &EventContext,
    users: &dyn UserDirectory,
) -> UiResult<NavState> {
    let session = store
        .get(session_id)
        .ok_or_else(|| UiError::UnknownSession {
            session: session_id.to_string(),
        })?;
    session.with_shell(|shell| dispatcher.dispatch(shell, event, users))
}
