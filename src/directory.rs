//! Security/session collaborator: user lookup by external id.
//!
//! Implementations live outside the core (LDAP, database, session cache);
//! handlers consult them to branch navigation, e.g. a forced logout flow.

use serde::{Deserialize, Serialize};

use crate::error::UiResult;

/// A user known to the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The id the transport layer authenticated
    pub external_id: String,
    pub username: String,
}

/// Lookup contract consumed by event handlers.
pub trait UserDirectory: Send + Sync {
    /// `Ok(None)` means no such user. Transport failures surface as
    /// collaborator errors, unmodified.
    fn user_by_external_id(&self, external_id: &str) -> UiResult<Option<User>>;
}

/// A directory with no users; useful as a default collaborator in tests
/// and for pages whose handlers never look anyone up.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDirectory;

impl UserDirectory for EmptyDirectory {
    fn user_by_external_id(&self, _external_id: &str) -> UiResult<Option<User>> {
        Ok(None)
    }
}
