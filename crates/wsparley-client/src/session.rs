//! Session: identity + the single connection slot.

use std::sync::{Mutex, RwLock};

use crate::conn::ConnectionHandle;

/// User identity as announced in the login envelope. Empty until populated
/// by an explicit call; nothing on the wire ever writes it back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub nick: String,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, nick: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), nick: nick.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_empty() && self.nick.is_empty()
    }
}

/// Per-client state: who we are and the one live connection.
///
/// At most one connection is held at a time. Attaching over a live handle
/// returns the old one; whether it shuts down is the caller's call (dropping
/// the last handle does). The slot also keeps a closed handle around, so
/// send guards are state checks rather than presence checks once anything
/// was attached.
#[derive(Default)]
pub struct Session {
    identity: RwLock<Identity>,
    active: Mutex<Option<ConnectionHandle>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_identity(&self, user_id: &str, nick: &str) {
        *self.identity.write().unwrap_or_else(|e| e.into_inner()) = Identity::new(user_id, nick);
    }

    /// Snapshot of the current identity.
    pub fn identity(&self) -> Identity {
        self.identity.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Install a connection, returning the replaced handle if one was there.
    pub fn attach_connection(&self, conn: ConnectionHandle) -> Option<ConnectionHandle> {
        self.active.lock().unwrap_or_else(|e| e.into_inner()).replace(conn)
    }

    /// Empty the slot. The handle stays valid for whoever still holds it.
    pub fn detach_connection(&self) -> Option<ConnectionHandle> {
        self.active.lock().unwrap_or_else(|e| e.into_inner()).take()
    }

    /// Clone of the active handle, if any.
    pub fn active_connection(&self) -> Option<ConnectionHandle> {
        self.active.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
