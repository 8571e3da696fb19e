//! Outbound dispatcher: validate, encode, queue.
//!
//! Validation order follows the UI flow: inputs first, connection second, so
//! an empty field never consults the connection at all.

use wsparley_core::error::{Result, WsParleyError};
use wsparley_core::protocol::envelope::{self, ChatSend, Kind, LoginPayload};

use crate::conn::ConnectionHandle;
use crate::session::{Identity, Session};

/// Explicit login: both fields required, connection must be open. Sends the
/// envelope once; no acknowledgment is awaited and nothing is retried.
pub fn login(session: &Session, user_id: &str, nick: &str) -> Result<()> {
    if user_id.is_empty() {
        return Err(WsParleyError::InvalidInput("login requires a user id".into()));
    }
    if nick.is_empty() {
        return Err(WsParleyError::InvalidInput("login requires a nick".into()));
    }
    let conn = session.active_connection().ok_or(WsParleyError::NotOpen)?;
    send_login(&conn, &Identity::new(user_id, nick))
}

/// Identity announcement, sent as-is. The automatic on-open path uses this
/// without a non-empty guard: an empty identity still goes out.
pub fn send_login(conn: &ConnectionHandle, identity: &Identity) -> Result<()> {
    let payload = LoginPayload { id: identity.user_id.clone(), nick: identity.nick.clone() };
    let frame = envelope::encode(&Kind::Login, &payload)?;
    conn.send(frame)
}

/// Encode and queue one chat line. `Ok(())` is the completion signal the UI
/// uses to clear its input field. No local echo: the server rebroadcasts to
/// everyone, sender included.
pub fn send_chat(session: &Session, text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(WsParleyError::InvalidInput("chat message is empty".into()));
    }
    let conn = session.active_connection().ok_or(WsParleyError::NotOpen)?;
    let frame = envelope::encode(&Kind::Chat, &ChatSend { message: text.to_string() })?;
    conn.send(frame)
}
