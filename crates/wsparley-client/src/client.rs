//! Chat client: composition root and the event-driven glue.
//!
//! `ChatClient` assembles a session, a dialer, and a renderer, then drives
//! connection events: system notices at the lifecycle edges, the automatic
//! login on open, and inbound routing while open.

use std::sync::Arc;

use tokio::sync::mpsc;

use wsparley_core::error::{Result, WsParleyError};

use crate::conn::{self, ConnEvent, ConnState};
use crate::outbound;
use crate::render::LogRenderer;
use crate::router::InboundRouter;
use crate::session::Session;
use crate::transport::{Dialer, Endpoint};

// --------------------
// System notices
// --------------------

/// Appended when the socket opens.
pub const NOTICE_CONNECTED: &str = "connected to chat server..";
/// Appended when the socket closes (any cause; no retry follows).
pub const NOTICE_CLOSED: &str = "chat connection closed..";
/// Appended when the platform has no socket support.
pub const NOTICE_UNSUPPORTED: &str = "WebSockets not supported.";

/// One chat client instance.
pub struct ChatClient {
    session: Arc<Session>,
    dialer: Arc<dyn Dialer>,
    renderer: Arc<dyn LogRenderer>,
}

impl ChatClient {
    pub fn new(dialer: Arc<dyn Dialer>, renderer: Arc<dyn LogRenderer>) -> Self {
        Self { session: Arc::new(Session::new()), dialer, renderer }
    }

    /// The session, for identity management and direct slot access.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Store the identity the automatic on-open login announces.
    pub fn set_identity(&self, user_id: &str, nick: &str) {
        self.session.set_identity(user_id, nick);
    }

    /// Current lifecycle state (`Idle` before the first connect).
    pub fn state(&self) -> ConnState {
        match self.session.active_connection() {
            Some(conn) => conn.state(),
            None => ConnState::Idle,
        }
    }

    /// Open a connection to `ws://<server_addr>/channel/<channel>`.
    ///
    /// Empty parameters fail without dialing and without a notice; a dialer
    /// without socket support fails *with* the user-visible notice. Returns
    /// as soon as the background machine is started — readiness shows up as
    /// the connected notice followed by the automatic login.
    pub fn connect(&self, server_addr: &str, channel: &str) -> Result<()> {
        if server_addr.is_empty() || channel.is_empty() {
            return Err(WsParleyError::InvalidInput(
                "connect requires server address and channel".into(),
            ));
        }
        if !self.dialer.supports() {
            self.renderer.append_line(NOTICE_UNSUPPORTED);
            return Err(WsParleyError::Unsupported("platform has no socket support".into()));
        }

        let endpoint = Endpoint::new(server_addr, channel);
        tracing::info!(url = %endpoint.url(), "connecting");
        let (handle, events) = conn::open(Arc::clone(&self.dialer), endpoint);

        // Dropping the replaced handle is what shuts the old machine down:
        // it winds down once its last handle is gone and emits the closed
        // notice through its own driver.
        if self.session.attach_connection(handle).is_some() {
            tracing::warn!("replaced a live connection; the old one shuts down");
        }

        tokio::spawn(drive(Arc::clone(&self.session), Arc::clone(&self.renderer), events));
        Ok(())
    }

    /// Explicit login with a validated identity. Does not store it;
    /// `set_identity` is the separate, deliberate step.
    pub fn login(&self, user_id: &str, nick: &str) -> Result<()> {
        outbound::login(&self.session, user_id, nick)
    }

    /// Send one chat line. `Ok(())` means queued; the UI clears its input.
    pub fn send_chat(&self, text: &str) -> Result<()> {
        outbound::send_chat(&self.session, text)
    }
}

// --------------------
// Event driver
// --------------------

/// Consume connection events: notices, auto-login, inbound routing.
async fn drive(
    session: Arc<Session>,
    renderer: Arc<dyn LogRenderer>,
    mut events: mpsc::Receiver<ConnEvent>,
) {
    let router = InboundRouter::new(Arc::clone(&renderer));

    while let Some(event) = events.recv().await {
        match event {
            ConnEvent::Opened => {
                renderer.append_line(NOTICE_CONNECTED);
                auto_login(&session);
            }
            ConnEvent::Frame(frame) => {
                // undecodable frames end inside the router, silently
                let _ = router.route(&frame);
            }
            ConnEvent::Closed => {
                renderer.append_line(NOTICE_CLOSED);
            }
        }
    }
}

/// On-open login with whatever identity is currently held. Deliberately
/// unguarded: an empty identity still announces itself.
fn auto_login(session: &Arc<Session>) {
    let identity = session.identity();
    if identity.is_empty() {
        tracing::debug!("auto-login with empty identity");
    }
    let Some(conn) = session.active_connection() else {
        return;
    };
    if let Err(e) = outbound::send_login(&conn, &identity) {
        tracing::warn!(error = %e, "auto-login send failed");
    }
}
